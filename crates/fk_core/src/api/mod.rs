pub mod json_api;

pub use json_api::{
    match_request_schema, simulate_batch, simulate_match, simulate_match_json, MatchRequest, MatchResponse,
};
