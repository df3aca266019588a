//! JSON entry points for the competition layer and other embedders.
//!
//! Request:
//! ```json
//! {
//!   "schema_version": 1,
//!   "seed": 42,
//!   "home_team": { "name": "...", "players": [ ... ] },
//!   "away_team": { "name": "...", "players": [ ... ] },
//!   "extra_time": false,
//!   "config": { "timing": { "half_duration_secs": 300 } }
//! }
//! ```
//! The response is the `MatchResult` with `schema_version` alongside.

use crate::engine::{EngineConfig, Match};
use crate::error::{Result, SimError};
use crate::models::{MatchResult, TeamSetup};
use rayon::prelude::*;
use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: TeamSetup,
    pub away_team: TeamSetup,
    /// Cup tie: level after 90 minutes goes to extra time, then penalties
    #[serde(default)]
    pub extra_time: bool,
    /// Engine tuning; defaults apply when absent
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

impl MatchRequest {
    pub fn new(seed: u64, home_team: TeamSetup, away_team: TeamSetup) -> Self {
        Self { schema_version: SCHEMA_VERSION, seed, home_team, away_team, extra_time: false, config: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Play one match to completion.
pub fn simulate_match(request: &MatchRequest) -> Result<MatchResult> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(SimError::UnsupportedSchema(request.schema_version));
    }
    let config = request.config.unwrap_or_default();

    log::info!(
        "simulating {} vs {} (seed {}, extra time {})",
        request.home_team.name,
        request.away_team.name,
        request.seed,
        request.extra_time
    );

    let mut game = Match::new(&request.home_team, &request.away_team, config, request.seed, request.extra_time)?;
    let result = game.play();

    log::info!(
        "{} {} - {} {} after {} ticks",
        result.home_team,
        result.score_home,
        result.score_away,
        result.away_team,
        result.ticks
    );
    Ok(result)
}

/// JSON in, JSON out.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json).map_err(|e| {
        log::warn!("rejecting match request: {}", e);
        e
    })?;
    let result = simulate_match(&request)?;
    let response = MatchResponse { schema_version: SCHEMA_VERSION, result };
    Ok(serde_json::to_string(&response)?)
}

/// Play independent matches in parallel. Results keep the request order;
/// each match is still single-threaded and seed-deterministic.
pub fn simulate_batch(requests: &[MatchRequest]) -> Vec<Result<MatchResult>> {
    log::debug!("simulating batch of {} matches", requests.len());
    requests.par_iter().map(simulate_match).collect()
}

/// JSON schema of `MatchRequest`, for request builders and validators.
pub fn match_request_schema() -> RootSchema {
    schemars::schema_for!(MatchRequest)
}
