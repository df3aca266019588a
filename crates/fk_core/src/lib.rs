//! # fk_core - Entity-Level Football Match Simulation
//!
//! Fixed-step simulation of a football match: every player and the ball are
//! physical bodies advanced each tick, players are driven by controllers
//! (built-in AI or external input) and a referee turns positions into goals,
//! restarts and phase changes.
//!
//! ## Features
//! - Deterministic: same line-ups, config and seed give the same match
//! - Goal frame, bounce, rolling and air drag for the ball
//! - Kick cooldowns, tackles and recovery for players
//! - JSON API and parallel batch simulation
//!
//! ```no_run
//! use fk_core::{simulate_match, MatchRequest, TeamSetup};
//!
//! let request = MatchRequest::new(42, TeamSetup::standard("Home", 0.6), TeamSetup::standard("Away", 0.5));
//! let result = simulate_match(&request).unwrap();
//! println!("{} - {}", result.score_home, result.score_away);
//! ```

#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{
    match_request_schema, simulate_batch, simulate_match, simulate_match_json, MatchRequest, MatchResponse,
};
pub use engine::{EngineConfig, Match, MatchHalf, PlayerAction, PlayerController, PlayerId, TeamSide};
pub use error::{Result, SimError};
pub use models::{
    EventKind, MatchEvent, MatchResult, PlayerProfile, PlayerSkills, PlayerTactics, ShootoutKick, ShootoutResult, TeamSetup,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub use api::json_api::SCHEMA_VERSION;
