//! Match simulation engine
//!
//! Leaves first: `timer`, `coordinates`, `entity`, then the `ball` and
//! `player` bodies, the controllers and actions that drive players, and
//! `match_engine`, which owns everything and runs the tick loop.

pub mod actions;
pub mod ai;
pub mod ball;
pub mod config;
pub mod controller;
pub mod coordinates;
pub mod entity;
pub mod match_engine;
pub mod match_state;
pub mod penalties;
pub mod physics_constants;
pub mod player;
pub mod team;
pub mod tick_snapshot;
pub mod timer;
pub mod timestep;

pub use actions::{ActionOutcome, PlayerAction};
pub use ai::PlayerAIController;
pub use ball::{Ball, BallUpdate};
pub use config::{BallConfig, EngineConfig, TimingConfig};
pub use controller::{ExternalControlHandle, ExternalController, PlayerController};
pub use coordinates::{AbsVector3, Pitch, RelVector3};
pub use entity::{Entity, MatchEntity};
pub use match_engine::Match;
pub use match_state::{MatchHalf, PlayState, RestartKind};
pub use penalties::run_shootout;
pub use player::Player;
pub use team::{PlayerId, Team, TeamSide};
pub use tick_snapshot::{BallSnapshot, PlayerSnapshot, TickSnapshot};
pub use timer::{Timer, TimerState};
