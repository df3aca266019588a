pub mod events;
pub mod match_result;
pub mod player;
pub mod team;

pub use events::{EventKind, MatchEvent};
pub use match_result::{MatchResult, ShootoutKick, ShootoutResult, TeamStats};
pub use player::{PlayerPosition, PlayerProfile, PlayerSkills, PlayerTactics};
pub use team::{TeamSetup, MAX_PLAYERS};
