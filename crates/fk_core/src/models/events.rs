use crate::engine::match_state::{MatchHalf, RestartKind};
use crate::engine::team::{PlayerId, TeamSide};
use serde::{Deserialize, Serialize};

/// Something the referee or the engine recorded during a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    /// Simulated seconds since kick-off of the first half
    pub time_secs: f32,
    /// Football minute (0-based, 45 per half, extra time continues from 90)
    pub minute: u16,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    KickOff { side: TeamSide },
    Goal { side: TeamSide, scorer: Option<PlayerId>, own_goal: bool },
    Shot { side: TeamSide, shooter: PlayerId },
    FrameHit { last_touch: Option<PlayerId> },
    Tackle { tackler: PlayerId, victim: PlayerId },
    Grab { keeper: PlayerId },
    Restart { kind: RestartKind, side: TeamSide },
    HalfChanged { half: MatchHalf },
    /// Shoot-out kick; does not change the score
    PenaltyKick { side: TeamSide, taker: PlayerId, scored: bool },
}

impl MatchEvent {
    pub fn is_goal(&self) -> bool {
        matches!(self.kind, EventKind::Goal { .. })
    }
}
