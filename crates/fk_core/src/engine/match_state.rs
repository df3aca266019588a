//! Match phase state machines
//!
//! ```text
//! NotStarted → FirstHalf → HalfTimePauseBegin → HalfTimePauseEnd → SecondHalf
//!   → Finished
//!   → FullTimePauseBegin → FullTimePauseEnd → ExtraTimeFirstHalf
//!       → ExtraTimeSecondHalf → Finished            (level score + extra time)
//!       → PenaltyShootout → Finished                (still level)
//! ```
//!
//! Entering `HalfTimePauseEnd`, `FullTimePauseEnd` or `ExtraTimeSecondHalf`
//! swaps the playing direction of both teams.

use super::coordinates::AbsVector3;
use super::team::TeamSide;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchHalf {
    NotStarted,
    FirstHalf,
    HalfTimePauseBegin,
    HalfTimePauseEnd,
    SecondHalf,
    FullTimePauseBegin,
    FullTimePauseEnd,
    ExtraTimeFirstHalf,
    ExtraTimeSecondHalf,
    /// Resolved on entry; never played on the pitch
    PenaltyShootout,
    Finished,
}

impl MatchHalf {
    /// Transition into this phase mirrors every team's playing direction.
    pub fn changes_direction(&self) -> bool {
        matches!(
            self,
            MatchHalf::HalfTimePauseEnd | MatchHalf::FullTimePauseEnd | MatchHalf::ExtraTimeSecondHalf
        )
    }

    pub fn is_playing(&self) -> bool {
        matches!(
            self,
            MatchHalf::FirstHalf
                | MatchHalf::SecondHalf
                | MatchHalf::ExtraTimeFirstHalf
                | MatchHalf::ExtraTimeSecondHalf
        )
    }

    pub fn is_extra_time(&self) -> bool {
        matches!(self, MatchHalf::ExtraTimeFirstHalf | MatchHalf::ExtraTimeSecondHalf)
    }

    /// Side taking the opening kick-off of a playing half.
    pub fn kickoff_side(&self) -> TeamSide {
        match self {
            MatchHalf::SecondHalf | MatchHalf::ExtraTimeSecondHalf => TeamSide::Second,
            _ => TeamSide::First,
        }
    }

    /// Following phase. `level_cup_tie` (score level and extra time enabled)
    /// is consulted at the end of the second half and of extra time.
    pub fn next(&self, level_cup_tie: bool) -> MatchHalf {
        match self {
            MatchHalf::NotStarted => MatchHalf::FirstHalf,
            MatchHalf::FirstHalf => MatchHalf::HalfTimePauseBegin,
            MatchHalf::HalfTimePauseBegin => MatchHalf::HalfTimePauseEnd,
            MatchHalf::HalfTimePauseEnd => MatchHalf::SecondHalf,
            MatchHalf::SecondHalf => {
                if level_cup_tie {
                    MatchHalf::FullTimePauseBegin
                } else {
                    MatchHalf::Finished
                }
            }
            MatchHalf::FullTimePauseBegin => MatchHalf::FullTimePauseEnd,
            MatchHalf::FullTimePauseEnd => MatchHalf::ExtraTimeFirstHalf,
            MatchHalf::ExtraTimeFirstHalf => MatchHalf::ExtraTimeSecondHalf,
            MatchHalf::ExtraTimeSecondHalf => {
                if level_cup_tie {
                    MatchHalf::PenaltyShootout
                } else {
                    MatchHalf::Finished
                }
            }
            MatchHalf::PenaltyShootout | MatchHalf::Finished => MatchHalf::Finished,
        }
    }

    /// Football minute at which this phase starts (regular halves 45 min,
    /// extra-time halves 15 min).
    pub fn minute_offset(&self) -> u16 {
        match self {
            MatchHalf::NotStarted | MatchHalf::FirstHalf => 0,
            MatchHalf::HalfTimePauseBegin | MatchHalf::HalfTimePauseEnd | MatchHalf::SecondHalf => 45,
            MatchHalf::FullTimePauseBegin | MatchHalf::FullTimePauseEnd | MatchHalf::ExtraTimeFirstHalf => 90,
            MatchHalf::ExtraTimeSecondHalf => 105,
            MatchHalf::PenaltyShootout | MatchHalf::Finished => 120,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartKind {
    ThrowIn,
    GoalKick,
    Corner,
}

/// Referee state within a playing half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayState {
    /// Ball on the centre spot, `side` to kick
    Kickoff(TeamSide),
    InPlay,
    /// Ball dead at `spot`, `side` to take the restart
    Restart { kind: RestartKind, side: TeamSide, spot: AbsVector3 },
}

impl PlayState {
    /// Side entitled to touch the ball next, if play is stopped.
    pub fn awarded_side(&self) -> Option<TeamSide> {
        match self {
            PlayState::Kickoff(side) => Some(*side),
            PlayState::Restart { side, .. } => Some(*side),
            PlayState::InPlay => None,
        }
    }

    pub fn is_in_play(&self) -> bool {
        matches!(self, PlayState::InPlay)
    }
}
