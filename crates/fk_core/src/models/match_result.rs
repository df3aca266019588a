use super::events::{EventKind, MatchEvent};
use crate::engine::team::{PlayerId, TeamSide};
use serde::{Deserialize, Serialize};

/// Per-team counters accumulated by the referee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub goals: u8,
    pub shots: u16,
    pub frame_hits: u16,
    pub tackles: u16,
    pub kicks: u32,
}

/// One kick of a penalty shoot-out, in the order taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootoutKick {
    pub side: TeamSide,
    pub taker: PlayerId,
    pub scored: bool,
}

/// Penalty shoot-out outcome. The regulation score is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootoutResult {
    pub goals_home: u8,
    pub goals_away: u8,
    pub winner: TeamSide,
    pub kicks: Vec<ShootoutKick>,
}

impl ShootoutResult {
    pub fn kicks_taken(&self, side: TeamSide) -> usize {
        self.kicks.iter().filter(|k| k.side == side).count()
    }
}

/// Plain result data handed back to the competition layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team: String,
    pub away_team: String,
    pub score_home: u8,
    pub score_away: u8,
    pub extra_time: bool,
    pub ticks: u64,
    pub duration_secs: f32,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
    pub events: Vec<MatchEvent>,
    /// Only present when a level cup tie went to penalties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_shootout: Option<ShootoutResult>,
}

impl MatchResult {
    /// Shoot-out winner on a level score; `None` on a draw.
    pub fn winner(&self) -> Option<TeamSide> {
        match self.score_home.cmp(&self.score_away) {
            std::cmp::Ordering::Greater => Some(TeamSide::First),
            std::cmp::Ordering::Less => Some(TeamSide::Second),
            std::cmp::Ordering::Equal => self.penalty_shootout.as_ref().map(|s| s.winner),
        }
    }

    pub fn total_goals(&self) -> u16 {
        self.score_home as u16 + self.score_away as u16
    }

    pub fn goal_events(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter().filter(|e| e.is_goal())
    }

    /// Goals per side recounted from the event log.
    pub fn goals_from_events(&self) -> (u8, u8) {
        self.goal_events().fold((0, 0), |(h, a), e| match e.kind {
            EventKind::Goal { side: TeamSide::First, .. } => (h + 1, a),
            EventKind::Goal { side: TeamSide::Second, .. } => (h, a + 1),
            _ => (h, a),
        })
    }
}
