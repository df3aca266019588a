//! Match-time team: owns its players and knows which end it attacks.

use super::coordinates::{AbsVector3, Pitch, RelVector3};
use super::match_state::MatchHalf;
use super::player::Player;
use crate::models::TeamSetup;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamSide {
    /// Home side; defends -y in the first half
    First,
    /// Away side; defends +y in the first half
    Second,
}

impl TeamSide {
    pub const BOTH: [TeamSide; 2] = [TeamSide::First, TeamSide::Second];

    pub fn index(&self) -> usize {
        match self {
            TeamSide::First => 0,
            TeamSide::Second => 1,
        }
    }

    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::First => TeamSide::Second,
            TeamSide::Second => TeamSide::First,
        }
    }

    /// Orient a canonical (defends -y) relative position for this side at kick-off.
    pub fn orient(&self, canonical: RelVector3) -> RelVector3 {
        match self {
            TeamSide::First => canonical,
            TeamSide::Second => canonical.mirrored(),
        }
    }
}

/// Stable, non-owning handle to a player: side plus roster index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId {
    pub side: TeamSide,
    pub index: usize,
}

impl PlayerId {
    pub fn new(side: TeamSide, index: usize) -> Self {
        Self { side, index }
    }
}

#[derive(Debug)]
pub struct Team {
    name: String,
    side: TeamSide,
    attacks_up: bool,
    players: Vec<Player>,
}

impl Team {
    /// Build the match-time roster. Players start at the pause position beside
    /// the pitch. `seed` feeds each player's AI controller.
    pub fn new(setup: &TeamSetup, side: TeamSide, pitch: &Pitch, seed: u64) -> Self {
        let pause = pitch.relative_to_absolute(&Self::pause_position_for(side));
        let players = setup
            .players
            .iter()
            .enumerate()
            .map(|(index, profile)| {
                let id = PlayerId::new(side, index);
                let player_seed = seed
                    .wrapping_mul(0x9E37_79B9_7F4A_7C15)
                    .wrapping_add(((side.index() as u64) << 8) | index as u64);
                Player::new(profile, id, pause, player_seed)
            })
            .collect();

        Self {
            name: setup.name.clone(),
            side,
            attacks_up: side == TeamSide::First,
            players,
        }
    }

    /// Relative pause position of `side`, just outside the near touchline
    pub fn pause_position_for(side: TeamSide) -> RelVector3 {
        let y = match side {
            TeamSide::First => -0.05,
            TeamSide::Second => 0.05,
        };
        RelVector3::new(-1.1, y, 0.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> TeamSide {
        self.side
    }

    pub fn is_first(&self) -> bool {
        self.side == TeamSide::First
    }

    /// Attacking the goal at +y in the current phase
    pub fn attacks_up(&self) -> bool {
        self.attacks_up
    }

    /// Where players wait during pauses (relative, beside the touchline)
    pub fn pause_position(&self) -> RelVector3 {
        Self::pause_position_for(self.side)
    }

    pub fn own_goal(&self, pitch: &Pitch) -> AbsVector3 {
        pitch.goal_center(!self.attacks_up)
    }

    pub fn opponent_goal(&self, pitch: &Pitch) -> AbsVector3 {
        pitch.goal_center(self.attacks_up)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn goalkeeper(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_goalkeeper())
    }

    /// Propagate a phase change to the roster; flips the attack direction when
    /// the phase swaps ends.
    pub fn match_half_changed(&mut self, half: MatchHalf) {
        if half.changes_direction() {
            self.attacks_up = !self.attacks_up;
        }
        for p in &mut self.players {
            p.match_half_changed(half);
        }
    }
}
