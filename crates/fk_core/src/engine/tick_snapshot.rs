//! Per-tick world snapshot
//!
//! Captured once at the start of a tick, before any controller runs. Every
//! controller decides against the same frozen view, so the order in which
//! players are asked does not leak into their decisions.

use super::ball::Ball;
use super::coordinates::{AbsVector3, Pitch};
use super::entity::Entity;
use super::match_state::{MatchHalf, PlayState};
use super::player::Player;
use super::team::{PlayerId, Team, TeamSide};
use crate::models::PlayerPosition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub position: AbsVector3,
    pub velocity: AbsVector3,
    pub grabber: Option<PlayerId>,
    pub last_touch: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub shirt_number: u8,
    pub role: PlayerPosition,
    pub position: AbsVector3,
    pub velocity: AbsVector3,
    /// Home position in absolute coordinates
    pub home: AbsVector3,
    pub standing: bool,
    pub can_kick: bool,
    pub airborne: bool,
    pub run_speed: f32,
    pub max_shot_power: f32,
}

impl PlayerSnapshot {
    fn capture(p: &Player, pitch: &Pitch) -> Self {
        Self {
            id: p.id(),
            shirt_number: p.shirt_number(),
            role: p.tactics().position,
            position: *p.position(),
            velocity: *p.velocity(),
            home: pitch.relative_to_absolute(p.home_position()),
            standing: p.standing(),
            can_kick: p.can_kick_ball(),
            airborne: p.is_airborne(),
            run_speed: p.run_speed(),
            max_shot_power: p.max_shot_power(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub time_secs: f32,
    pub half: MatchHalf,
    pub play_state: PlayState,
    pub pitch: Pitch,
    pub ball: BallSnapshot,
    /// First side then Second, roster order
    pub players: Vec<PlayerSnapshot>,
    /// Indexed by `TeamSide::index()`
    pub attacks_up: [bool; 2],
}

impl TickSnapshot {
    pub fn capture(
        time_secs: f32,
        half: MatchHalf,
        play_state: PlayState,
        pitch: Pitch,
        ball: &Ball,
        teams: &[Team; 2],
    ) -> Self {
        let players = teams
            .iter()
            .flat_map(|t| t.players().iter().map(|p| PlayerSnapshot::capture(p, &pitch)))
            .collect();

        Self {
            time_secs,
            half,
            play_state,
            pitch,
            ball: BallSnapshot {
                position: *ball.position(),
                velocity: *ball.velocity(),
                grabber: ball.grabber(),
                last_touch: ball.last_touch(),
            },
            players,
            attacks_up: [teams[0].attacks_up(), teams[1].attacks_up()],
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn side(&self, side: TeamSide) -> impl Iterator<Item = &PlayerSnapshot> {
        self.players.iter().filter(move |p| p.id.side == side)
    }

    pub fn attacks_up(&self, side: TeamSide) -> bool {
        self.attacks_up[side.index()]
    }

    pub fn opponent_goal(&self, side: TeamSide) -> AbsVector3 {
        self.pitch.goal_center(self.attacks_up(side))
    }

    pub fn own_goal(&self, side: TeamSide) -> AbsVector3 {
        self.pitch.goal_center(!self.attacks_up(side))
    }

    /// Closest player of `side` to the ball in the pitch plane. Goalkeepers
    /// are skipped unless `include_keeper`. Ties go to the lower roster index.
    pub fn closest_to_ball(&self, side: TeamSide, include_keeper: bool) -> Option<&PlayerSnapshot> {
        let ball = self.ball.position;
        self.side(side)
            .filter(|p| include_keeper || !p.role.is_goalkeeper())
            .min_by(|a, b| {
                a.position
                    .distance_xy(&ball)
                    .total_cmp(&b.position.distance_xy(&ball))
                    .then(a.id.index.cmp(&b.id.index))
            })
    }
}
