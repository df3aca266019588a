//! Match-time player entity
//!
//! A `MatchEntity` body plus skills, tactics, a controller and three gating
//! timers:
//! - ball-kick cooldown: no re-kick until it runs out
//! - tackling: the player's own lunge, decelerating in its final window
//! - tackled: recovery after being brought down
//!
//! `standing()` is false while either tackle timer runs. The two tackle
//! timers are independent; a tackler can be tackled mid-lunge.

use super::actions::PlayerAction;
use super::ai::PlayerAIController;
use super::controller::PlayerController;
use super::coordinates::{AbsVector3, RelVector3};
use super::entity::{Entity, MatchEntity};
use super::match_state::MatchHalf;
use super::physics_constants::{player as pc, GRAVITY};
use super::team::PlayerId;
use super::tick_snapshot::TickSnapshot;
use super::timer::Timer;
use crate::models::{PlayerPosition, PlayerProfile, PlayerSkills, PlayerTactics};
use tracing::trace;

pub struct Player {
    body: MatchEntity,
    id: PlayerId,
    name: String,
    shirt_number: u8,
    skills: PlayerSkills,
    tactics: PlayerTactics,
    home_position: RelVector3,
    ai: PlayerAIController,
    external: Option<Box<dyn PlayerController>>,
    ball_kicked_timer: Timer,
    tackling_timer: Timer,
    tackled_timer: Timer,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("shirt_number", &self.shirt_number)
            .field("body", &self.body)
            .field("home_position", &self.home_position)
            .field("ai_controlled", &self.is_ai_controlled())
            .finish()
    }
}

impl Entity for Player {
    fn body(&self) -> &MatchEntity {
        &self.body
    }
}

impl Player {
    pub fn new(profile: &PlayerProfile, id: PlayerId, start: AbsVector3, seed: u64) -> Self {
        let skills = profile.skills;
        let home_position = id.side.orient(profile.tactics.canonical_home_position());

        Self {
            body: MatchEntity::at(start),
            id,
            name: profile.name.clone(),
            shirt_number: profile.shirt_number,
            skills,
            tactics: profile.tactics,
            home_position,
            ai: PlayerAIController::new(seed),
            external: None,
            ball_kicked_timer: Timer::new(pc::KICK_COOLDOWN_BASE - skills.ball_control),
            tackling_timer: Timer::new(pc::TACKLE_DURATION_BASE - skills.tackling * pc::TACKLE_SKILL_SCALE),
            tackled_timer: Timer::new(pc::TACKLED_RECOVERY),
        }
    }

    pub fn body_mut(&mut self) -> &mut MatchEntity {
        &mut self.body
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shirt_number(&self) -> u8 {
        self.shirt_number
    }

    pub fn skills(&self) -> &PlayerSkills {
        &self.skills
    }

    pub fn tactics(&self) -> &PlayerTactics {
        &self.tactics
    }

    pub fn set_tactics(&mut self, tactics: PlayerTactics) {
        self.tactics = tactics;
    }

    pub fn player_position(&self) -> PlayerPosition {
        self.tactics.position
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.tactics.position.is_goalkeeper()
    }

    // ========== Derived skill values ==========

    /// `8 × (1 + run_speed) / 2`: 4.0 at skill 0, 8.0 at skill 1
    pub fn run_speed(&self) -> f32 {
        pc::BASE_RUN_SPEED * ((1.0 + self.skills.run_speed) * 0.5)
    }

    pub fn max_shot_power(&self) -> f32 {
        pc::BASE_SHOT_POWER + pc::SHOT_POWER_RANGE * self.skills.shot_power
    }

    pub fn max_heading_power(&self) -> f32 {
        pc::BASE_HEADING_POWER + pc::HEADING_POWER_RANGE * self.skills.heading
    }

    // ========== Home position ==========

    /// Relative home position, oriented for the current playing direction
    pub fn home_position(&self) -> &RelVector3 {
        &self.home_position
    }

    pub fn set_home_position(&mut self, pos: RelVector3) {
        self.home_position = pos;
    }

    // ========== Controllers ==========

    pub fn act(&mut self, dt: f32, ctx: &TickSnapshot) -> PlayerAction {
        let id = self.id;
        match self.external.as_mut() {
            Some(controller) => controller.act(dt, id, ctx),
            None => self.ai.act(dt, id, ctx),
        }
    }

    /// Hand control to an external controller; returns the one it replaces.
    pub fn set_controller(&mut self, controller: Box<dyn PlayerController>) -> Option<Box<dyn PlayerController>> {
        self.external.replace(controller)
    }

    /// Return control to the built-in AI; returns the external controller, if any.
    pub fn set_ai_controlled(&mut self) -> Option<Box<dyn PlayerController>> {
        self.external.take()
    }

    pub fn is_ai_controlled(&self) -> bool {
        self.external.is_none()
    }

    pub fn ai_controller(&self) -> &PlayerAIController {
        &self.ai
    }

    /// Mirror the home position on direction changes and notify both the
    /// active controller and, if it is not the active one, the AI.
    pub fn match_half_changed(&mut self, half: MatchHalf) {
        if half.changes_direction() {
            self.home_position = self.home_position.mirrored();
        }

        if let Some(external) = self.external.as_mut() {
            external.match_half_changed(half);
        }
        self.ai.match_half_changed(half);
    }

    // ========== Gating timers ==========

    pub fn ball_kicked(&mut self) {
        self.ball_kicked_timer.rewind();
    }

    pub fn can_kick_ball(&self) -> bool {
        !self.tackled_timer.running() && !self.ball_kicked_timer.running()
    }

    pub fn set_tackling(&mut self) {
        self.tackling_timer.rewind();
    }

    /// Brought down: recovery starts and all motion stops at once.
    pub fn set_tackled(&mut self) {
        self.tackled_timer.rewind();
        self.body.halt();
    }

    pub fn tackling(&self) -> bool {
        self.tackling_timer.running()
    }

    pub fn tackled(&self) -> bool {
        self.tackled_timer.running()
    }

    pub fn standing(&self) -> bool {
        !self.tackling() && !self.tackled()
    }

    pub fn is_airborne(&self) -> bool {
        self.body.position.z() > pc::AIRBORNE_THRESHOLD || self.body.velocity.z() > pc::AIRBORNE_THRESHOLD
    }

    // ========== Physics ==========

    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);

        let plane = self.body.velocity.flattened();
        let run_speed = self.run_speed();
        if !self.is_airborne() && plane.length() > run_speed {
            let capped = plane.normalized() * run_speed;
            self.body.velocity.v.x = capped.x();
            self.body.velocity.v.y = capped.y();
        }

        if !self.is_airborne() {
            self.body.velocity.v.z = self.body.velocity.z().max(0.0);
            self.body.position.v.z = self.body.position.z().max(0.0);
        } else {
            self.body.velocity.v.z -= GRAVITY * dt;
        }

        self.ball_kicked_timer.do_countdown(dt);
        if self.ball_kicked_timer.check() {
            trace!(player = ?self.id, "kick cooldown over");
        }

        self.tackling_timer.do_countdown(dt);
        if self.tackling_timer.running() && self.tackling_timer.time_left() < pc::TACKLE_SLOWDOWN_WINDOW {
            self.body.velocity *= pc::TACKLE_SLOWDOWN_FACTOR;
        }
        if self.tackling_timer.check() {
            trace!(player = ?self.id, "tackle finished");
        }

        self.tackled_timer.do_countdown(dt);
        if self.tackled_timer.check() {
            trace!(player = ?self.id, "recovered from tackle");
        }
    }
}
