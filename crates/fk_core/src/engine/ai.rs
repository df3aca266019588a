//! Built-in player AI
//!
//! Deliberately plain: one chaser per side plays the ball, the goalkeeper
//! guards its line and distributes after a catch, everyone else holds a
//! home position pulled toward the ball. All randomness (pass choice, aim
//! jitter) comes from a per-player `ChaCha8Rng`, so a match replays exactly
//! for a given seed.

use super::actions::{in_penalty_area, PlayerAction};
use super::controller::PlayerController;
use super::coordinates::AbsVector3;
use super::match_state::{MatchHalf, PlayState, RestartKind};
use super::physics_constants::{goal, reach};
use super::team::{PlayerId, Team};
use super::tick_snapshot::{PlayerSnapshot, TickSnapshot};
use super::timer::{Timer, TimerState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seconds a goalkeeper holds a caught ball before distributing it
const KEEPER_HOLD_SECS: f32 = 1.5;
/// Shoot from inside this distance to the opponent goal
const SHOOTING_RANGE_M: f32 = 25.0;
/// Longest ground pass considered
const PASS_RANGE_M: f32 = 30.0;
/// How far the ball drags the outfield block from its home positions
const BALL_PULL_X: f32 = 0.2;
const BALL_PULL_Y: f32 = 0.3;
/// Within this distance of a target a player slows to a stop
const ARRIVE_RADIUS_M: f32 = 3.0;
/// Goalkeeper line depth in front of the goal
const KEEPER_LINE_M: f32 = 1.5;
/// Per-tick chance of going in for a tackle on a nearby ball carrier
const TACKLE_CHANCE: f32 = 0.08;

pub struct PlayerAIController {
    rng: ChaCha8Rng,
    hold: Timer,
    last_half: Option<MatchHalf>,
}

impl PlayerAIController {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), hold: Timer::new(KEEPER_HOLD_SECS), last_half: None }
    }

    pub fn last_half(&self) -> Option<MatchHalf> {
        self.last_half
    }

    fn jitter(&mut self, spread: f32) -> f32 {
        if spread <= 0.0 {
            0.0
        } else {
            self.rng.gen_range(-spread..spread)
        }
    }

    fn off_pitch(&self, me: &PlayerSnapshot, ctx: &TickSnapshot) -> PlayerAction {
        let target = match ctx.half {
            MatchHalf::NotStarted | MatchHalf::HalfTimePauseEnd | MatchHalf::FullTimePauseEnd => me.home,
            _ => ctx.pitch.relative_to_absolute(&Team::pause_position_for(me.id.side)),
        };
        move_to(me, &target)
    }

    fn restart(&mut self, me: &PlayerSnapshot, ctx: &TickSnapshot, kind: Option<RestartKind>, side_to_play: bool) -> PlayerAction {
        if !side_to_play {
            return move_to(me, &self.shifted_home(me, ctx));
        }
        let include_keeper = kind == Some(RestartKind::GoalKick);
        let taker = ctx.closest_to_ball(me.id.side, include_keeper).map(|p| p.id);
        if taker != Some(me.id) {
            return move_to(me, &self.shifted_home(me, ctx));
        }
        if in_kick_reach(me, ctx) && me.can_kick {
            return self.pass_or_clear(me, ctx);
        }
        move_to(me, &ctx.ball.position)
    }

    fn shifted_home(&self, me: &PlayerSnapshot, ctx: &TickSnapshot) -> AbsVector3 {
        let ball = ctx.ball.position;
        let pulled = AbsVector3::new(
            me.home.x() + (ball.x() - me.home.x()) * BALL_PULL_X,
            me.home.y() + (ball.y() - me.home.y()) * BALL_PULL_Y,
            0.0,
        );
        ctx.pitch.clamp_to_pitch(&pulled)
    }

    fn goalkeeper(&mut self, dt: f32, me: &PlayerSnapshot, ctx: &TickSnapshot) -> PlayerAction {
        let own_goal = ctx.own_goal(me.id.side);

        if ctx.ball.grabber == Some(me.id) {
            if self.hold.state() == TimerState::Idle {
                self.hold.rewind();
            }
            self.hold.do_countdown(dt);
            if self.hold.check() {
                return self.pass_or_clear(me, ctx);
            }
            return PlayerAction::Move { velocity: AbsVector3::zero() };
        }
        self.hold.clear();

        let ball = ctx.ball.position;
        let loose = ctx.ball.grabber.is_none();
        // our own distribution: let it go
        let released = ctx.ball.last_touch == Some(me.id) && !me.can_kick;
        if loose && !released && ctx.play_state.is_in_play() && in_penalty_area(&ball, &own_goal) {
            let dist = me.position.distance(&ball);
            if dist < reach::GRAB_DISTANCE_M {
                return PlayerAction::Grab;
            }
            let nearest = ctx.closest_to_ball(me.id.side, true).map(|p| p.id);
            if nearest == Some(me.id) {
                return move_to(me, &ball);
            }
        }
        if loose && in_kick_reach(me, ctx) && me.can_kick {
            return self.pass_or_clear(me, ctx);
        }

        let toward_field = -own_goal.y().signum();
        let guard = AbsVector3::new(
            (ball.x() * 0.15).clamp(-goal::HALF_WIDTH_M, goal::HALF_WIDTH_M),
            own_goal.y() + toward_field * KEEPER_LINE_M,
            0.0,
        );
        move_to(me, &guard)
    }

    fn chaser(&mut self, me: &PlayerSnapshot, ctx: &TickSnapshot) -> PlayerAction {
        let ball = ctx.ball.position;

        if ball.z() > reach::HEADER_HEIGHT_M + 0.2
            && ball.z() < 3.0
            && me.position.distance_xy(&ball) < 2.0
            && !me.airborne
        {
            return PlayerAction::Jump { vertical_speed: reach::MAX_JUMP_SPEED };
        }

        if in_kick_reach(me, ctx) && me.can_kick {
            let goal_center = ctx.opponent_goal(me.id.side);
            if me.position.distance_xy(&goal_center) < SHOOTING_RANGE_M {
                return self.shoot(me, ctx);
            }
            return self.pass_or_dribble(me, ctx);
        }

        // an opponent on the ball next to us
        let carrier = ctx
            .side(me.id.side.opponent())
            .filter(|o| o.standing && o.position.distance_xy(&ball) < reach::KICK_DISTANCE_M)
            .find(|o| o.position.distance_xy(&me.position) < reach::TACKLE_DISTANCE_M);
        if let Some(carrier) = carrier {
            if self.rng.gen::<f32>() < TACKLE_CHANCE {
                return PlayerAction::Tackle { target: carrier.id };
            }
        }

        // aim slightly ahead of a moving ball
        let lead = ctx.pitch.clamp_to_pitch(&(ball + ctx.ball.velocity * 0.3));
        run_to(me, &lead)
    }

    fn shoot(&mut self, me: &PlayerSnapshot, ctx: &TickSnapshot) -> PlayerAction {
        let goal_center = ctx.opponent_goal(me.id.side);
        let aim = AbsVector3::new(self.jitter(goal::HALF_WIDTH_M * 0.8), goal_center.y(), 0.0);
        let dir = (aim - ctx.ball.position).flattened().normalized();
        let lift = self.rng.gen_range(0.0..0.08);
        let velocity = (dir + AbsVector3::new(0.0, 0.0, lift)) * me.max_shot_power;
        PlayerAction::Kick { velocity }
    }

    /// Ground pass to a teammate further up the pitch, else carry the ball on.
    fn pass_or_dribble(&mut self, me: &PlayerSnapshot, ctx: &TickSnapshot) -> PlayerAction {
        if let Some(kick) = self.pass(me, ctx, true) {
            return kick;
        }
        let goal_center = ctx.opponent_goal(me.id.side);
        let dir = (goal_center - me.position).flattened().normalized();
        let side_step = AbsVector3::new(self.jitter(0.3), 0.0, 0.0);
        let velocity = (dir + side_step).normalized() * (me.run_speed * 1.3);
        PlayerAction::Kick { velocity }
    }

    /// Pass if anybody is available, else a lofted clearance upfield.
    fn pass_or_clear(&mut self, me: &PlayerSnapshot, ctx: &TickSnapshot) -> PlayerAction {
        if let Some(kick) = self.pass(me, ctx, false) {
            return kick;
        }
        let up = if ctx.attacks_up(me.id.side) { 1.0 } else { -1.0 };
        let dir = AbsVector3::new(self.jitter(0.4), up, 0.0).normalized();
        let velocity = (dir + AbsVector3::new(0.0, 0.0, 0.5)) * (me.max_shot_power * 0.7);
        PlayerAction::Kick { velocity }
    }

    fn pass(&mut self, me: &PlayerSnapshot, ctx: &TickSnapshot, forward_only: bool) -> Option<PlayerAction> {
        let up = ctx.attacks_up(me.id.side);
        let from = ctx.ball.position;
        let candidates: Vec<&PlayerSnapshot> = ctx
            .side(me.id.side)
            .filter(|p| p.id != me.id && p.standing && !p.role.is_goalkeeper())
            .filter(|p| {
                let d = p.position.distance_xy(&from);
                d > 5.0 && d < PASS_RANGE_M
            })
            .filter(|p| !forward_only || (p.position.y() > me.position.y()) == up)
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let target = candidates[self.rng.gen_range(0..candidates.len())];
        let aim = target.position + target.velocity * 0.5;
        let offset = (aim - from).flattened();
        let dist = offset.length();
        let speed = (dist * 0.8 + 4.0).min(me.max_shot_power);
        let dir = (offset.normalized() + AbsVector3::new(self.jitter(0.05), self.jitter(0.05), 0.0)).normalized();
        Some(PlayerAction::Kick { velocity: dir * speed })
    }
}

fn in_kick_reach(me: &PlayerSnapshot, ctx: &TickSnapshot) -> bool {
    me.position.distance(&ctx.ball.position) < reach::KICK_DISTANCE_M
}

/// Walk to `target`, slowing down on arrival.
fn move_to(me: &PlayerSnapshot, target: &AbsVector3) -> PlayerAction {
    let offset = (*target - me.position).flattened();
    let dist = offset.length();
    let speed = me.run_speed * (dist / ARRIVE_RADIUS_M).min(1.0);
    PlayerAction::Move { velocity: offset.normalized() * speed }
}

/// Sprint to `target`.
fn run_to(me: &PlayerSnapshot, target: &AbsVector3) -> PlayerAction {
    let offset = (*target - me.position).flattened();
    PlayerAction::Move { velocity: offset.normalized() * me.run_speed }
}

impl PlayerController for PlayerAIController {
    fn act(&mut self, dt: f32, me: PlayerId, ctx: &TickSnapshot) -> PlayerAction {
        let Some(snap) = ctx.player(me).cloned() else {
            return PlayerAction::Idle;
        };
        if !ctx.half.is_playing() {
            return self.off_pitch(&snap, ctx);
        }
        if !snap.standing {
            return PlayerAction::Idle;
        }

        match ctx.play_state {
            PlayState::Kickoff(side) => return self.restart(&snap, ctx, None, side == me.side),
            PlayState::Restart { kind, side, .. } => return self.restart(&snap, ctx, Some(kind), side == me.side),
            PlayState::InPlay => {}
        }

        if snap.role.is_goalkeeper() {
            return self.goalkeeper(dt, &snap, ctx);
        }

        // opponents' keeper has it: drop back
        if ctx.ball.grabber.is_some_and(|g| g.side != me.side) {
            return move_to(&snap, &snap.home);
        }

        let chaser = ctx.closest_to_ball(me.side, false).map(|p| p.id);
        if chaser == Some(me) && ctx.ball.grabber.is_none() {
            return self.chaser(&snap, ctx);
        }
        move_to(&snap, &self.shifted_home(&snap, ctx))
    }

    fn match_half_changed(&mut self, half: MatchHalf) {
        self.last_half = Some(half);
        self.hold.clear();
    }
}
