//! Player actions and their application
//!
//! Controllers only *describe* what a player wants to do. The match applies
//! every collected action between ticks, so nothing a controller decides can
//! interleave with integration. Application goes through the same calls the
//! physics core exposes: `Ball::kicked`, `Ball::grab`, `Player::ball_kicked`,
//! `Player::set_tackling` and `Player::set_tackled`.

use super::ball::Ball;
use super::coordinates::AbsVector3;
use super::entity::Entity;
use super::physics_constants::{area, goal, reach};
use super::team::{PlayerId, Team};
use super::tick_snapshot::TickSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerAction {
    Idle,
    /// Desired horizontal velocity; capped at run speed by the player update
    Move { velocity: AbsVector3 },
    /// Ball velocity after the kick; capped at shot or heading power
    Kick { velocity: AbsVector3 },
    Jump { vertical_speed: f32 },
    Tackle { target: PlayerId },
    /// Goalkeeper takes hold of the ball
    Grab,
}

/// What applying an action actually did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOutcome {
    /// Not allowed in the current state, or nothing to do
    Ignored,
    Moved,
    Jumped,
    Kicked { shot: bool },
    /// Tackle started; `victim` is set when it connected
    Tackled { victim: Option<PlayerId> },
    Grabbed,
}

fn player_at(teams: &[Team; 2], id: PlayerId) -> Option<&super::player::Player> {
    teams[id.side.index()].player(id.index)
}

fn player_at_mut(teams: &mut [Team; 2], id: PlayerId) -> Option<&mut super::player::Player> {
    teams[id.side.index()].player_mut(id.index)
}

/// Apply `action` for `actor` against the live ball and rosters.
pub fn apply_action(
    actor: PlayerId,
    action: PlayerAction,
    ctx: &TickSnapshot,
    ball: &mut Ball,
    teams: &mut [Team; 2],
) -> ActionOutcome {
    if player_at(teams, actor).is_none() {
        return ActionOutcome::Ignored;
    }

    match action {
        PlayerAction::Idle => ActionOutcome::Ignored,
        PlayerAction::Move { velocity } => apply_move(actor, velocity, teams),
        PlayerAction::Jump { vertical_speed } => apply_jump(actor, vertical_speed, teams),
        PlayerAction::Kick { velocity } => apply_kick(actor, velocity, ctx, ball, teams),
        PlayerAction::Tackle { target } => apply_tackle(actor, target, ctx, teams),
        PlayerAction::Grab => apply_grab(actor, ctx, ball, teams),
    }
}

fn apply_move(actor: PlayerId, velocity: AbsVector3, teams: &mut [Team; 2]) -> ActionOutcome {
    let Some(p) = player_at_mut(teams, actor) else {
        return ActionOutcome::Ignored;
    };
    if !p.standing() {
        return ActionOutcome::Ignored;
    }
    let body = p.body_mut();
    body.velocity.v.x = velocity.x();
    body.velocity.v.y = velocity.y();
    ActionOutcome::Moved
}

fn apply_jump(actor: PlayerId, vertical_speed: f32, teams: &mut [Team; 2]) -> ActionOutcome {
    let Some(p) = player_at_mut(teams, actor) else {
        return ActionOutcome::Ignored;
    };
    if !p.standing() || p.is_airborne() || vertical_speed <= 0.0 {
        return ActionOutcome::Ignored;
    }
    p.body_mut().velocity.v.z = vertical_speed.min(reach::MAX_JUMP_SPEED);
    ActionOutcome::Jumped
}

fn apply_kick(
    actor: PlayerId,
    velocity: AbsVector3,
    ctx: &TickSnapshot,
    ball: &mut Ball,
    teams: &mut [Team; 2],
) -> ActionOutcome {
    if !ctx.half.is_playing() {
        return ActionOutcome::Ignored;
    }
    // a stopped ball belongs to the awarded side
    if ctx.play_state.awarded_side().is_some_and(|side| side != actor.side) {
        return ActionOutcome::Ignored;
    }
    if ball.grabbed() && ball.grabber() != Some(actor) {
        return ActionOutcome::Ignored;
    }

    let Some(p) = player_at_mut(teams, actor) else {
        return ActionOutcome::Ignored;
    };
    if !p.can_kick_ball() || p.position().distance(ball.position()) >= reach::KICK_DISTANCE_M {
        return ActionOutcome::Ignored;
    }

    let cap = if ball.position().z() > reach::HEADER_HEIGHT_M {
        p.max_heading_power()
    } else {
        p.max_shot_power()
    };
    let velocity = velocity.capped(cap);

    if !ball.kicked(actor) {
        return ActionOutcome::Ignored;
    }
    ball.set_velocity(velocity);
    p.ball_kicked();

    let shot = is_on_target(ball.position(), &velocity, ctx, actor);
    ActionOutcome::Kicked { shot }
}

/// Kick heading for the opponent goal mouth from shooting range.
fn is_on_target(from: &AbsVector3, velocity: &AbsVector3, ctx: &TickSnapshot, actor: PlayerId) -> bool {
    const SHOT_RANGE_M: f32 = 35.0;
    const MOUTH_SLACK_M: f32 = 1.0;

    let goal_center = ctx.opponent_goal(actor.side);
    let dy = goal_center.y() - from.y();
    if dy.abs() > SHOT_RANGE_M || velocity.y() == 0.0 || dy.signum() != velocity.y().signum() {
        return false;
    }
    let t = dy / velocity.y();
    let x_at_line = from.x() + velocity.x() * t;
    x_at_line.abs() < goal::HALF_WIDTH_M + MOUTH_SLACK_M
}

fn apply_tackle(actor: PlayerId, target: PlayerId, ctx: &TickSnapshot, teams: &mut [Team; 2]) -> ActionOutcome {
    if !ctx.half.is_playing() || target.side == actor.side {
        return ActionOutcome::Ignored;
    }
    let Some((target_pos, target_standing)) = player_at(teams, target).map(|t| (*t.position(), t.standing())) else {
        return ActionOutcome::Ignored;
    };

    let Some(p) = player_at_mut(teams, actor) else {
        return ActionOutcome::Ignored;
    };
    if !p.standing() {
        return ActionOutcome::Ignored;
    }

    let lunge = (target_pos - *p.position()).flattened().normalized() * p.run_speed();
    let connects = target_standing && p.position().distance_xy(&target_pos) < reach::TACKLE_DISTANCE_M;
    p.set_tackling();
    let body = p.body_mut();
    body.velocity.v.x = lunge.x();
    body.velocity.v.y = lunge.y();

    if !connects {
        return ActionOutcome::Tackled { victim: None };
    }
    if let Some(victim) = player_at_mut(teams, target) {
        victim.set_tackled();
    }
    ActionOutcome::Tackled { victim: Some(target) }
}

fn apply_grab(actor: PlayerId, ctx: &TickSnapshot, ball: &mut Ball, teams: &mut [Team; 2]) -> ActionOutcome {
    if !ctx.half.is_playing() || !ctx.play_state.is_in_play() || ball.grabbed() {
        return ActionOutcome::Ignored;
    }
    let own_goal = ctx.own_goal(actor.side);
    let Some(p) = player_at(teams, actor) else {
        return ActionOutcome::Ignored;
    };
    if !p.is_goalkeeper() || !p.standing() || p.position().distance(ball.position()) >= reach::GRAB_DISTANCE_M {
        return ActionOutcome::Ignored;
    }
    if !in_penalty_area(ball.position(), &own_goal) {
        return ActionOutcome::Ignored;
    }
    // own release stays loose until the kick cooldown is over
    if released_by(ball, p) {
        return ActionOutcome::Ignored;
    }
    ball.grab(p);
    ActionOutcome::Grabbed
}

/// `p` kicked the ball last and is still in its kick cooldown.
fn released_by(ball: &Ball, p: &super::player::Player) -> bool {
    ball.last_touch() == Some(p.id()) && !p.can_kick_ball()
}

/// Inside the penalty area in front of `goal_center` (goal line included).
pub fn in_penalty_area(pos: &AbsVector3, goal_center: &AbsVector3) -> bool {
    pos.x().abs() <= area::PENALTY_HALF_WIDTH_M
        && (pos.y() - goal_center.y()).abs() <= area::PENALTY_DEPTH_M
        && pos.y().abs() <= goal_center.y().abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::coordinates::Pitch;
    use crate::engine::match_state::{MatchHalf, PlayState};
    use crate::engine::team::TeamSide;
    use crate::models::TeamSetup;

    fn teams() -> [Team; 2] {
        let pitch = Pitch::default();
        let setup = TeamSetup::standard("T", 0.5);
        [
            Team::new(&setup, TeamSide::First, &pitch, 1),
            Team::new(&setup, TeamSide::Second, &pitch, 1),
        ]
    }

    fn snap(ball: &Ball, teams: &[Team; 2], play_state: PlayState) -> TickSnapshot {
        TickSnapshot::capture(0.0, MatchHalf::FirstHalf, play_state, Pitch::default(), ball, teams)
    }

    fn place(teams: &mut [Team; 2], id: PlayerId, pos: AbsVector3) {
        teams[id.side.index()].player_mut(id.index).unwrap().body_mut().position = pos;
    }

    #[test]
    fn test_move_replaces_horizontal_velocity() {
        let mut t = teams();
        let mut ball = Ball::new();
        let id = PlayerId::new(TeamSide::First, 5);
        let ctx = snap(&ball, &t, PlayState::InPlay);
        let out = apply_action(
            id,
            PlayerAction::Move { velocity: AbsVector3::new(1.0, 2.0, 9.0) },
            &ctx,
            &mut ball,
            &mut t,
        );
        assert_eq!(out, ActionOutcome::Moved);
        assert_eq!(*t[0].player(5).unwrap().velocity(), AbsVector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_kick_caps_power_and_starts_cooldown() {
        let mut t = teams();
        let mut ball = Ball::new();
        let id = PlayerId::new(TeamSide::First, 9);
        place(&mut t, id, AbsVector3::new(0.0, -0.5, 0.0));
        let ctx = snap(&ball, &t, PlayState::InPlay);
        let out = apply_action(
            id,
            PlayerAction::Kick { velocity: AbsVector3::new(0.0, 500.0, 0.0) },
            &ctx,
            &mut ball,
            &mut t,
        );
        assert!(matches!(out, ActionOutcome::Kicked { .. }));
        let p = t[0].player(9).unwrap();
        assert!((ball.velocity().length() - p.max_shot_power()).abs() < 1e-3);
        assert!(!p.can_kick_ball());
        assert_eq!(ball.last_touch(), Some(id));
    }

    #[test]
    fn test_kick_out_of_reach_ignored() {
        let mut t = teams();
        let mut ball = Ball::new();
        let id = PlayerId::new(TeamSide::First, 9);
        place(&mut t, id, AbsVector3::new(0.0, -5.0, 0.0));
        let ctx = snap(&ball, &t, PlayState::InPlay);
        let out = apply_action(
            id,
            PlayerAction::Kick { velocity: AbsVector3::new(0.0, 10.0, 0.0) },
            &ctx,
            &mut ball,
            &mut t,
        );
        assert_eq!(out, ActionOutcome::Ignored);
        assert!(ball.velocity().is_zero());
    }

    #[test]
    fn test_kickoff_reserved_for_awarded_side() {
        let mut t = teams();
        let mut ball = Ball::new();
        let id = PlayerId::new(TeamSide::Second, 9);
        place(&mut t, id, AbsVector3::new(0.0, 0.5, 0.0));
        let ctx = snap(&ball, &t, PlayState::Kickoff(TeamSide::First));
        let out = apply_action(
            id,
            PlayerAction::Kick { velocity: AbsVector3::new(0.0, -10.0, 0.0) },
            &ctx,
            &mut ball,
            &mut t,
        );
        assert_eq!(out, ActionOutcome::Ignored);
    }

    #[test]
    fn test_tackle_in_reach_downs_target() {
        let mut t = teams();
        let mut ball = Ball::new();
        let tackler = PlayerId::new(TeamSide::First, 2);
        let victim = PlayerId::new(TeamSide::Second, 9);
        place(&mut t, tackler, AbsVector3::new(0.0, 0.0, 0.0));
        place(&mut t, victim, AbsVector3::new(1.0, 0.0, 0.0));
        let ctx = snap(&ball, &t, PlayState::InPlay);
        let out = apply_action(tackler, PlayerAction::Tackle { target: victim }, &ctx, &mut ball, &mut t);
        assert_eq!(out, ActionOutcome::Tackled { victim: Some(victim) });
        assert!(t[0].player(2).unwrap().tackling());
        assert!(t[1].player(9).unwrap().tackled());
    }

    #[test]
    fn test_tackle_out_of_reach_only_lunges() {
        let mut t = teams();
        let mut ball = Ball::new();
        let tackler = PlayerId::new(TeamSide::First, 2);
        let victim = PlayerId::new(TeamSide::Second, 9);
        place(&mut t, tackler, AbsVector3::new(0.0, 0.0, 0.0));
        place(&mut t, victim, AbsVector3::new(0.0, 4.0, 0.0));
        let ctx = snap(&ball, &t, PlayState::InPlay);
        let out = apply_action(tackler, PlayerAction::Tackle { target: victim }, &ctx, &mut ball, &mut t);
        assert_eq!(out, ActionOutcome::Tackled { victim: None });
        assert!(t[1].player(9).unwrap().standing());
        assert!(t[0].player(2).unwrap().velocity().y() > 0.0);
    }

    #[test]
    fn test_teammate_tackle_ignored() {
        let mut t = teams();
        let mut ball = Ball::new();
        let ctx = snap(&ball, &t, PlayState::InPlay);
        let out = apply_action(
            PlayerId::new(TeamSide::First, 2),
            PlayerAction::Tackle { target: PlayerId::new(TeamSide::First, 3) },
            &ctx,
            &mut ball,
            &mut t,
        );
        assert_eq!(out, ActionOutcome::Ignored);
    }

    #[test]
    fn test_keeper_grabs_only_in_own_area() {
        let mut t = teams();
        let keeper = PlayerId::new(TeamSide::First, 0);
        let mut ball = Ball::new();

        ball.place(AbsVector3::new(2.0, -45.0, 0.1));
        place(&mut t, keeper, AbsVector3::new(2.0, -45.5, 0.0));
        let ctx = snap(&ball, &t, PlayState::InPlay);
        assert_eq!(apply_action(keeper, PlayerAction::Grab, &ctx, &mut ball, &mut t), ActionOutcome::Grabbed);
        assert!(ball.grabbed());
        assert_eq!(ball.grabber(), Some(keeper));

        let mut t = teams();
        let mut ball = Ball::new();
        ball.place(AbsVector3::new(2.0, -20.0, 0.1));
        place(&mut t, keeper, AbsVector3::new(2.0, -20.5, 0.0));
        let ctx = snap(&ball, &t, PlayState::InPlay);
        assert_eq!(apply_action(keeper, PlayerAction::Grab, &ctx, &mut ball, &mut t), ActionOutcome::Ignored);
    }

    #[test]
    fn test_keeper_cannot_regrab_own_release() {
        let mut t = teams();
        let keeper = PlayerId::new(TeamSide::First, 0);
        let mut ball = Ball::new();
        ball.place(AbsVector3::new(0.0, -48.0, 0.1));
        place(&mut t, keeper, AbsVector3::new(0.0, -48.0, 0.0));
        let ctx = snap(&ball, &t, PlayState::InPlay);
        assert_eq!(apply_action(keeper, PlayerAction::Grab, &ctx, &mut ball, &mut t), ActionOutcome::Grabbed);

        // short distribution that stays inside the area
        let ctx = snap(&ball, &t, PlayState::InPlay);
        let out = apply_action(
            keeper,
            PlayerAction::Kick { velocity: AbsVector3::new(4.0, 0.0, 0.0) },
            &ctx,
            &mut ball,
            &mut t,
        );
        assert!(matches!(out, ActionOutcome::Kicked { .. }));

        let pitch = Pitch::default();
        let cfg = crate::engine::config::BallConfig::default();
        let cooldown = crate::engine::physics_constants::player::KICK_COOLDOWN_BASE
            - t[0].player(0).unwrap().skills().ball_control;
        let ticks = (cooldown / 0.02) as usize - 1;
        for _ in 0..ticks {
            let ctx = snap(&ball, &t, PlayState::InPlay);
            let out = apply_action(keeper, PlayerAction::Grab, &ctx, &mut ball, &mut t);
            assert_eq!(out, ActionOutcome::Ignored);
            for team in t.iter_mut() {
                for p in team.players_mut() {
                    p.update(0.02);
                }
            }
            ball.update(0.02, &pitch, &cfg, &t);
        }
        assert!(!ball.grabbed());
    }

    #[test]
    fn test_keeper_can_grab_own_parry() {
        let mut t = teams();
        let keeper = PlayerId::new(TeamSide::First, 0);
        let mut ball = Ball::new();
        ball.place(AbsVector3::new(0.0, -48.0, 0.1));
        place(&mut t, keeper, AbsVector3::new(0.0, -48.5, 0.0));
        // a deflection marks the touch but starts no kick cooldown
        assert!(ball.check_collision(t[0].player(0).unwrap()));
        assert_eq!(ball.last_touch(), Some(keeper));
        let ctx = snap(&ball, &t, PlayState::InPlay);
        assert_eq!(apply_action(keeper, PlayerAction::Grab, &ctx, &mut ball, &mut t), ActionOutcome::Grabbed);
    }

    #[test]
    fn test_outfield_player_cannot_grab() {
        let mut t = teams();
        let id = PlayerId::new(TeamSide::First, 3);
        let mut ball = Ball::new();
        ball.place(AbsVector3::new(0.0, -45.0, 0.1));
        place(&mut t, id, AbsVector3::new(0.0, -45.2, 0.0));
        let ctx = snap(&ball, &t, PlayState::InPlay);
        assert_eq!(apply_action(id, PlayerAction::Grab, &ctx, &mut ball, &mut t), ActionOutcome::Ignored);
    }

    #[test]
    fn test_jump_capped() {
        let mut t = teams();
        let mut ball = Ball::new();
        let id = PlayerId::new(TeamSide::Second, 4);
        let ctx = snap(&ball, &t, PlayState::InPlay);
        let out = apply_action(id, PlayerAction::Jump { vertical_speed: 10.0 }, &ctx, &mut ball, &mut t);
        assert_eq!(out, ActionOutcome::Jumped);
        assert_eq!(t[1].player(4).unwrap().velocity().z(), reach::MAX_JUMP_SPEED);
    }

    #[test]
    fn test_penalty_area_bounds() {
        let down = AbsVector3::new(0.0, -52.5, 0.0);
        assert!(in_penalty_area(&AbsVector3::new(20.0, -36.5, 0.0), &down));
        assert!(!in_penalty_area(&AbsVector3::new(20.5, -40.0, 0.0), &down));
        assert!(!in_penalty_area(&AbsVector3::new(0.0, -35.0, 0.0), &down));
        assert!(!in_penalty_area(&AbsVector3::new(0.0, -53.0, 0.0), &down));
    }
}
