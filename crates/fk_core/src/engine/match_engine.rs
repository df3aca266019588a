//! Match orchestration
//!
//! `Match` owns both teams and the ball and runs the tick loop. Each
//! `advance(dt)` goes through fixed phases:
//!
//! 1. snapshot the world
//! 2. collect one action per player (First side then Second, roster order)
//! 3. apply the actions, same order
//! 4. integrate every player
//! 5. integrate the ball, including its collision pass against the
//!    already-moved players
//! 6. referee: goals, balls out of play, clock and phase changes
//!
//! A cup tie (extra time enabled) still level after extra time is settled
//! by a penalty shoot-out on entering `MatchHalf::PenaltyShootout`.
//!
//! Nothing mutates shared state outside its phase, so a tick is fully
//! determined by the state before it and the seed.

use super::actions::{apply_action, ActionOutcome, PlayerAction};
use super::ball::Ball;
use super::config::EngineConfig;
use super::controller::PlayerController;
use super::coordinates::{AbsVector3, RelVector3};
use super::entity::Entity;
use super::match_state::{MatchHalf, PlayState, RestartKind};
use super::penalties::run_shootout;
use super::physics_constants::{area, goal};
use super::team::{PlayerId, Team, TeamSide};
use super::tick_snapshot::TickSnapshot;
use super::timer::Timer;
use super::timestep::seconds_to_minute;
use crate::error::Result;
use crate::models::{EventKind, MatchEvent, MatchResult, ShootoutResult, TeamSetup, TeamStats};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// A dead ball nobody takes is put back into play after this long.
const RESTART_STALL_SECS: f32 = 15.0;
/// Keeps the shoot-out draws independent of the players' AI streams.
const SHOOTOUT_SEED_SALT: u64 = 0x5EED_0F_9E_4A17;

pub struct Match {
    config: EngineConfig,
    teams: [Team; 2],
    ball: Ball,
    half: MatchHalf,
    play_state: PlayState,
    /// Seconds spent in the current phase
    phase_secs: f32,
    /// Playing seconds since the first kick-off
    clock_secs: f32,
    ticks: u64,
    score: [u8; 2],
    stats: [TeamStats; 2],
    events: Vec<MatchEvent>,
    extra_time_allowed: bool,
    extra_time_played: bool,
    restart_timer: Timer,
    seed: u64,
    shootout: Option<ShootoutResult>,
}

impl Match {
    /// Validate both line-ups and the config, then seat everybody at the
    /// touchline ready for the pre-match walk-on.
    pub fn new(home: &TeamSetup, away: &TeamSetup, config: EngineConfig, seed: u64, extra_time: bool) -> Result<Self> {
        config.validate()?;
        home.validate()?;
        away.validate()?;

        let teams = [
            Team::new(home, TeamSide::First, &config.pitch, seed),
            Team::new(away, TeamSide::Second, &config.pitch, seed),
        ];
        debug!(home = %home.name, away = %away.name, seed, "match created");

        Ok(Self {
            config,
            teams,
            ball: Ball::new(),
            half: MatchHalf::NotStarted,
            play_state: PlayState::Kickoff(TeamSide::First),
            phase_secs: 0.0,
            clock_secs: 0.0,
            ticks: 0,
            score: [0, 0],
            stats: [TeamStats::default(); 2],
            events: Vec::new(),
            extra_time_allowed: extra_time,
            extra_time_played: false,
            restart_timer: Timer::new(RESTART_STALL_SECS),
            seed,
            shootout: None,
        })
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn half(&self) -> MatchHalf {
        self.half
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        &self.teams[side.index()]
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        &mut self.teams[side.index()]
    }

    /// `[home, away]`
    pub fn score(&self) -> [u8; 2] {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Playing seconds since the first kick-off
    pub fn time_secs(&self) -> f32 {
        self.clock_secs
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn is_finished(&self) -> bool {
        self.half == MatchHalf::Finished
    }

    pub fn convert_relative_to_absolute(&self, rel: &RelVector3) -> AbsVector3 {
        self.config.pitch.relative_to_absolute(rel)
    }

    /// Put `id` under external control. `false` if no such player.
    pub fn set_controller(&mut self, id: PlayerId, controller: Box<dyn PlayerController>) -> bool {
        match self.teams[id.side.index()].player_mut(id.index) {
            Some(p) => {
                p.set_controller(controller);
                true
            }
            None => false,
        }
    }

    /// Hand `id` back to its built-in AI.
    pub fn set_ai_controlled(&mut self, id: PlayerId) {
        if let Some(p) = self.teams[id.side.index()].player_mut(id.index) {
            p.set_ai_controlled();
        }
    }

    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot::capture(self.clock_secs, self.half, self.play_state, self.config.pitch, &self.ball, &self.teams)
    }

    // ========== Tick loop ==========

    /// One tick of the configured length.
    pub fn step(&mut self) {
        self.advance(self.config.timing.tick_dt);
    }

    /// Advance the whole match by `dt` seconds. No-op once finished.
    pub fn advance(&mut self, dt: f32) {
        if self.is_finished() {
            return;
        }

        let ctx = self.snapshot();

        let mut actions: Vec<(PlayerId, PlayerAction)> = Vec::with_capacity(ctx.players.len());
        for team in self.teams.iter_mut() {
            for p in team.players_mut() {
                actions.push((p.id(), p.act(dt, &ctx)));
            }
        }

        for (id, action) in actions {
            let outcome = apply_action(id, action, &ctx, &mut self.ball, &mut self.teams);
            self.record_outcome(id, outcome);
        }

        for team in self.teams.iter_mut() {
            for p in team.players_mut() {
                p.update(dt);
            }
        }

        let ball_update = self.ball.update(dt, &self.config.pitch, &self.config.ball, &self.teams);
        if ball_update.frame_hit {
            if let Some(last) = self.ball.last_touch() {
                self.stats[last.side.index()].frame_hits += 1;
            }
            self.push_event(EventKind::FrameHit { last_touch: self.ball.last_touch() });
        }

        self.referee(dt);
        self.ticks += 1;
    }

    /// Run to the final whistle.
    pub fn play(&mut self) -> MatchResult {
        while !self.is_finished() {
            self.step();
        }
        self.result()
    }

    /// Result as of now; final once `is_finished()`.
    pub fn result(&self) -> MatchResult {
        MatchResult {
            home_team: self.teams[0].name().to_string(),
            away_team: self.teams[1].name().to_string(),
            score_home: self.score[0],
            score_away: self.score[1],
            extra_time: self.extra_time_played,
            ticks: self.ticks,
            duration_secs: self.clock_secs,
            home_stats: self.stats[0],
            away_stats: self.stats[1],
            events: self.events.clone(),
            penalty_shootout: self.shootout.clone(),
        }
    }

    fn record_outcome(&mut self, id: PlayerId, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::Kicked { shot } => {
                let stats = &mut self.stats[id.side.index()];
                stats.kicks += 1;
                if shot {
                    stats.shots += 1;
                    self.push_event(EventKind::Shot { side: id.side, shooter: id });
                }
                if !self.play_state.is_in_play() {
                    self.play_state = PlayState::InPlay;
                    self.restart_timer.clear();
                }
            }
            ActionOutcome::Tackled { victim: Some(victim) } => {
                self.stats[id.side.index()].tackles += 1;
                self.push_event(EventKind::Tackle { tackler: id, victim });
            }
            ActionOutcome::Grabbed => {
                debug!(keeper = ?id, "ball grabbed");
                self.push_event(EventKind::Grab { keeper: id });
            }
            _ => {}
        }
    }

    // ========== Referee ==========

    fn referee(&mut self, dt: f32) {
        self.phase_secs += dt;

        if self.half.is_playing() {
            self.clock_secs += dt;
            if self.play_state.is_in_play() {
                self.check_ball_out();
            } else {
                self.restart_timer.do_countdown(dt);
                if self.restart_timer.check() && !self.play_state.is_in_play() {
                    debug!(state = ?self.play_state, "restart not taken, ball back in play");
                    self.play_state = PlayState::InPlay;
                }
            }
        }

        if self.phase_secs >= self.phase_duration() {
            let level = self.score[0] == self.score[1];
            let next = self.half.next(self.extra_time_allowed && level);
            self.enter_half(next);
        }
    }

    fn phase_duration(&self) -> f32 {
        let t = &self.config.timing;
        match self.half {
            MatchHalf::NotStarted => t.pre_match_secs,
            MatchHalf::FirstHalf | MatchHalf::SecondHalf => t.half_duration_secs,
            MatchHalf::ExtraTimeFirstHalf | MatchHalf::ExtraTimeSecondHalf => t.extra_time_half_secs,
            MatchHalf::HalfTimePauseBegin
            | MatchHalf::HalfTimePauseEnd
            | MatchHalf::FullTimePauseBegin
            | MatchHalf::FullTimePauseEnd => t.pause_secs,
            MatchHalf::PenaltyShootout => 0.0,
            MatchHalf::Finished => f32::INFINITY,
        }
    }

    fn enter_half(&mut self, next: MatchHalf) {
        self.half = next;
        self.phase_secs = 0.0;
        for team in self.teams.iter_mut() {
            team.match_half_changed(next);
        }
        info!(half = ?next, home = self.score[0], away = self.score[1], "match phase changed");
        self.push_event(EventKind::HalfChanged { half: next });

        if next.is_extra_time() {
            self.extra_time_played = true;
        }
        if next.is_playing() {
            self.kick_off(next.kickoff_side());
        }
        if next == MatchHalf::PenaltyShootout {
            self.penalty_shootout();
        }
        if next == MatchHalf::Finished {
            info!(
                home = %self.teams[0].name(),
                away = %self.teams[1].name(),
                score_home = self.score[0],
                score_away = self.score[1],
                "final whistle"
            );
        }
    }

    fn penalty_shootout(&mut self) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ SHOOTOUT_SEED_SALT);
        let shootout = run_shootout(&self.teams, &mut rng);
        for kick in &shootout.kicks {
            self.push_event(EventKind::PenaltyKick { side: kick.side, taker: kick.taker, scored: kick.scored });
        }
        info!(
            home = shootout.goals_home,
            away = shootout.goals_away,
            winner = ?shootout.winner,
            "penalty shoot-out decided"
        );
        self.shootout = Some(shootout);
    }

    /// Ball to the centre spot, everybody to their home positions.
    fn kick_off(&mut self, side: TeamSide) {
        self.ball.place(AbsVector3::zero());
        self.ball.clear_last_touch();
        let pitch = self.config.pitch;
        for team in self.teams.iter_mut() {
            for p in team.players_mut() {
                let home = pitch.relative_to_absolute(p.home_position());
                let body = p.body_mut();
                body.position = home;
                body.halt();
            }
        }
        self.play_state = PlayState::Kickoff(side);
        self.restart_timer.rewind();
        debug!(side = ?side, "kick-off");
        self.push_event(EventKind::KickOff { side });
    }

    /// Side attacking the goal at the `up` end this phase
    fn side_attacking(&self, up: bool) -> TeamSide {
        if self.teams[0].attacks_up() == up {
            TeamSide::First
        } else {
            TeamSide::Second
        }
    }

    fn check_ball_out(&mut self) {
        let pitch = self.config.pitch;
        let pos = *self.ball.position();
        let last = self.ball.last_touch();
        let sign_x = if pos.x() < 0.0 { -1.0 } else { 1.0 };

        if pos.y().abs() > pitch.half_height() {
            let up = pos.y() > 0.0;
            let sign_y = if up { 1.0 } else { -1.0 };
            let attackers = self.side_attacking(up);
            let defenders = attackers.opponent();

            if pos.x().abs() < goal::HALF_WIDTH_M && pos.z() < goal::HEIGHT_M {
                self.goal_scored(attackers, last);
                return;
            }

            if last.map(|p| p.side) == Some(defenders) {
                let spot = AbsVector3::new(sign_x * pitch.half_width(), sign_y * pitch.half_height(), 0.0);
                self.award_restart(RestartKind::Corner, attackers, spot);
            } else {
                let spot = AbsVector3::new(
                    sign_x * area::GOAL_KICK_OFFSET_M,
                    sign_y * (pitch.half_height() - area::GOAL_KICK_DEPTH_M),
                    0.0,
                );
                self.award_restart(RestartKind::GoalKick, defenders, spot);
            }
        } else if pos.x().abs() > pitch.half_width() {
            let side = match last {
                Some(p) => p.side.opponent(),
                // untouched since the restart: give it to the side defending this half
                None => self.side_attacking(pos.y() < 0.0),
            };
            let spot = AbsVector3::new(sign_x * pitch.half_width(), pos.y(), 0.0);
            self.award_restart(RestartKind::ThrowIn, side, spot);
        }
    }

    fn goal_scored(&mut self, side: TeamSide, last_touch: Option<PlayerId>) {
        self.score[side.index()] = self.score[side.index()].saturating_add(1);
        self.stats[side.index()].goals = self.stats[side.index()].goals.saturating_add(1);
        let own_goal = last_touch.is_some_and(|p| p.side != side);
        info!(
            side = ?side,
            scorer = ?last_touch,
            own_goal,
            home = self.score[0],
            away = self.score[1],
            "goal"
        );
        self.push_event(EventKind::Goal { side, scorer: last_touch, own_goal });
        self.kick_off(side.opponent());
    }

    fn award_restart(&mut self, kind: RestartKind, side: TeamSide, spot: AbsVector3) {
        self.ball.place(spot);
        self.ball.clear_last_touch();
        self.play_state = PlayState::Restart { kind, side, spot: *self.ball.position() };
        self.restart_timer.rewind();
        debug!(kind = ?kind, side = ?side, x = spot.x(), y = spot.y(), "restart awarded");
        self.push_event(EventKind::Restart { kind, side });
    }

    fn push_event(&mut self, kind: EventKind) {
        let minute = self.minute();
        self.events.push(MatchEvent { time_secs: self.clock_secs, minute, kind });
    }

    fn minute(&self) -> u16 {
        let t = &self.config.timing;
        let in_phase = match self.half {
            MatchHalf::FirstHalf | MatchHalf::SecondHalf => seconds_to_minute(self.phase_secs, t.half_duration_secs),
            // 15-minute halves on the 45-minute scale
            MatchHalf::ExtraTimeFirstHalf | MatchHalf::ExtraTimeSecondHalf => {
                seconds_to_minute(self.phase_secs, t.extra_time_half_secs) / 3
            }
            MatchHalf::Finished if !self.extra_time_played => return 90,
            _ => 0,
        };
        self.half.minute_offset() + in_phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::TimingConfig;
    use crate::engine::controller::ExternalController;

    fn short_config() -> EngineConfig {
        EngineConfig {
            timing: TimingConfig {
                half_duration_secs: 20.0,
                extra_time_half_secs: 10.0,
                pause_secs: 1.0,
                pre_match_secs: 2.0,
                ..TimingConfig::default()
            },
            ..EngineConfig::default()
        }
    }

    fn new_match(seed: u64, extra_time: bool) -> Match {
        let home = TeamSetup::standard("Home", 0.6);
        let away = TeamSetup::standard("Away", 0.5);
        Match::new(&home, &away, short_config(), seed, extra_time).unwrap()
    }

    /// Fast-forward through the pre-match walk-on.
    fn to_first_half(m: &mut Match) {
        while m.half() == MatchHalf::NotStarted {
            m.step();
        }
    }

    #[test]
    fn test_invalid_team_rejected() {
        let home = TeamSetup { name: "Empty".into(), players: vec![] };
        let away = TeamSetup::standard("Away", 0.5);
        assert!(Match::new(&home, &away, EngineConfig::default(), 0, false).is_err());
    }

    #[test]
    fn test_first_half_starts_with_kickoff() {
        let mut m = new_match(1, false);
        assert_eq!(m.half(), MatchHalf::NotStarted);
        to_first_half(&mut m);
        assert_eq!(m.half(), MatchHalf::FirstHalf);
        assert_eq!(m.play_state(), PlayState::Kickoff(TeamSide::First));
        assert_eq!(m.ball().position().x(), 0.0);
        assert!(m.events().iter().any(|e| e.kind == EventKind::KickOff { side: TeamSide::First }));
    }

    #[test]
    fn test_full_match_phase_sequence() {
        let mut m = new_match(2, false);
        let result = m.play();
        let halves: Vec<MatchHalf> = result
            .events
            .iter()
            .filter_map(|e| match e.kind {
                EventKind::HalfChanged { half } => Some(half),
                _ => None,
            })
            .collect();
        // extra time was not requested
        assert_eq!(
            halves,
            vec![
                MatchHalf::FirstHalf,
                MatchHalf::HalfTimePauseBegin,
                MatchHalf::HalfTimePauseEnd,
                MatchHalf::SecondHalf,
                MatchHalf::Finished,
            ]
        );
        assert!(!result.extra_time);
        assert!(m.is_finished());
        assert!((result.duration_secs - 40.0).abs() < 0.1);
    }

    #[test]
    fn test_extra_time_when_level() {
        let mut m = new_match(3, true);
        to_first_half(&mut m);
        // jump to the end of the second half with a level score
        m.enter_half(MatchHalf::HalfTimePauseBegin);
        m.enter_half(MatchHalf::HalfTimePauseEnd);
        m.enter_half(MatchHalf::SecondHalf);
        m.score = [1, 1];
        m.phase_secs = m.config.timing.half_duration_secs;
        m.referee(0.0);
        assert_eq!(m.half(), MatchHalf::FullTimePauseBegin);
    }

    #[test]
    fn test_no_extra_time_when_decided() {
        let mut m = new_match(3, true);
        to_first_half(&mut m);
        m.enter_half(MatchHalf::HalfTimePauseBegin);
        m.enter_half(MatchHalf::HalfTimePauseEnd);
        m.enter_half(MatchHalf::SecondHalf);
        m.score = [2, 1];
        m.phase_secs = m.config.timing.half_duration_secs;
        m.referee(0.0);
        assert_eq!(m.half(), MatchHalf::Finished);
    }

    /// Level (or not) at the end of extra time.
    fn end_of_extra_time(seed: u64, score: [u8; 2]) -> Match {
        let mut m = new_match(seed, true);
        to_first_half(&mut m);
        m.enter_half(MatchHalf::ExtraTimeFirstHalf);
        m.enter_half(MatchHalf::ExtraTimeSecondHalf);
        m.score = score;
        m.phase_secs = m.config.timing.extra_time_half_secs;
        m.referee(0.0);
        m
    }

    #[test]
    fn test_level_cup_tie_settled_on_penalties() {
        let mut m = end_of_extra_time(12, [1, 1]);
        assert_eq!(m.half(), MatchHalf::PenaltyShootout);

        let result = m.result();
        let shootout = result.penalty_shootout.clone().expect("shoot-out missing");
        assert_eq!(result.winner(), Some(shootout.winner));
        // regulation score is untouched
        assert_eq!(m.score(), [1, 1]);
        let logged = m.events().iter().filter(|e| matches!(e.kind, EventKind::PenaltyKick { .. })).count();
        assert_eq!(logged, shootout.kicks.len());

        m.step();
        assert!(m.is_finished());
        assert_eq!(m.result().penalty_shootout, Some(shootout));
    }

    #[test]
    fn test_no_penalties_when_extra_time_decides() {
        let m = end_of_extra_time(12, [2, 1]);
        assert_eq!(m.half(), MatchHalf::Finished);
        assert!(m.result().penalty_shootout.is_none());
        assert!(!m.events().iter().any(|e| matches!(e.kind, EventKind::PenaltyKick { .. })));
    }

    #[test]
    fn test_shootout_follows_match_seed() {
        let a = end_of_extra_time(21, [0, 0]).result().penalty_shootout;
        let b = end_of_extra_time(21, [0, 0]).result().penalty_shootout;
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_direction_swaps_at_half_time() {
        let mut m = new_match(4, false);
        to_first_half(&mut m);
        assert!(m.team(TeamSide::First).attacks_up());
        let home_before = *m.team(TeamSide::First).player(3).unwrap().home_position();
        m.enter_half(MatchHalf::HalfTimePauseBegin);
        m.enter_half(MatchHalf::HalfTimePauseEnd);
        assert!(!m.team(TeamSide::First).attacks_up());
        assert!(m.team(TeamSide::Second).attacks_up());
        assert_eq!(*m.team(TeamSide::First).player(3).unwrap().home_position(), home_before.mirrored());
    }

    #[test]
    fn test_goal_awarded_to_attacking_side() {
        let mut m = new_match(5, false);
        to_first_half(&mut m);
        m.play_state = PlayState::InPlay;
        let scorer = PlayerId::new(TeamSide::First, 9);
        m.ball.kicked(scorer);
        m.ball.place(AbsVector3::new(1.0, 53.0, 0.0));
        // placing the ball keeps the last touch
        assert_eq!(m.ball.last_touch(), Some(scorer));
        m.check_ball_out();

        assert_eq!(m.score(), [1, 0]);
        assert_eq!(m.play_state(), PlayState::Kickoff(TeamSide::Second));
        assert!(m
            .events()
            .iter()
            .any(|e| e.kind == EventKind::Goal { side: TeamSide::First, scorer: Some(scorer), own_goal: false }));
        let result = m.result();
        assert_eq!(result.goals_from_events(), (1, 0));
        assert_eq!(result.home_stats.goals, 1);
    }

    #[test]
    fn test_own_goal_flagged() {
        let mut m = new_match(5, false);
        to_first_half(&mut m);
        m.play_state = PlayState::InPlay;
        m.ball.kicked(PlayerId::new(TeamSide::First, 2));
        m.ball.place(AbsVector3::new(0.0, -53.0, 0.5));
        m.check_ball_out();
        assert_eq!(m.score(), [0, 1]);
        assert!(m.events().iter().any(|e| matches!(e.kind, EventKind::Goal { own_goal: true, .. })));
    }

    #[test]
    fn test_wide_of_post_is_goal_kick_or_corner() {
        let mut m = new_match(6, false);
        to_first_half(&mut m);

        // attacker's shot goes wide of the +y goal: goal kick to Second
        m.play_state = PlayState::InPlay;
        m.ball.kicked(PlayerId::new(TeamSide::First, 9));
        m.ball.place(AbsVector3::new(10.0, 53.0, 0.0));
        m.check_ball_out();
        match m.play_state() {
            PlayState::Restart { kind, side, spot } => {
                assert_eq!(kind, RestartKind::GoalKick);
                assert_eq!(side, TeamSide::Second);
                assert!((spot.y() - 47.0).abs() < 1e-4);
                assert!((spot.x() - area::GOAL_KICK_OFFSET_M).abs() < 1e-4);
            }
            other => panic!("unexpected {other:?}"),
        }

        // defender puts it behind: corner to First
        m.play_state = PlayState::InPlay;
        m.ball.kicked(PlayerId::new(TeamSide::Second, 3));
        m.ball.place(AbsVector3::new(-10.0, 53.0, 0.0));
        m.check_ball_out();
        assert!(matches!(
            m.play_state(),
            PlayState::Restart { kind: RestartKind::Corner, side: TeamSide::First, .. }
        ));
        assert_eq!(m.score(), [0, 0]);
    }

    #[test]
    fn test_throw_in_to_opponent_of_last_touch() {
        let mut m = new_match(7, false);
        to_first_half(&mut m);
        m.play_state = PlayState::InPlay;
        m.ball.kicked(PlayerId::new(TeamSide::Second, 6));
        m.ball.place(AbsVector3::new(-35.0, 12.0, 0.0));
        m.check_ball_out();
        match m.play_state() {
            PlayState::Restart { kind, side, spot } => {
                assert_eq!(kind, RestartKind::ThrowIn);
                assert_eq!(side, TeamSide::First);
                assert_eq!(spot.x(), -34.0);
                assert_eq!(spot.y(), 12.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_kick_by_awarded_side_puts_ball_in_play() {
        let mut m = new_match(8, false);
        to_first_half(&mut m);
        m.record_outcome(PlayerId::new(TeamSide::First, 9), ActionOutcome::Kicked { shot: false });
        assert!(m.play_state().is_in_play());
        assert_eq!(m.result().home_stats.kicks, 1);
    }

    #[test]
    fn test_stalled_restart_released() {
        let mut m = new_match(9, false);
        to_first_half(&mut m);
        // nobody kicks: all players externally driven and idle
        for side in TeamSide::BOTH {
            for i in 0..m.team(side).players().len() {
                let (controller, _handle) = ExternalController::channel();
                assert!(m.set_controller(PlayerId::new(side, i), Box::new(controller)));
            }
        }
        let ticks = ((RESTART_STALL_SECS + 0.5) / m.config.timing.tick_dt) as usize;
        for _ in 0..ticks {
            m.step();
        }
        assert!(m.play_state().is_in_play());
    }

    #[test]
    fn test_same_seed_same_match() {
        let a = new_match(42, false).play();
        let b = new_match(42, false).play();
        assert_eq!(a, b);
    }

    #[test]
    fn test_event_minutes_are_monotonic() {
        let result = new_match(11, false).play();
        let minutes: Vec<u16> = result.events.iter().map(|e| e.minute).collect();
        assert!(minutes.windows(2).all(|w| w[0] <= w[1]));
        assert!(*minutes.last().unwrap() <= 90);
    }

    #[test]
    fn test_relative_conversion_uses_pitch() {
        let m = new_match(1, false);
        let abs = m.convert_relative_to_absolute(&RelVector3::new(1.0, -1.0, 0.0));
        assert_eq!(abs, AbsVector3::new(34.0, -52.5, 0.0));
    }
}
