use fk_core::engine::config::TimingConfig;
use fk_core::engine::controller::ExternalController;
use fk_core::engine::entity::Entity;
use fk_core::engine::{AbsVector3, MatchHalf, PlayState};
use fk_core::{
    simulate_match, simulate_match_json, EngineConfig, EventKind, Match, MatchRequest, PlayerAction, PlayerId,
    SimError, TeamSetup, TeamSide,
};
use std::io::Write;

fn short_config() -> EngineConfig {
    EngineConfig {
        timing: TimingConfig {
            half_duration_secs: 30.0,
            extra_time_half_secs: 10.0,
            pause_secs: 1.0,
            pre_match_secs: 2.0,
            ..TimingConfig::default()
        },
        ..EngineConfig::default()
    }
}

fn request(seed: u64) -> MatchRequest {
    let mut req = MatchRequest::new(seed, TeamSetup::standard("Reds", 0.7), TeamSetup::standard("Blues", 0.4));
    req.config = Some(short_config());
    req
}

#[test]
fn test_determinism_per_seed() {
    let a = simulate_match(&request(2024)).unwrap();
    let b = simulate_match(&request(2024)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_score_matches_event_log() {
    for seed in 0..4 {
        let result = simulate_match(&request(seed)).unwrap();
        assert_eq!(result.goals_from_events(), (result.score_home, result.score_away));
        assert_eq!(result.home_stats.goals, result.score_home);
        assert_eq!(result.away_stats.goals, result.score_away);
    }
}

#[test]
fn test_ball_stays_inside_net_bounds() {
    let cfg = short_config();
    let mut game = Match::new(&TeamSetup::standard("A", 0.5), &TeamSetup::standard("B", 0.5), cfg, 9, false).unwrap();
    let limit = cfg.pitch.half_height() + 3.0;
    while !game.is_finished() {
        game.step();
        let pos = *game.ball().position();
        assert!(pos.y().abs() <= limit + 1e-3);
        assert!(!pos.x().is_nan() && !pos.y().is_nan() && !pos.z().is_nan());
    }
}

#[test]
fn test_players_never_sink_below_pitch() {
    let mut game =
        Match::new(&TeamSetup::standard("A", 0.5), &TeamSetup::standard("B", 0.5), short_config(), 3, false).unwrap();
    for _ in 0..2_000 {
        game.step();
        for team in game.teams() {
            for p in team.players() {
                assert!(p.position().z() >= 0.0);
            }
        }
    }
}

#[test]
fn test_external_controller_drives_player() {
    let mut game =
        Match::new(&TeamSetup::standard("A", 0.5), &TeamSetup::standard("B", 0.5), short_config(), 1, false).unwrap();
    let id = PlayerId::new(TeamSide::First, 5);
    let (controller, handle) = ExternalController::channel();
    assert!(game.set_controller(id, Box::new(controller)));

    while game.half() == MatchHalf::NotStarted {
        game.step();
    }
    let start = *game.team(TeamSide::First).player(5).unwrap().position();
    assert!(handle.send(PlayerAction::Move { velocity: AbsVector3::new(3.0, 0.0, 0.0) }));
    for _ in 0..50 {
        game.step();
    }
    let end = *game.team(TeamSide::First).player(5).unwrap().position();
    // one second at 3 m/s
    assert!((end.x() - start.x() - 3.0).abs() < 0.2);
    assert!((end.y() - start.y()).abs() < 1e-3);
}

#[test]
fn test_kickoff_taken_by_ai() {
    let mut game =
        Match::new(&TeamSetup::standard("A", 0.5), &TeamSetup::standard("B", 0.5), short_config(), 5, false).unwrap();
    while game.half() == MatchHalf::NotStarted {
        game.step();
    }
    assert!(matches!(game.play_state(), PlayState::Kickoff(TeamSide::First)));
    for _ in 0..500 {
        game.step();
        if game.play_state().is_in_play() {
            break;
        }
    }
    assert!(game.play_state().is_in_play());
    assert!(game.result().home_stats.kicks >= 1);
}

#[test]
fn test_extra_time_flag_only_when_played() {
    for seed in 0..3 {
        let mut req = request(seed);
        req.extra_time = true;
        let result = simulate_match(&req).unwrap();
        let went_to_extra = result
            .events
            .iter()
            .any(|e| e.kind == EventKind::HalfChanged { half: MatchHalf::ExtraTimeFirstHalf });
        assert_eq!(went_to_extra, result.extra_time);
        // a cup tie always has a winner
        assert!(result.winner().is_some());
        assert_eq!(result.penalty_shootout.is_some(), result.extra_time && result.score_home == result.score_away);
    }
}

#[test]
fn test_json_api_end_to_end() {
    let json = serde_json::to_string(&request(77)).unwrap();
    let out = simulate_match_json(&json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["schema_version"], 1);
    assert_eq!(v["away_team"], "Blues");
}

#[test]
fn test_invalid_squad_rejected_by_api() {
    let mut req = request(1);
    req.home_team.players[3].skills.tackling = 1.5;
    assert!(matches!(simulate_match(&req), Err(SimError::InvalidSkill { skill: "tackling", .. })));
}

#[test]
fn test_config_file_drives_match_length() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.yaml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "timing:").unwrap();
    writeln!(f, "  half_duration_secs: 12").unwrap();
    writeln!(f, "  pre_match_secs: 1").unwrap();
    writeln!(f, "  pause_secs: 1").unwrap();
    drop(f);

    let cfg = EngineConfig::from_path(&path).unwrap();
    let mut game = Match::new(&TeamSetup::standard("A", 0.5), &TeamSetup::standard("B", 0.5), cfg, 4, false).unwrap();
    let result = game.play();
    assert!((result.duration_secs - 24.0).abs() < 0.1);
}

#[test]
fn test_keeper_does_not_recatch_own_distribution() {
    let home = TeamSetup::standard("Reds", 0.7);
    let away = TeamSetup::standard("Blues", 0.4);
    // a catch is held for 1.5 s; re-catching the release would follow right after
    let min_gap = 1.7;

    for seed in [3, 8] {
        let mut game = Match::new(&home, &away, EngineConfig::quick(), seed, false).unwrap();
        let result = game.play();
        let mut last_grab: [Option<f32>; 2] = [None, None];
        for event in &result.events {
            if let EventKind::Grab { keeper } = event.kind {
                let side = keeper.side.index();
                if let Some(prev) = last_grab[side] {
                    assert!(
                        event.time_secs - prev >= min_gap,
                        "seed {seed}: keeper {keeper:?} grabbed again {:.2}s after the last catch",
                        event.time_secs - prev
                    );
                }
                last_grab[side] = Some(event.time_secs);
            }
        }
    }
}
