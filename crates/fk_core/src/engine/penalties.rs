//! Penalty shoot-out
//!
//! Decides a cup tie still level after extra time. Kicks are not played out
//! on the pitch: each one is a seeded draw of the taker's shot power against
//! the opposing keeper's goalkeeping.
//!
//! Five kicks each, First side first, stopping early once one side cannot
//! catch up, then sudden-death pairs.

use super::player::Player;
use super::team::{PlayerId, Team, TeamSide};
use crate::models::{ShootoutKick, ShootoutResult};
use rand::Rng;

/// Kicks per side before sudden death
pub const REGULATION_KICKS: u8 = 5;
/// Sudden-death pairs before the toss decides
pub const MAX_SUDDEN_DEATH_ROUNDS: u8 = 10;

const BASE_SCORE_CHANCE: f32 = 0.75;
const SKILL_DIFF_WEIGHT: f32 = 0.3;
const MIN_SCORE_CHANCE: f32 = 0.55;
const MAX_SCORE_CHANCE: f32 = 0.92;

/// Chance of scoring for a taker with `shot_power` against `goalkeeping`.
pub fn score_chance(shot_power: f32, goalkeeping: f32) -> f32 {
    (BASE_SCORE_CHANCE + (shot_power - goalkeeping) * SKILL_DIFF_WEIGHT).clamp(MIN_SCORE_CHANCE, MAX_SCORE_CHANCE)
}

/// Kicking order: strongest shot first, the goalkeeper last, roster order
/// on ties.
fn taker_order(team: &Team) -> Vec<&Player> {
    let mut order: Vec<&Player> = team.players().iter().collect();
    order.sort_by(|a, b| {
        a.is_goalkeeper()
            .cmp(&b.is_goalkeeper())
            .then(b.skills().shot_power.total_cmp(&a.skills().shot_power))
            .then(a.id().index.cmp(&b.id().index))
    });
    order
}

/// Goalkeeping skill facing kicks at `team`'s goal. A side without a
/// keeper puts its best shot-stopper in.
fn keeper_skill(team: &Team) -> f32 {
    match team.goalkeeper() {
        Some(k) => k.skills().goalkeeping,
        None => team.players().iter().map(|p| p.skills().goalkeeping).fold(0.0, f32::max),
    }
}

struct Side<'a> {
    takers: Vec<&'a Player>,
    next: usize,
    taken: u8,
    goals: u8,
}

impl<'a> Side<'a> {
    fn new(team: &'a Team) -> Self {
        Self { takers: taker_order(team), next: 0, taken: 0, goals: 0 }
    }
}

fn take_kick<R: Rng>(
    kicker: &mut Side,
    side: TeamSide,
    keeping: f32,
    rng: &mut R,
    kicks: &mut Vec<ShootoutKick>,
) {
    kicker.taken = kicker.taken.saturating_add(1);
    if kicker.takers.is_empty() {
        // nobody to take it: a miss
        kicks.push(ShootoutKick { side, taker: PlayerId::new(side, 0), scored: false });
        return;
    }
    let taker = kicker.takers[kicker.next % kicker.takers.len()];
    kicker.next += 1;
    let scored = rng.gen::<f32>() < score_chance(taker.skills().shot_power, keeping);
    if scored {
        kicker.goals = kicker.goals.saturating_add(1);
    }
    kicks.push(ShootoutKick { side, taker: taker.id(), scored });
}

/// Run a full shoot-out between the two rosters.
pub fn run_shootout<R: Rng>(teams: &[Team; 2], rng: &mut R) -> ShootoutResult {
    let mut home = Side::new(&teams[0]);
    let mut away = Side::new(&teams[1]);
    let home_keeping = keeper_skill(&teams[0]);
    let away_keeping = keeper_skill(&teams[1]);
    let mut kicks = Vec::new();

    for _ in 0..REGULATION_KICKS {
        take_kick(&mut home, TeamSide::First, away_keeping, rng, &mut kicks);
        if home.goals > away.goals + (REGULATION_KICKS - away.taken) {
            break;
        }
        take_kick(&mut away, TeamSide::Second, home_keeping, rng, &mut kicks);
        if away.goals > home.goals + (REGULATION_KICKS - home.taken) {
            break;
        }
    }

    let mut rounds = 0;
    while home.goals == away.goals && rounds < MAX_SUDDEN_DEATH_ROUNDS {
        take_kick(&mut home, TeamSide::First, away_keeping, rng, &mut kicks);
        take_kick(&mut away, TeamSide::Second, home_keeping, rng, &mut kicks);
        rounds += 1;
    }

    let winner = match home.goals.cmp(&away.goals) {
        std::cmp::Ordering::Greater => TeamSide::First,
        std::cmp::Ordering::Less => TeamSide::Second,
        std::cmp::Ordering::Equal => {
            if rng.gen::<bool>() {
                TeamSide::First
            } else {
                TeamSide::Second
            }
        }
    };

    ShootoutResult { goals_home: home.goals, goals_away: away.goals, winner, kicks }
}
