use super::player::{PlayerPosition, PlayerProfile, PlayerSkills, PlayerTactics};
use crate::error::{Result, SimError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Players on the pitch per side
pub const MAX_PLAYERS: usize = 11;

/// Team line-up handed to the engine by the competition layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct TeamSetup {
    pub name: String,
    pub players: Vec<PlayerProfile>, // starting line-up only
}

impl TeamSetup {
    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() || self.players.len() > MAX_PLAYERS {
            return Err(SimError::InvalidTeamSize {
                team: self.name.clone(),
                max: MAX_PLAYERS,
                found: self.players.len(),
            });
        }

        let goalkeepers = self.players.iter().filter(|p| p.tactics.position.is_goalkeeper()).count();
        if goalkeepers > 1 {
            return Err(SimError::TooManyGoalkeepers { team: self.name.clone(), found: goalkeepers });
        }

        let mut seen = HashSet::new();
        for p in &self.players {
            if !seen.insert(p.shirt_number) {
                return Err(SimError::DuplicateShirtNumber {
                    team: self.name.clone(),
                    number: p.shirt_number,
                });
            }
            p.validate()?;
        }

        Ok(())
    }

    /// Deterministic 4-4-2 with every skill at `level`.
    ///
    /// Used by the CLI, tests and benchmarks when no squad data is supplied.
    pub fn standard(name: impl Into<String>, level: f32) -> Self {
        let level = level.clamp(0.0, 1.0);
        let lineup: [(PlayerPosition, f32, &str); MAX_PLAYERS] = [
            (PlayerPosition::Goalkeeper, 0.0, "GK"),
            (PlayerPosition::Defender, -0.6, "LB"),
            (PlayerPosition::Defender, -0.2, "LCB"),
            (PlayerPosition::Defender, 0.2, "RCB"),
            (PlayerPosition::Defender, 0.6, "RB"),
            (PlayerPosition::Midfielder, -0.6, "LM"),
            (PlayerPosition::Midfielder, -0.2, "LCM"),
            (PlayerPosition::Midfielder, 0.2, "RCM"),
            (PlayerPosition::Midfielder, 0.6, "RM"),
            (PlayerPosition::Forward, -0.25, "LS"),
            (PlayerPosition::Forward, 0.25, "RS"),
        ];

        let players = lineup
            .iter()
            .enumerate()
            .map(|(i, (pos, width, label))| {
                let mut skills = PlayerSkills::uniform(level);
                if pos.is_goalkeeper() {
                    skills.goalkeeping = (level + 0.2).min(1.0);
                }
                PlayerProfile::new(
                    format!("{} {}", label, i + 1),
                    (i + 1) as u8,
                    skills,
                    PlayerTactics::new(*pos, *width),
                )
            })
            .collect();

        Self { name: name.into(), players }
    }

    pub fn goalkeeper(&self) -> Option<&PlayerProfile> {
        self.players.iter().find(|p| p.tactics.position.is_goalkeeper())
    }
}
