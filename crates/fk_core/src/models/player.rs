use crate::engine::coordinates::RelVector3;
use crate::error::{Result, SimError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player profile as supplied by the squad/data layer.
///
/// Immutable for the duration of a match; the engine copies the skills into
/// the match-time `Player` and keeps the tactics mutable there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PlayerProfile {
    pub name: String,
    pub shirt_number: u8,
    pub skills: PlayerSkills,
    pub tactics: PlayerTactics,
}

/// Skill attributes, each normalised to 0.0..=1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PlayerSkills {
    pub ball_control: f32,
    pub tackling: f32,
    pub shot_power: f32,
    pub heading: f32,
    pub run_speed: f32,
    #[serde(default = "default_skill")]
    pub passing: f32,
    #[serde(default = "default_skill")]
    pub goalkeeping: f32,
}

fn default_skill() -> f32 {
    0.5
}

impl Default for PlayerSkills {
    fn default() -> Self {
        Self::uniform(default_skill())
    }
}

impl PlayerSkills {
    pub fn uniform(level: f32) -> Self {
        Self {
            ball_control: level,
            tackling: level,
            shot_power: level,
            heading: level,
            run_speed: level,
            passing: level,
            goalkeeping: level,
        }
    }

    fn named(&self) -> [(&'static str, f32); 7] {
        [
            ("ball_control", self.ball_control),
            ("tackling", self.tackling),
            ("shot_power", self.shot_power),
            ("heading", self.heading),
            ("run_speed", self.run_speed),
            ("passing", self.passing),
            ("goalkeeping", self.goalkeeping),
        ]
    }

    pub fn validate(&self, player: &str) -> Result<()> {
        for (skill, value) in self.named() {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidSkill { player: player.to_string(), skill, value });
            }
        }
        Ok(())
    }
}

/// Formation role category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
pub enum PlayerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPosition {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PlayerPosition::Goalkeeper)
    }

    /// Canonical longitudinal home line (relative, team defends -y)
    pub fn home_line(&self) -> f32 {
        match self {
            PlayerPosition::Goalkeeper => -0.95,
            PlayerPosition::Defender => -0.70,
            PlayerPosition::Midfielder => -0.30,
            PlayerPosition::Forward => -0.20,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PlayerTactics {
    pub position: PlayerPosition,
    /// Lateral offset, -1.0 (left) ..= 1.0 (right) as seen by a team attacking +y
    #[serde(default)]
    pub width_position: f32,
}

impl PlayerTactics {
    pub fn new(position: PlayerPosition, width_position: f32) -> Self {
        Self { position, width_position }
    }

    /// Home position for a team defending -y. Goalkeepers ignore the width.
    pub fn canonical_home_position(&self) -> RelVector3 {
        let width = if self.position.is_goalkeeper() { 0.0 } else { self.width_position };
        RelVector3::new(width, self.position.home_line(), 0.0)
    }
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, shirt_number: u8, skills: PlayerSkills, tactics: PlayerTactics) -> Self {
        Self { name: name.into(), shirt_number, skills, tactics }
    }

    pub fn validate(&self) -> Result<()> {
        self.skills.validate(&self.name)?;
        let w = self.tactics.width_position;
        if !(-1.0..=1.0).contains(&w) {
            return Err(SimError::InvalidWidthPosition { player: self.name.clone(), value: w });
        }
        Ok(())
    }
}
