use thiserror::Error;

/// Errors raised while building or configuring a match.
///
/// The tick loop itself is infallible; these only come out of the setup and
/// API boundaries.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid team size for {team}: expected 1..={max}, found {found}")]
    InvalidTeamSize { team: String, max: usize, found: usize },

    #[error("Invalid skill {skill} = {value} for player {player} (expected 0.0..=1.0)")]
    InvalidSkill { player: String, skill: &'static str, value: f32 },

    #[error("Invalid width position {value} for player {player} (expected -1.0..=1.0)")]
    InvalidWidthPosition { player: String, value: f32 },

    #[error("Duplicate shirt number {number} in {team}")]
    DuplicateShirtNumber { team: String, number: u8 },

    #[error("Team {team} fields {found} goalkeepers (at most 1 allowed)")]
    TooManyGoalkeepers { team: String, found: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(u8),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Errors caused by caller-supplied data rather than the environment.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SimError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
