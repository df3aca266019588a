//! # Engine Configuration
//!
//! Every tunable of a match in one place: pitch size, ball damping factors and
//! the clock. Fixed geometry (goal frame, penalty area) stays in
//! `physics_constants`.
//!
//! ## Usage
//! ```rust
//! use fk_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let quick = EngineConfig::quick();
//! assert!(quick.timing.half_duration_secs < config.timing.half_duration_secs);
//! ```
//!
//! ## Environment Variables
//!
//! - `FK_ENGINE_PROFILE`: select a preset (realistic, arcade, quick)

mod ball_config;
mod timing_config;

pub use ball_config::BallConfig;
pub use timing_config::TimingConfig;

use super::coordinates::Pitch;
use crate::error::{Result, SimError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct EngineConfig {
    /// Pitch dimensions (default: 68 × 105)
    #[serde(default)]
    pub pitch: Pitch,
    #[serde(default)]
    pub ball: BallConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

impl EngineConfig {
    /// Full-length match with standard damping (default)
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Livelier ball, same clock
    pub fn arcade() -> Self {
        Self { ball: BallConfig::arcade(), ..Self::default() }
    }

    /// Short halves; same physics as `realistic`
    pub fn quick() -> Self {
        Self { timing: TimingConfig::quick(), ..Self::default() }
    }

    pub fn from_env_or_default() -> Self {
        match env::var("FK_ENGINE_PROFILE").unwrap_or_default().to_lowercase().as_str() {
            "arcade" => Self::arcade(),
            "quick" => Self::quick(),
            _ => Self::default(),
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::from_json_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            other => Err(SimError::InvalidConfig(format!(
                "unsupported config extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let Pitch { width, height } = self.pitch;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidConfig(format!("pitch {width} x {height} must be positive")));
        }
        self.timing.validate().map_err(SimError::InvalidConfig)?;
        self.ball.validate(self.timing.tick_dt).map_err(SimError::InvalidConfig)?;
        Ok(())
    }
}

// ========== Tests ==========
