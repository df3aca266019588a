//! Ball free-flight tuning

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BallConfig {
    /// Fraction of velocity lost per second while rolling (default: 0.5)
    pub roll_inertia_factor: f32,
    /// Fraction of velocity lost per second in the air (default: 0.1)
    pub air_viscosity_factor: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self { roll_inertia_factor: 0.5, air_viscosity_factor: 0.1 }
    }
}

impl BallConfig {
    /// Faster surface, livelier ball
    pub fn arcade() -> Self {
        Self { roll_inertia_factor: 0.3, air_viscosity_factor: 0.05 }
    }

    /// Each factor is applied as `1 - dt * factor`; beyond 1/dt it would
    /// reverse the ball.
    pub(crate) fn validate(&self, tick_dt: f32) -> Result<(), String> {
        for (name, value) in [
            ("roll_inertia_factor", self.roll_inertia_factor),
            ("air_viscosity_factor", self.air_viscosity_factor),
        ] {
            if !value.is_finite() || value < 0.0 || value * tick_dt >= 1.0 {
                return Err(format!("ball.{name} = {value} out of range for tick_dt {tick_dt}"));
            }
        }
        Ok(())
    }
}
