//! Clock and phase durations

use crate::engine::timestep::TICK_DT;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TimingConfig {
    /// Physics step in seconds (default: 0.02)
    pub tick_dt: f32,
    /// Regular half (default: 2700 = 45 min)
    pub half_duration_secs: f32,
    /// Extra-time half (default: 900 = 15 min)
    pub extra_time_half_secs: f32,
    /// Each half of a break: players walk off, then back on (default: 10)
    pub pause_secs: f32,
    /// Walk from the touchline to the home positions before kick-off (default: 10)
    pub pre_match_secs: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_dt: TICK_DT,
            half_duration_secs: 2700.0,
            extra_time_half_secs: 900.0,
            pause_secs: 10.0,
            pre_match_secs: 10.0,
        }
    }
}

impl TimingConfig {
    /// 5-minute halves for tests, benches and previews
    pub fn quick() -> Self {
        Self {
            half_duration_secs: 300.0,
            extra_time_half_secs: 120.0,
            pause_secs: 3.0,
            pre_match_secs: 3.0,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(self.tick_dt > 0.0 && self.tick_dt <= 0.1) {
            return Err(format!("timing.tick_dt = {} must be in (0, 0.1]", self.tick_dt));
        }
        for (name, value) in [
            ("half_duration_secs", self.half_duration_secs),
            ("extra_time_half_secs", self.extra_time_half_secs),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("timing.{name} = {value} must be positive"));
            }
        }
        for (name, value) in [("pause_secs", self.pause_secs), ("pre_match_secs", self.pre_match_secs)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("timing.{name} = {value} must not be negative"));
            }
        }
        Ok(())
    }
}
