//! Countdown timer
//!
//! Used for every per-player cooldown (ball kick, tackling, tackled recovery).
//! The owner drives it: `do_countdown(dt)` then `check()` once per tick.
//!
//! ```text
//! Idle --rewind--> Running --countdown to 0--> Elapsed --check--> Idle
//! ```

use serde::{Deserialize, Serialize};

/// Observable timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    /// Not running, nothing pending
    Idle,
    /// Time remaining > 0
    Running,
    /// Reached zero, not yet observed by `check()`
    Elapsed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    duration: f32,
    remaining: f32,
    armed: bool,
}

impl Timer {
    /// Create an idle timer. Negative durations are treated as zero.
    pub fn new(duration: f32) -> Self {
        Self { duration: duration.max(0.0), remaining: 0.0, armed: false }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Restart from the full duration.
    pub fn rewind(&mut self) {
        self.remaining = self.duration;
        self.armed = true;
    }

    /// Stop without firing.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
        self.armed = false;
    }

    pub fn do_countdown(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn time_left(&self) -> f32 {
        self.remaining
    }

    /// Returns `true` exactly once after a rewound countdown reaches zero.
    pub fn check(&mut self) -> bool {
        if self.armed && !self.running() {
            self.armed = false;
            return true;
        }
        false
    }

    pub fn state(&self) -> TimerState {
        if self.running() {
            TimerState::Running
        } else if self.armed {
            TimerState::Elapsed
        } else {
            TimerState::Idle
        }
    }
}
