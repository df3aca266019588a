/// timestep.rs
/// Fixed-step simulation constants
///
/// The match loop integrates every entity at `TICK_DT`. Configs may override the
/// step, but these are the defaults every preset starts from.

/// Integration timestep (20ms)
pub const TICK_DT: f32 = 0.02;

/// Ticks per simulated second
pub const TICKS_PER_SECOND: u32 = 50;

// Compile-time validation
const _: () = assert!(TICK_DT * TICKS_PER_SECOND as f32 == 1.0);

/// Convert simulated seconds to a match minute (0-based, 45 per half).
pub fn seconds_to_minute(seconds: f32, half_duration_secs: f32) -> u16 {
    if half_duration_secs <= 0.0 {
        return 0;
    }
    (seconds / half_duration_secs * 45.0).floor().max(0.0) as u16
}
