//! Physics constants for the entity simulation
//!
//! Pitch-absolute coordinates: origin at the centre spot, `x` across the pitch,
//! `y` goal to goal, `z` altitude. Tunable factors (roll inertia, air viscosity,
//! pitch size) live in `EngineConfig`; everything here is fixed geometry or a
//! fixed physical threshold.

/// Gravity (m/s²), applied to airborne balls and players.
pub const GRAVITY: f32 = 9.81;

// ============================================================
// Goal geometry
// ============================================================
pub mod goal {
    /// Goal half-width (7.32 / 2)
    pub const HALF_WIDTH_M: f32 = 3.66;
    /// Crossbar height
    pub const HEIGHT_M: f32 = 2.44;
    /// Post/bar strike tolerance around the frame
    pub const FRAME_TOLERANCE_M: f32 = 0.03;
    /// Depth of the band just inside the goal line where post strikes are tested
    pub const MOUTH_BAND_M: f32 = 0.5;
    /// Outer goal-line proximity band, sampled before integration
    pub const OUTER_BAND_X_M: f32 = HALF_WIDTH_M + 0.30;
    /// Inner goal-line proximity band, sampled after integration
    pub const INNER_BAND_X_M: f32 = HALF_WIDTH_M - 0.30;
}

// ============================================================
// Penalty area (used by goalkeeper grabs and goal kicks)
// ============================================================
pub mod area {
    /// Penalty area depth from the goal line
    pub const PENALTY_DEPTH_M: f32 = 16.5;
    /// Penalty area half-width (40.32 / 2)
    pub const PENALTY_HALF_WIDTH_M: f32 = 20.16;
    /// Goal kick spot distance from the goal line
    pub const GOAL_KICK_DEPTH_M: f32 = 5.5;
    /// Goal kick spot lateral offset
    pub const GOAL_KICK_OFFSET_M: f32 = 9.16;
}

// ============================================================
// Ball
// ============================================================
pub mod ball {
    /// Resting height of a ball placed on the pitch or held by a keeper
    pub const GROUND_CLEARANCE_M: f32 = 0.10;
    /// Below this altitude the ball follows ground rules
    pub const GROUND_BAND_M: f32 = 0.15;
    /// |vz| below this is treated as resting
    pub const REST_VZ: f32 = 0.1;
    /// Coefficient of restitution on grass
    pub const BOUNCE_COR: f32 = 0.65;
    /// Lateral margin beyond the pitch (net / run-off)
    pub const RUNOFF_MARGIN_M: f32 = 3.0;
    /// Post/bar velocity damping
    pub const FRAME_DAMPING: f32 = 0.9;
    /// Collision pass only runs above this speed
    pub const COLLISION_MIN_SPEED: f32 = 2.0;
    /// Distance from the release point before collisions are tested again
    pub const COLLISION_IGNORE_DISTANCE_M: f32 = 1.5;
    /// Centre-to-centre distance that counts as ball/player contact
    pub const CONTACT_DISTANCE_M: f32 = 1.0;
    /// Ball speed is divided by this before comparing with ball control
    pub const CONTROL_SPEED_SCALE: f32 = 80.0;
    /// Velocity factor after a controlled catch
    pub const CATCH_FACTOR: f32 = -0.1;
    /// Velocity factor after a deflection
    pub const DEFLECT_FACTOR: f32 = -0.7;
}

// ============================================================
// Player
// ============================================================
pub mod player {
    /// Base run speed; scaled by `(1 + run_speed) / 2`
    pub const BASE_RUN_SPEED: f32 = 8.0;
    pub const BASE_SHOT_POWER: f32 = 20.0;
    pub const SHOT_POWER_RANGE: f32 = 30.0;
    pub const BASE_HEADING_POWER: f32 = 20.0;
    pub const HEADING_POWER_RANGE: f32 = 20.0;
    /// Airborne if above this height or rising faster than this
    pub const AIRBORNE_THRESHOLD: f32 = 0.05;
    /// Ball-kick cooldown is `KICK_COOLDOWN_BASE - ball_control`
    pub const KICK_COOLDOWN_BASE: f32 = 1.5;
    /// Tackle duration is `TACKLE_DURATION_BASE - tackling * TACKLE_SKILL_SCALE`
    pub const TACKLE_DURATION_BASE: f32 = 1.0;
    pub const TACKLE_SKILL_SCALE: f32 = 0.5;
    /// Final window of a tackle in which the tackler decelerates
    pub const TACKLE_SLOWDOWN_WINDOW: f32 = 0.5;
    pub const TACKLE_SLOWDOWN_FACTOR: f32 = 0.5;
    /// Recovery time after being tackled
    pub const TACKLED_RECOVERY: f32 = 2.0;
}

// ============================================================
// Action reach
// ============================================================
pub mod reach {
    /// Maximum player-to-ball distance for a kick
    pub const KICK_DISTANCE_M: f32 = 1.5;
    /// Maximum player-to-ball distance for a goalkeeper grab
    pub const GRAB_DISTANCE_M: f32 = 1.5;
    /// Maximum tackler-to-target distance for a successful tackle
    pub const TACKLE_DISTANCE_M: f32 = 1.5;
    /// Above this ball height kicks use heading power
    pub const HEADER_HEIGHT_M: f32 = 1.0;
    /// Jump take-off speed cap
    pub const MAX_JUMP_SPEED: f32 = 4.0;
}
