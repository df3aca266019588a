//! Coordinate system and vector primitives
//!
//! ## Coordinate Systems
//!
//! **Absolute/Pitch Coordinates** (physics, distances):
//! - origin at the centre spot
//! - X: across the pitch, touchlines at ±width/2
//! - Y: goal to goal, goal lines at ±height/2
//! - Z: altitude above the grass
//!
//! **Relative Coordinates** (tactics, home positions):
//! - same axes, normalised to [-1, 1] by the pitch half dimensions
//! - stored already oriented for the team's side and the current half;
//!   a change of playing direction mirrors them (x and y negated)
//!
//! The two spaces are separate newtypes so they cannot be mixed silently.

use nalgebra::Vector3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! vector_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub v: Vector3<f32>,
        }

        impl $name {
            pub fn new(x: f32, y: f32, z: f32) -> Self {
                Self { v: Vector3::new(x, y, z) }
            }

            pub fn zero() -> Self {
                Self { v: Vector3::zeros() }
            }

            pub fn x(&self) -> f32 {
                self.v.x
            }

            pub fn y(&self) -> f32 {
                self.v.y
            }

            pub fn z(&self) -> f32 {
                self.v.z
            }

            pub fn length(&self) -> f32 {
                self.v.norm()
            }

            /// Length in the pitch plane (z ignored)
            pub fn length_xy(&self) -> f32 {
                self.v.x.hypot(self.v.y)
            }

            pub fn is_zero(&self) -> bool {
                self.v.x == 0.0 && self.v.y == 0.0 && self.v.z == 0.0
            }

            pub fn set_zero(&mut self) {
                self.v = Vector3::zeros();
            }

            /// Unit vector in the same direction; a zero vector is returned unchanged.
            pub fn normalized(&self) -> Self {
                let len = self.length();
                if len > 0.0 {
                    Self { v: self.v / len }
                } else {
                    *self
                }
            }

            /// Copy with the z component dropped
            pub fn flattened(&self) -> Self {
                Self::new(self.v.x, self.v.y, 0.0)
            }

            /// Scale down to `max` if longer; direction preserved.
            pub fn capped(&self, max: f32) -> Self {
                let len = self.length();
                if len > max && len > 0.0 {
                    Self { v: self.v * (max / len) }
                } else {
                    *self
                }
            }

            pub fn distance(&self, other: &Self) -> f32 {
                (self.v - other.v).norm()
            }

            pub fn distance_xy(&self, other: &Self) -> f32 {
                (self.v.x - other.v.x).hypot(self.v.y - other.v.y)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { v: self.v + rhs.v }
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.v += rhs.v;
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { v: self.v - rhs.v }
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                self.v -= rhs.v;
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self { v: self.v * rhs }
            }
        }

        impl MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                self.v *= rhs;
            }
        }

        impl Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                Self { v: -self.v }
            }
        }
    };
}

vector_newtype!(AbsVector3);
vector_newtype!(RelVector3);

impl RelVector3 {
    /// Point-mirror through the centre spot (playing direction change).
    /// Applying it twice restores the original vector exactly.
    pub fn mirrored(&self) -> Self {
        Self::new(-self.v.x, -self.v.y, self.v.z)
    }
}

/// Pitch dimensions in meters.
///
/// `height` is the goal-to-goal extent in the top-down sense, `width` the
/// touchline-to-touchline extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pitch {
    pub width: f32,
    pub height: f32,
}

impl Default for Pitch {
    fn default() -> Self {
        Self { width: 68.0, height: 105.0 }
    }
}

impl Pitch {
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    pub fn relative_to_absolute(&self, rel: &RelVector3) -> AbsVector3 {
        AbsVector3::new(rel.v.x * self.half_width(), rel.v.y * self.half_height(), rel.v.z)
    }

    pub fn absolute_to_relative(&self, abs: &AbsVector3) -> RelVector3 {
        RelVector3::new(abs.v.x / self.half_width(), abs.v.y / self.half_height(), abs.v.z)
    }

    /// Inside the touchlines and goal lines (z ignored)
    pub fn contains(&self, pos: &AbsVector3) -> bool {
        pos.v.x.abs() <= self.half_width() && pos.v.y.abs() <= self.half_height()
    }

    /// Clamp a target position onto the playing surface.
    pub fn clamp_to_pitch(&self, pos: &AbsVector3) -> AbsVector3 {
        AbsVector3::new(
            pos.v.x.clamp(-self.half_width(), self.half_width()),
            pos.v.y.clamp(-self.half_height(), self.half_height()),
            pos.v.z,
        )
    }

    /// Centre of the goal on the `+y` end when `up`, else the `-y` end.
    pub fn goal_center(&self, up: bool) -> AbsVector3 {
        let y = if up { self.half_height() } else { -self.half_height() };
        AbsVector3::new(0.0, y, 0.0)
    }
}
