//! Physical body shared by the ball and the players
//!
//! Position, velocity and acceleration in absolute pitch space, advanced with a
//! plain Euler step. Ball and Player embed a `MatchEntity` and add their own
//! rules on top of `integrate`.

use super::coordinates::AbsVector3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchEntity {
    pub position: AbsVector3,
    pub velocity: AbsVector3,
    pub acceleration: AbsVector3,
}

impl MatchEntity {
    pub fn at(position: AbsVector3) -> Self {
        Self { position, ..Self::default() }
    }

    /// `velocity += acceleration * dt; position += velocity * dt`
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Zero velocity and acceleration.
    pub fn halt(&mut self) {
        self.velocity.set_zero();
        self.acceleration.set_zero();
    }
}

/// Anything with a `MatchEntity` body.
pub trait Entity {
    fn body(&self) -> &MatchEntity;

    fn position(&self) -> &AbsVector3 {
        &self.body().position
    }

    fn velocity(&self) -> &AbsVector3 {
        &self.body().velocity
    }

    fn acceleration(&self) -> &AbsVector3 {
        &self.body().acceleration
    }
}

/// Centre-to-centre distance between two entities (3D).
pub fn distance_between(a: &impl Entity, b: &impl Entity) -> f32 {
    a.position().distance(b.position())
}

impl Entity for MatchEntity {
    fn body(&self) -> &MatchEntity {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euler_step_order() {
        let mut e = MatchEntity::at(AbsVector3::new(1.0, 0.0, 0.0));
        e.velocity = AbsVector3::new(2.0, 0.0, 0.0);
        e.acceleration = AbsVector3::new(10.0, 0.0, 0.0);
        e.integrate(0.5);
        // velocity updated first, then used for the position step
        assert_eq!(e.velocity, AbsVector3::new(7.0, 0.0, 0.0));
        assert_eq!(e.position, AbsVector3::new(4.5, 0.0, 0.0));
    }

    #[test]
    fn test_halt_keeps_position() {
        let mut e = MatchEntity::at(AbsVector3::new(3.0, 4.0, 0.0));
        e.velocity = AbsVector3::new(1.0, 1.0, 1.0);
        e.acceleration = AbsVector3::new(1.0, 1.0, 1.0);
        e.halt();
        assert!(e.velocity.is_zero());
        assert!(e.acceleration.is_zero());
        assert_eq!(e.position, AbsVector3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_distance_between() {
        let a = MatchEntity::at(AbsVector3::new(0.0, 0.0, 0.0));
        let b = MatchEntity::at(AbsVector3::new(3.0, 4.0, 0.0));
        assert!((distance_between(&a, &b) - 5.0).abs() < 1e-6);
    }
}
