//! Ball entity
//!
//! Free flight (bounce, rolling resistance, air drag, gravity), the goal
//! frame, contact with players and the goalkeeper hold. While grabbed the
//! ball is glued to its holder and none of the free-flight rules apply.

use super::config::BallConfig;
use super::coordinates::{AbsVector3, Pitch};
use super::entity::{distance_between, Entity, MatchEntity};
use super::physics_constants::{ball as bc, goal, GRAVITY};
use super::player::Player;
use super::team::{PlayerId, Team};
use tracing::trace;

/// What happened to the ball during one `update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallUpdate {
    /// Struck a post or the crossbar
    pub frame_hit: bool,
    /// Players the ball bounced off or was stopped by, in collision order
    pub touches: Vec<PlayerId>,
}

#[derive(Debug, Clone)]
pub struct Ball {
    body: MatchEntity,
    grabbed: bool,
    grabber: Option<PlayerId>,
    collision_free_point: AbsVector3,
    last_touch: Option<PlayerId>,
}

impl Entity for Ball {
    fn body(&self) -> &MatchEntity {
        &self.body
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// Ball resting on the centre spot.
    pub fn new() -> Self {
        let spot = AbsVector3::new(0.0, 0.0, bc::GROUND_CLEARANCE_M);
        Self {
            body: MatchEntity::at(spot),
            grabbed: false,
            grabber: None,
            collision_free_point: spot,
            last_touch: None,
        }
    }

    pub fn grabbed(&self) -> bool {
        self.grabbed
    }

    pub fn grabber(&self) -> Option<PlayerId> {
        self.grabber
    }

    /// Last player to kick, grab or deflect the ball
    pub fn last_touch(&self) -> Option<PlayerId> {
        self.last_touch
    }

    pub fn collision_free_point(&self) -> &AbsVector3 {
        &self.collision_free_point
    }

    pub fn set_velocity(&mut self, velocity: AbsVector3) {
        self.body.velocity = velocity;
    }

    /// Dead-ball placement: drop any hold, stop, put down at `spot` on the grass.
    pub fn place(&mut self, spot: AbsVector3) {
        self.grabbed = false;
        self.grabber = None;
        self.body = MatchEntity::at(AbsVector3::new(spot.x(), spot.y(), bc::GROUND_CLEARANCE_M));
        self.collision_free_point = self.body.position;
    }

    /// Forget who touched the ball last (kick-offs and restarts).
    pub fn clear_last_touch(&mut self) {
        self.last_touch = None;
    }

    /// Release the ball for a kick by `by`.
    ///
    /// A held ball only leaves the holder's hands; a kick attempt by anybody
    /// else is ignored and `false` is returned.
    pub fn kicked(&mut self, by: PlayerId) -> bool {
        if self.grabbed && self.grabber != Some(by) {
            return false;
        }
        self.collision_free_point = self.body.position;
        self.grabbed = false;
        self.grabber = None;
        self.last_touch = Some(by);
        true
    }

    pub fn grab(&mut self, by: &Player) {
        self.grabbed = true;
        self.grabber = Some(by.id());
        self.last_touch = Some(by.id());
        self.body.halt();
        self.body.position = *by.position();
        self.body.position.v.z = bc::GROUND_CLEARANCE_M;
    }

    /// Contact response against one player. Returns `true` on contact.
    ///
    /// A slow enough ball relative to the player's ball control is stopped
    /// (catch); a faster one bounces back off (deflection).
    pub fn check_collision(&mut self, p: &Player) -> bool {
        if distance_between(self, p) >= bc::CONTACT_DISTANCE_M {
            return false;
        }
        let caught = self.body.velocity.length() / bc::CONTROL_SPEED_SCALE < p.skills().ball_control;
        if caught {
            self.body.velocity *= bc::CATCH_FACTOR;
        } else {
            self.body.velocity *= bc::DEFLECT_FACTOR;
        }
        self.last_touch = Some(p.id());
        true
    }

    /// Advance one tick. Player positions must already be integrated for
    /// this tick; the collision pass reads them.
    ///
    /// # Panics
    /// If the ball is grabbed by a player that is not on either roster.
    pub fn update(&mut self, dt: f32, pitch: &Pitch, cfg: &BallConfig, teams: &[Team; 2]) -> BallUpdate {
        let mut out = BallUpdate::default();

        if self.grabbed {
            self.follow_grabber(teams);
            return out;
        }

        let outside_before_left = self.body.position.x() < -goal::OUTER_BAND_X_M;
        let outside_before_right = self.body.position.x() > goal::OUTER_BAND_X_M;
        self.body.integrate(dt);
        let outside_after_left = self.body.position.x() < -goal::INNER_BAND_X_M;
        let outside_after_right = self.body.position.x() > goal::INNER_BAND_X_M;

        if self.body.velocity.length() > bc::COLLISION_MIN_SPEED
            && self.body.position.distance(&self.collision_free_point) > bc::COLLISION_IGNORE_DISTANCE_M
        {
            for team in teams {
                for p in team.players() {
                    if self.check_collision(p) {
                        out.touches.push(p.id());
                    }
                }
            }
        }

        if self.body.position.z() < bc::GROUND_BAND_M {
            if self.body.velocity.z().abs() < bc::REST_VZ {
                self.body.velocity.v.z = 0.0;
            }
            if self.body.velocity.z() < -bc::REST_VZ {
                self.body.velocity.v.z *= -bc::BOUNCE_COR;
            } else {
                self.body.velocity *= 1.0 - dt * cfg.roll_inertia_factor;
            }
        } else {
            self.body.velocity *= 1.0 - dt * cfg.air_viscosity_factor;
            self.body.velocity.v.z -= GRAVITY * dt;
        }

        // net
        let limit = pitch.half_height() + bc::RUNOFF_MARGIN_M;
        self.body.position.v.y = self.body.position.y().clamp(-limit, limit);

        // the crossbar is not solid from above or below: a ball under 2.44 m
        // is tested against the frame, anything higher flies over
        if self.body.position.z() < goal::HEIGHT_M {
            let y = self.body.position.y();
            if y.abs() > pitch.half_height() {
                if outside_before_left != outside_after_left || outside_before_right != outside_after_right {
                    self.body.velocity.set_zero();
                }
            } else if y.abs() > pitch.half_height() - goal::MOUTH_BAND_M {
                let x = self.body.position.x().abs();
                let z = self.body.position.z();
                let near_post = (x - goal::HALF_WIDTH_M).abs() < goal::FRAME_TOLERANCE_M;
                let near_bar = (z - goal::HEIGHT_M).abs() < goal::FRAME_TOLERANCE_M;
                if near_post || near_bar {
                    self.body.velocity.v.y = -self.body.velocity.y();
                    self.body.velocity *= bc::FRAME_DAMPING;
                    out.frame_hit = true;
                    trace!(x, z, "ball hit the goal frame");
                }
            }
        }

        out
    }

    fn follow_grabber(&mut self, teams: &[Team; 2]) {
        let id = self
            .grabber
            .unwrap_or_else(|| panic!("ball grabbed without a grabber"));
        let holder = teams[id.side.index()]
            .player(id.index)
            .unwrap_or_else(|| panic!("ball grabbed by unknown player {id:?}"));

        self.body.acceleration.set_zero();
        self.body.velocity = *holder.velocity();
        self.body.position = *holder.position();
        self.body.position.v.z += bc::GROUND_CLEARANCE_M;
    }
}
