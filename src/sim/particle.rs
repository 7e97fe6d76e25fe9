//! Blood-cell particles and wall reflection
//!
//! The tricky part of the simulation: matching a particle to a wall sample
//! by proximity, then bouncing it off the wall's discretized tangent while
//! keeping its speed and acceleration magnitude continuous across the hit.

use glam::Vec2;
use rand::Rng;

use super::wall::Wall;
use crate::consts::*;
use crate::polar_to_cartesian;

/// Standard reflection about a unit axis: v' = v - 2(v·n)n
#[inline]
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    v - 2.0 * v.dot(normal) * normal
}

/// A blood cell with kinematic state and a squish flag
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Set when the local vessel width drops below the squish threshold;
    /// the field removes the particle at the end of the tick.
    pub squished: bool,
}

impl Particle {
    /// Spawn at the vessel inlet (x = 0) with randomized kinematics
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(0.0, rng.random_range(SPAWN_Y_MIN..SPAWN_Y_MAX)),
            velocity: Vec2::new(
                rng.random_range(SPAWN_VEL_X.0..SPAWN_VEL_X.1),
                rng.random_range(SPAWN_VEL_Y.0..SPAWN_VEL_Y.1),
            ),
            acceleration: Vec2::new(
                rng.random_range(SPAWN_ACC_X.0..SPAWN_ACC_X.1),
                rng.random_range(SPAWN_ACC_Y.0..SPAWN_ACC_Y.1),
            ),
            squished: false,
        }
    }

    /// Advance one tick against current-frame wall geometry
    ///
    /// The wall is chosen by the sign of the vertical velocity. Known
    /// approximation: a particle climbing slower than the walls clamp can be
    /// matched to the wrong wall and appear outside the vessel.
    pub fn update(&mut self, upper: &Wall, lower: &Wall) {
        let (chosen, other) = if self.velocity.y < 0.0 {
            (upper, lower)
        } else {
            (lower, upper)
        };

        let mut bounced = false;
        for (i, point) in chosen.samples().iter().enumerate() {
            if (point.x - self.position.x).abs() <= CONTACT_RANGE_X {
                if (point.y - self.position.y).abs() < CONTACT_RANGE_Y {
                    // Contact. Squish first if the vessel has pinched shut here.
                    let tunnel_width = (point.y - other.samples()[i].y).abs();
                    if tunnel_width < SQUISH_WIDTH {
                        self.squished = true;
                        log::trace!("cell squished at x={:.1} (width {tunnel_width:.2})", point.x);
                    }

                    self.bounce(chosen.tangent_at(i));
                    bounced = true;
                }
                // Only the first x-candidate is ever tested per tick.
                break;
            }
        }

        if !bounced {
            self.velocity += self.acceleration;
            self.position += self.velocity;
        }
    }

    /// Reflect velocity and acceleration off the wall's local tangent
    ///
    /// Reflect the normalized vectors about the tangent axis, negate them
    /// back into the bounce-away sense, then rotate the originals onto the
    /// resulting headings so only direction changes, never magnitude. The
    /// reflected acceleration influences future ticks only; this tick the
    /// position advances by the new velocity alone.
    fn bounce(&mut self, tangent: Vec2) {
        // normalize_or_zero keeps degenerate (zero-length) inputs inert
        // instead of propagating NaN headings.
        let axis = tangent.normalize_or_zero();
        let a = -reflect(self.acceleration.normalize_or_zero(), axis);
        let v = -reflect(self.velocity.normalize_or_zero(), axis);

        self.acceleration = polar_to_cartesian(self.acceleration.length(), a.y.atan2(a.x));
        self.velocity = polar_to_cartesian(self.velocity.length(), v.y.atan2(v.x));
        self.position += self.velocity;
    }
}
