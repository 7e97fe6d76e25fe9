//! Hemoflow - an arterial blood-flow particle simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vessel walls, particles, clamping)
//! - `render`: Drawing seam for an external renderer/clock
//!
//! Blood cells travel through a vessel bounded by two cubic-Bezier walls.
//! The walls clamp (narrow) and declamp (widen) over time; particles detect
//! proximity to a wall against its discretized sample set and reflect off
//! the local tangent.

pub mod render;
pub mod sim;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Canvas dimensions (square viewport)
    pub const CANVAS_W: f32 = 800.0;
    pub const CANVAS_H: f32 = 800.0;

    /// Number of sample points per wall curve
    pub const WALL_RESOLUTION: usize = 200;
    /// Sample index probed by the clamp state machine (t = 0.5)
    pub const CLAMP_PROBE_INDEX: usize = 100;

    /// Upper wall anchor/control y at rest
    pub const UPPER_ANCHOR_Y: f32 = 300.0;
    /// Lower wall anchor/control y at rest
    pub const LOWER_ANCHOR_Y: f32 = 500.0;
    /// Mid-vessel x of the moving control point
    pub const CONTROL_X: f32 = 400.0;

    /// Control-point movement per tick while clamping or declamping
    pub const CLAMP_STEP: f32 = 0.2;
    /// Lower wall probe y below this flips the shared phase to widening
    pub const CLAMP_REVERSAL_Y: f32 = 400.0;
    /// Widening stops once the lower wall probe passes back above this
    pub const LOWER_WIDEN_LIMIT_Y: f32 = 500.0;
    /// Widening stops once the upper wall probe passes back below this
    pub const UPPER_WIDEN_LIMIT_Y: f32 = 300.0;

    /// Wall-contact window on the x axis
    pub const CONTACT_RANGE_X: f32 = 4.0;
    /// Wall-contact window on the y axis
    pub const CONTACT_RANGE_Y: f32 = 7.0;
    /// Vessel width below which a contacting particle is squished
    pub const SQUISH_WIDTH: f32 = 12.0;

    /// Particles emitted per heartbeat
    pub const SPAWN_BATCH: usize = 5;
    /// Frames between heartbeats (60 fps, 120 bpm)
    pub const SPAWN_INTERVAL: u64 = 30;
    /// Spawn y range at the vessel inlet (x = 0)
    pub const SPAWN_Y_MIN: f32 = 335.0;
    pub const SPAWN_Y_MAX: f32 = 465.0;
    /// Spawn velocity component ranges (min, max)
    pub const SPAWN_VEL_X: (f32, f32) = (0.5, 1.0);
    pub const SPAWN_VEL_Y: (f32, f32) = (-0.5, 1.0);
    /// Spawn acceleration component ranges (min, max)
    pub const SPAWN_ACC_X: (f32, f32) = (0.005, 0.01);
    pub const SPAWN_ACC_Y: (f32, f32) = (-0.005, 0.005);

    /// Particle draw diameter
    pub const PARTICLE_DIAMETER: f32 = 12.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
///
/// Used to rebuild a vector from a preserved magnitude and a new heading
/// after reflection.
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
