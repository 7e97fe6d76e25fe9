//! Deterministic simulation module
//!
//! All vessel and particle logic lives here. This module must be pure and
//! deterministic:
//! - Fixed per-frame steps only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The external renderer/clock drives one `tick` per frame; walls always
//! advance before particles so particles read current-frame geometry.

pub mod bezier;
pub mod field;
pub mod particle;
pub mod state;
pub mod tick;
pub mod wall;

pub use bezier::CubicBezier;
pub use field::{ParticleField, RemovalStats};
pub use particle::{Particle, reflect};
pub use state::SimState;
pub use tick::tick;
pub use wall::{ClampPhase, ClampSide, Wall};
