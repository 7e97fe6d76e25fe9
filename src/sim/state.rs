//! Whole-simulation state
//!
//! Everything a run needs lives here: both walls, the shared clamp phase,
//! the particle field, and the seeded RNG. Deterministic for a given seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::field::ParticleField;
use super::wall::{ClampPhase, Wall};
use crate::consts::SPAWN_BATCH;

/// Complete simulation state (deterministic, single-threaded)
#[derive(Debug)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all spawn randomness
    pub rng: Pcg32,
    /// Frames ticked so far; the first ticked frame is 1
    pub frame: u64,
    /// Shared narrowing/widening flag, handed to both walls each tick
    pub clamp_phase: ClampPhase,
    /// Upper vessel boundary (process-lifetime, never recreated)
    pub upper_wall: Wall,
    /// Lower vessel boundary (process-lifetime, never recreated)
    pub lower_wall: Wall,
    /// All live particles
    pub field: ParticleField,
    /// Running totals for observability
    pub spawned_total: u64,
    pub squished_total: u64,
    pub exited_total: u64,
}

impl SimState {
    /// Create a run at rest geometry and emit the initial particle burst
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            clamp_phase: ClampPhase::new(),
            upper_wall: Wall::upper(),
            lower_wall: Wall::lower(),
            field: ParticleField::new(),
            spawned_total: 0,
            squished_total: 0,
            exited_total: 0,
        };
        state.spawn_batch();
        state
    }

    /// Emit one heartbeat's worth of particles at the inlet
    pub fn spawn_batch(&mut self) {
        self.field.spawn(SPAWN_BATCH, &mut self.rng);
        self.spawned_total += SPAWN_BATCH as u64;
    }
}
