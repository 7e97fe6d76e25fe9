//! Per-frame simulation step
//!
//! The external renderer/clock calls `tick` once per frame. Walls advance
//! strictly before particles so every particle reads current-frame wall
//! geometry.

use super::state::SimState;
use crate::consts::{SPAWN_BATCH, SPAWN_INTERVAL};

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState) {
    state.frame += 1;

    state.upper_wall.advance(&mut state.clamp_phase);
    state.lower_wall.advance(&mut state.clamp_phase);

    // Heartbeat: a fresh burst of cells at the inlet every 30th frame.
    if state.frame.is_multiple_of(SPAWN_INTERVAL) {
        state.spawn_batch();
        log::debug!("heartbeat at frame {}: spawned {SPAWN_BATCH} cells", state.frame);
    }

    let stats = state.field.tick(&state.upper_wall, &state.lower_wall);
    state.squished_total += stats.squished as u64;
    state.exited_total += stats.exited as u64;
    if stats.squished > 0 {
        log::debug!("frame {}: {} cells squished", state.frame, stats.squished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CLAMP_STEP;

    #[test]
    fn test_heartbeat_spawn_cadence() {
        let mut state = SimState::new(5);
        assert_eq!(state.field.len(), SPAWN_BATCH);

        for _ in 0..29 {
            tick(&mut state);
        }
        assert_eq!(state.spawned_total, SPAWN_BATCH as u64);

        tick(&mut state); // frame 30
        assert_eq!(state.spawned_total, 2 * SPAWN_BATCH as u64);

        for _ in 0..30 {
            tick(&mut state);
        }
        assert_eq!(state.spawned_total, 3 * SPAWN_BATCH as u64);
    }

    #[test]
    fn test_walls_advance_every_tick() {
        let mut state = SimState::new(5);
        let upper_before = state.upper_wall.curve().control.y;
        let lower_before = state.lower_wall.curve().control.y;

        tick(&mut state);

        assert!((state.upper_wall.curve().control.y - (upper_before + CLAMP_STEP)).abs() < 1e-5);
        assert!((state.lower_wall.curve().control.y - (lower_before - CLAMP_STEP)).abs() < 1e-5);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = SimState::new(99999);
        let mut state2 = SimState::new(99999);

        for _ in 0..120 {
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.field.particles(), state2.field.particles());
        assert_eq!(state1.squished_total, state2.squished_total);
        assert_eq!(state1.exited_total, state2.exited_total);
    }
}
