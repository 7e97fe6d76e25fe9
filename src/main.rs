//! Hemoflow entry point
//!
//! Headless renderer/clock collaborator: drives the simulation at a fixed
//! frame cadence and logs aggregate stats. A graphical front end would
//! implement `render::Canvas` and hand it to `draw_frame` instead of the
//! null canvas used here.

use std::time::{SystemTime, UNIX_EPOCH};

use hemoflow::render::{NullCanvas, draw_frame};
use hemoflow::sim::{SimState, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    // Default run length: one minute of simulated time at 60 fps.
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);

    log::info!("hemoflow starting (seed {seed}, {frames} frames)");

    let mut state = SimState::new(seed);
    let mut canvas = NullCanvas;

    for _ in 0..frames {
        tick(&mut state);
        draw_frame(&state, &mut canvas);

        if state.frame.is_multiple_of(60) {
            log::info!(
                "frame {:5}  cells {:3}  squished {}  exited {}  widening {}",
                state.frame,
                state.field.len(),
                state.squished_total,
                state.exited_total,
                state.clamp_phase.reversed(),
            );
        }
    }

    log::info!(
        "done: spawned {} cells, squished {}, exited {}, {} still in the vessel",
        state.spawned_total,
        state.squished_total,
        state.exited_total,
        state.field.len(),
    );
}
