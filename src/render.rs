//! Drawing seam between the simulation core and an external renderer
//!
//! The core never draws; it only exposes geometry. A front end implements
//! `Canvas` with whatever backend it has (2D canvas, GPU, terminal) and the
//! clock calls `draw_frame` once per frame after `tick`.

use glam::Vec2;

use crate::consts::PARTICLE_DIAMETER;
use crate::sim::SimState;

/// Primitive surface the external renderer provides
pub trait Canvas {
    /// Stroke a cubic Bezier through four control points
    fn stroke_bezier(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2);
    /// Stroke a circle outline of the given diameter
    fn stroke_circle(&mut self, center: Vec2, diameter: f32);
}

/// Draw both wall curves and one circle per live particle
pub fn draw_frame(state: &SimState, canvas: &mut impl Canvas) {
    for wall in [&state.upper_wall, &state.lower_wall] {
        let [p0, p1, p2, p3] = wall.curve().control_points();
        canvas.stroke_bezier(p0, p1, p2, p3);
    }
    for particle in state.field.particles() {
        canvas.stroke_circle(particle.position, PARTICLE_DIAMETER);
    }
}

/// Canvas that discards every primitive (headless runs)
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn stroke_bezier(&mut self, _p0: Vec2, _p1: Vec2, _p2: Vec2, _p3: Vec2) {}
    fn stroke_circle(&mut self, _center: Vec2, _diameter: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimState;

    #[derive(Default)]
    struct CountingCanvas {
        beziers: usize,
        circles: usize,
    }

    impl Canvas for CountingCanvas {
        fn stroke_bezier(&mut self, _p0: Vec2, p1: Vec2, p2: Vec2, _p3: Vec2) {
            // The moving control point occupies both middle slots
            assert_eq!(p1, p2);
            self.beziers += 1;
        }

        fn stroke_circle(&mut self, _center: Vec2, diameter: f32) {
            assert_eq!(diameter, PARTICLE_DIAMETER);
            self.circles += 1;
        }
    }

    #[test]
    fn test_draw_frame_emits_walls_and_particles() {
        let state = SimState::new(7);
        let mut canvas = CountingCanvas::default();

        draw_frame(&state, &mut canvas);

        assert_eq!(canvas.beziers, 2);
        assert_eq!(canvas.circles, state.field.len());
    }
}
