//! Cubic Bezier geometry for vessel walls
//!
//! A wall curve has two fixed anchors and one moving control point. The
//! control point is duplicated into both middle slots of the cubic, so the
//! curve bulges symmetrically around it as it moves.

use glam::Vec2;

/// A cubic Bezier with the middle control point duplicated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Fixed start anchor
    pub anchor1: Vec2,
    /// Moving control point (occupies both middle slots)
    pub control: Vec2,
    /// Fixed end anchor
    pub anchor2: Vec2,
}

impl CubicBezier {
    pub fn new(anchor1: Vec2, control: Vec2, anchor2: Vec2) -> Self {
        Self {
            anchor1,
            control,
            anchor2,
        }
    }

    /// Ordered control polygon, with the control point duplicated
    #[inline]
    pub fn control_points(&self) -> [Vec2; 4] {
        [self.anchor1, self.control, self.control, self.anchor2]
    }

    /// Evaluate the curve at parameter `t` by repeated linear interpolation
    /// (de Casteljau). Produces the same point as direct cubic evaluation.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.control_points();
        let a = p0.lerp(p1, t);
        let b = p1.lerp(p2, t);
        let c = p2.lerp(p3, t);
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        d.lerp(e, t)
    }

    /// Sample the curve at `resolution` evenly spaced parameters,
    /// t_i = i/resolution for i in 0..resolution. t = 1 is never included.
    pub fn sample(&self, resolution: usize) -> Vec<Vec2> {
        (0..resolution)
            .map(|i| self.point_at(i as f32 / resolution as f32))
            .collect()
    }
}
