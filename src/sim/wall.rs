//! Vessel walls and the clamp/declamp state machine
//!
//! Each wall owns a parametric curve (two fixed anchors, one moving control
//! point) and a fixed-resolution sample set regenerated whenever the control
//! point moves. The two walls narrow toward the vessel center until the
//! lower wall's midpoint crosses the reversal threshold, then widen back out
//! to their rest limits. The narrowing-to-widening transition is shared
//! state: whichever wall trips it, both walls switch on their next tick.

use glam::Vec2;

use super::bezier::CubicBezier;
use crate::consts::*;

/// Which vessel boundary a wall forms, and therefore which way it clamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampSide {
    /// Upper boundary; clamps by moving its control point down
    Upper,
    /// Lower boundary; clamps by moving its control point up
    Lower,
}

/// Shared clamp-phase flag, owned by the sim state and handed to both walls
///
/// Flips from narrowing to widening exactly once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampPhase {
    reversed: bool,
}

impl ClampPhase {
    pub fn new() -> Self {
        Self { reversed: false }
    }

    /// True once the narrowing phase has completed and widening begun
    #[inline]
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    fn reverse(&mut self) {
        self.reversed = true;
        log::info!("clamp reversal: vessel walls begin widening");
    }
}

/// One vessel wall: curve, clamp side, and discretized sample set
///
/// Invariant: `samples[i]` is always the curve evaluated at
/// `t = i / WALL_RESOLUTION`.
#[derive(Debug, Clone)]
pub struct Wall {
    curve: CubicBezier,
    side: ClampSide,
    samples: Vec<Vec2>,
}

impl Wall {
    pub fn new(anchor1: Vec2, control: Vec2, anchor2: Vec2, side: ClampSide) -> Self {
        let curve = CubicBezier::new(anchor1, control, anchor2);
        let samples = curve.sample(WALL_RESOLUTION);
        Self {
            curve,
            side,
            samples,
        }
    }

    /// The upper vessel boundary at its rest geometry
    pub fn upper() -> Self {
        Self::new(
            Vec2::new(0.0, UPPER_ANCHOR_Y),
            Vec2::new(CONTROL_X, UPPER_ANCHOR_Y),
            Vec2::new(CANVAS_W, UPPER_ANCHOR_Y),
            ClampSide::Upper,
        )
    }

    /// The lower vessel boundary at its rest geometry
    pub fn lower() -> Self {
        Self::new(
            Vec2::new(0.0, LOWER_ANCHOR_Y),
            Vec2::new(CONTROL_X, LOWER_ANCHOR_Y),
            Vec2::new(CANVAS_W, LOWER_ANCHOR_Y),
            ClampSide::Lower,
        )
    }

    #[inline]
    pub fn side(&self) -> ClampSide {
        self.side
    }

    /// The underlying curve, for the renderer's stroke call
    #[inline]
    pub fn curve(&self) -> &CubicBezier {
        &self.curve
    }

    /// Current sample set, ordered by increasing curve parameter
    #[inline]
    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    /// Advance the clamp state machine by one tick
    ///
    /// The reversal trigger and the widening limit guards return without
    /// moving the control point; the sample-set invariant holds on those
    /// ticks because nothing moved.
    pub fn advance(&mut self, phase: &mut ClampPhase) {
        // Only the lower wall's midpoint arms the shared reversal.
        if self.side == ClampSide::Lower
            && self.samples[CLAMP_PROBE_INDEX].y < CLAMP_REVERSAL_Y
            && !phase.reversed()
        {
            phase.reverse();
            return;
        }

        if !phase.reversed() {
            // Narrowing: both walls converge toward the vessel center.
            match self.side {
                ClampSide::Lower => self.curve.control.y -= CLAMP_STEP,
                ClampSide::Upper => self.curve.control.y += CLAMP_STEP,
            }
        } else {
            // Widening: move back out, stopping at the rest limits.
            let probe_y = self.samples[CLAMP_PROBE_INDEX].y;
            match self.side {
                ClampSide::Lower if probe_y > LOWER_WIDEN_LIMIT_Y => return,
                ClampSide::Upper if probe_y < UPPER_WIDEN_LIMIT_Y => return,
                ClampSide::Lower => self.curve.control.y += CLAMP_STEP,
                ClampSide::Upper => self.curve.control.y -= CLAMP_STEP,
            }
        }

        self.samples = self.curve.sample(WALL_RESOLUTION);
    }

    /// Discretized tangent direction at a sample index
    ///
    /// `samples[index + 1] - samples[index]`, or (1, 1) past the end of the
    /// sample set. Never normalized here; callers normalize as needed.
    pub fn tangent_at(&self, index: usize) -> Vec2 {
        match (self.samples.get(index), self.samples.get(index + 1)) {
            (Some(&p1), Some(&p2)) => p2 - p1,
            _ => Vec2::ONE,
        }
    }
}
