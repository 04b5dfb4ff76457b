use std::f64::consts::{PI, TAU};

use crate::animation::state::State;
use crate::foundation::core::{Canvas, Point};

/// Screen placement of the chain: nodes sit in equal columns across the canvas, vertically
/// centred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeLayout {
    gap: f64,
    center_y: f64,
    radius: f64,
    line_width: f64,
}

impl NodeLayout {
    /// Layout of `nodes` nodes on `canvas`.
    pub fn new(canvas: Canvas, nodes: usize) -> Self {
        let gap = canvas.w() / nodes.max(1) as f64;
        let radius = gap.min(canvas.h()) / 3.0;
        let line_width = (canvas.w().min(canvas.h()) / 60.0).max(1.0);
        Self {
            gap,
            center_y: canvas.h() / 2.0,
            radius,
            line_width,
        }
    }

    /// Width of one node column.
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Centre of node `index`.
    pub fn center(&self, index: usize) -> Point {
        Point::new(self.gap * index as f64 + self.gap / 2.0, self.center_y)
    }

    /// Radius of the bounding circle; arms have the same length.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Shared stroke width.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }
}

/// Rotation of arm `arm` for a node in `state`.
///
/// Arms rest `2π / factor` apart; a finished step turns every arm by half that spacing, so four
/// arms go from a "+" to an "×". Each arm follows its own clamped progress.
pub fn arm_angle(state: &State, arm: usize) -> f64 {
    let factor = state.factor() as f64;
    arm as f64 * (TAU / factor) + state.arm_progress(arm) * (PI / factor)
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
