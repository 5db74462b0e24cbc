//! Ring geometry and paint.

use super::config::FocusConfig;
use super::FocusState;
use focal_core::{Canvas, Color, Point, Rect};
use serde::Serialize;

/// The ring drawn for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    /// Ring center
    pub center: Point,
    /// Ring radius in whole pixels
    pub radius: u32,
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub stroke_width: f32,
}

impl Circle {
    /// Emit the ring as a stroked circle.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.stroke_circle(
            self.center,
            self.radius as f32,
            self.color,
            self.stroke_width,
        );
    }
}

/// Stroke color for a state; `None` when nothing is drawn.
#[must_use]
pub fn state_color(state: FocusState, config: &FocusConfig) -> Option<Color> {
    match state {
        FocusState::Idle => None,
        FocusState::Focusing => Some(config.normal_color),
        FocusState::Success => Some(config.success_color),
        FocusState::Failed => Some(config.failure_color),
    }
}

/// The ring for the given state, or `None` while idle.
#[must_use]
pub fn circle_for(
    state: FocusState,
    center: Point,
    radius: u32,
    config: &FocusConfig,
) -> Option<Circle> {
    state_color(state, config).map(|color| Circle {
        center,
        radius,
        color,
        stroke_width: config.stroke_width,
    })
}

/// Move `point` so the widest ring (plus stroke) fits inside `bounds`.
///
/// When `bounds` is too small on an axis, the ring is centered on it.
#[must_use]
pub fn clamp_center(point: Point, bounds: Rect, config: &FocusConfig) -> Point {
    bounds.inset(config.edge_margin()).clamp_point(point)
}
