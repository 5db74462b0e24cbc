//! Draw commands.
//!
//! Painting reduces to stroked circles.

use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Outline color and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// A single rendering primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Ring
    Circle {
        /// Center point
        center: Point,
        /// Radius to the middle of the stroke
        radius: f32,
        /// Outline
        stroke: StrokeStyle,
    },
}

impl DrawCommand {
    /// A ring.
    #[must_use]
    pub const fn stroked_circle(center: Point, radius: f32, stroke: StrokeStyle) -> Self {
        Self::Circle {
            center,
            radius,
            stroke,
        }
    }

    /// Outline used by this command.
    #[must_use]
    pub const fn stroke(&self) -> StrokeStyle {
        match *self {
            Self::Circle { stroke, .. } => stroke,
        }
    }
}
