//! Canvas that records instead of rasterizing.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::widget::Canvas;
use crate::{Color, Point};

/// Captures every paint call as a [`DrawCommand`].
///
/// Tests assert on the commands; hosts without a renderer print them.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the canvas empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Rings painted so far, as `(center, radius, stroke)`.
    pub fn rings(&self) -> impl Iterator<Item = (Point, f32, StrokeStyle)> + '_ {
        self.commands.iter().map(|cmd| match *cmd {
            DrawCommand::Circle {
                center,
                radius,
                stroke,
            } => (center, radius, stroke),
        })
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::stroked_circle(
            center,
            radius,
            StrokeStyle { color, width },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.len(), 0);
    }

    #[test]
    fn test_recording_canvas_stroke_circle() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_circle(Point::new(50.0, 60.0), 20.0, Color::GREEN, 3.0);

        let rings: Vec<_> = canvas.rings().collect();
        assert_eq!(
            rings,
            vec![(
                Point::new(50.0, 60.0),
                20.0,
                StrokeStyle {
                    color: Color::GREEN,
                    width: 3.0
                }
            )]
        );
    }

    #[test]
    fn test_rings_in_paint_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_circle(Point::ORIGIN, 8.0, Color::RED, 2.0);
        canvas.stroke_circle(Point::ORIGIN, 4.0, Color::WHITE, 1.0);
        let radii: Vec<_> = canvas.rings().map(|(_, r, _)| r).collect();
        assert_eq!(canvas.len(), 2);
        assert_eq!(radii, vec![8.0, 4.0]);
    }

    #[test]
    fn test_take_commands_empties_canvas() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_circle(Point::ORIGIN, 1.0, Color::WHITE, 1.0);
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
    }
}
