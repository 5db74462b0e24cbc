//! Box constraints passed to [`crate::Widget::measure`].

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Smallest and largest size a widget may report.
///
/// Either bound of `max` may be infinite when the parent does not limit that
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Lower bound
    pub min: Size,
    /// Upper bound, possibly infinite per axis
    pub max: Size,
}

impl Constraints {
    /// Constraints between `min` and `max`.
    #[must_use]
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Exactly `size`.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Anything from zero up to `size`.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(Size::ZERO, size)
    }

    /// No upper bound on either axis.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(Size::ZERO, Size::new(f32::INFINITY, f32::INFINITY))
    }

    /// Clamp `size` into range.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }

    /// Fill every bounded axis; use `fallback` (clamped) on unbounded ones.
    #[must_use]
    pub fn fill_or(&self, fallback: Size) -> Size {
        let width = if self.max.width.is_finite() {
            self.max.width
        } else {
            fallback.width
        };
        let height = if self.max.height.is_finite() {
            self.max.height
        } else {
            fallback.height
        };
        self.constrain(Size::new(width, height))
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_or_uses_fallback_on_open_axis() {
        let c = Constraints::new(Size::ZERO, Size::new(300.0, f32::INFINITY));
        assert_eq!(c.fill_or(Size::new(166.0, 166.0)), Size::new(300.0, 166.0));
    }

    #[test]
    fn test_fill_or_respects_minimum() {
        let c = Constraints::new(Size::new(0.0, 200.0), Size::new(100.0, f32::INFINITY));
        assert_eq!(c.fill_or(Size::new(50.0, 50.0)), Size::new(100.0, 200.0));
    }

    #[test]
    fn test_tight_ignores_fallback() {
        let c = Constraints::tight(Size::new(4.0, 8.0));
        assert_eq!(c.fill_or(Size::ZERO), Size::new(4.0, 8.0));
    }
}
