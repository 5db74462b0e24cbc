//! Focus indicator configuration.

use crate::error::ConfigError;
use focal_core::Color;
use serde::{Deserialize, Serialize};

/// Geometry, colors and timing of a [`super::FocusIndicator`].
///
/// Every field has a default, so a TOML file only needs the values it
/// changes:
///
/// ```
/// use focal_widgets::FocusConfig;
///
/// let config = FocusConfig::from_toml_str("max_radius = 120\nhold_ms = 800").unwrap();
/// assert_eq!(config.max_radius, 120);
/// assert_eq!(config.min_radius, 50);
/// assert_eq!(config.hold_ms, 800);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FocusConfig {
    /// Radius the ring shrinks to, in pixels.
    pub min_radius: u32,
    /// Radius the ring starts at, in pixels.
    pub max_radius: u32,
    /// Ring stroke width, in pixels.
    pub stroke_width: f32,
    /// Ring color while focusing.
    pub normal_color: Color,
    /// Ring color after a successful focus.
    pub success_color: Color,
    /// Ring color after a failed focus.
    pub failure_color: Color,
    /// Press duration above which a touch counts as a long press.
    pub long_press_ms: u64,
    /// Per-axis movement below which a touch still counts as a tap.
    pub tap_slop: f32,
    /// Pixels removed from the radius on every tick.
    pub step_px: u32,
    /// Time between animation ticks.
    pub tick_interval_ms: u64,
    /// How long a success/failure ring stays up before clearing.
    pub hold_ms: u64,
    /// Whether success/failure clears itself after `hold_ms`.
    pub auto_dismiss: bool,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            min_radius: 50,
            max_radius: 80,
            stroke_width: 3.0,
            normal_color: Color::WHITE,
            success_color: Color::GREEN,
            failure_color: Color::RED,
            long_press_ms: 500,
            tap_slop: 10.0,
            step_px: 2,
            tick_interval_ms: 20,
            hold_ms: 500,
            auto_dismiss: true,
        }
    }
}

impl FocusConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check the invariants the animation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_radius > self.max_radius {
            return Err(ConfigError::InvalidRadius {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if self.step_px == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width));
        }
        if !self.tap_slop.is_finite() || self.tap_slop <= 0.0 {
            return Err(ConfigError::InvalidTapSlop(self.tap_slop));
        }
        Ok(())
    }

    /// Set both radii.
    #[must_use]
    pub const fn radii(mut self, min: u32, max: u32) -> Self {
        self.min_radius = min;
        self.max_radius = max;
        self
    }

    /// Set the stroke width.
    #[must_use]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    /// Set the focusing, success and failure colors.
    #[must_use]
    pub const fn colors(mut self, normal: Color, success: Color, failure: Color) -> Self {
        self.normal_color = normal;
        self.success_color = success;
        self.failure_color = failure;
        self
    }

    /// Set the long-press threshold.
    #[must_use]
    pub const fn long_press_ms(mut self, ms: u64) -> Self {
        self.long_press_ms = ms;
        self
    }

    /// Set the tap tolerance.
    #[must_use]
    pub fn tap_slop(mut self, slop: f32) -> Self {
        self.tap_slop = slop.max(1.0);
        self
    }

    /// Set the per-tick radius step.
    #[must_use]
    pub fn step_px(mut self, step: u32) -> Self {
        self.step_px = step.max(1);
        self
    }

    /// Set the tick interval.
    #[must_use]
    pub fn tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms.max(1);
        self
    }

    /// Set the terminal hold duration.
    #[must_use]
    pub const fn hold_ms(mut self, ms: u64) -> Self {
        self.hold_ms = ms;
        self
    }

    /// Set whether terminal states clear themselves.
    #[must_use]
    pub const fn auto_dismiss(mut self, on: bool) -> Self {
        self.auto_dismiss = on;
        self
    }

    /// Margin the ring needs from every edge of the widget.
    #[must_use]
    pub fn edge_margin(&self) -> f32 {
        self.max_radius as f32 + self.stroke_width
    }
}
