//! Error types for focal-widgets.

use focal_core::ColorParseError;
use thiserror::Error;

/// Errors raised while building or loading a focus indicator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Minimum radius exceeds maximum radius.
    #[error("invalid radius range: min {min} is greater than max {max}")]
    InvalidRadius {
        /// Configured minimum radius
        min: u32,
        /// Configured maximum radius
        max: u32,
    },

    /// The animation would never shrink.
    #[error("animation step must be at least 1px")]
    ZeroStep,

    /// The animation would tick without time passing.
    #[error("tick interval must be at least 1ms")]
    ZeroTickInterval,

    /// Stroke width is negative or not finite.
    #[error("invalid stroke width: {0}")]
    InvalidStrokeWidth(f32),

    /// Tap tolerance is not a positive finite distance.
    #[error("invalid tap slop: {0}")]
    InvalidTapSlop(f32),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),

    /// TOML input could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written as TOML.
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
