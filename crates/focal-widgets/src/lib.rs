//! Widget implementations for the Focal focus indicator.
//!
//! [`FocusIndicator`] is the tap-to-focus ring shown over a camera preview.
//! Its building blocks are public so hosts can reuse them:
//! [`TapRecognizer`] classifies single-contact touches and
//! [`AnimationDriver`] runs the shrinking radius on a virtual clock.

pub mod error;
pub mod focus_indicator;

pub use error::ConfigError;
pub use focus_indicator::{
    circle_for, clamp_center, state_color, AnimationDriver, Circle, FocusConfig, FocusIndicator,
    FocusStarted, FocusState, FocusTimer, GestureSession, LongTouch, LongTouchListener,
    TapRecognizer, TouchIntent,
};
