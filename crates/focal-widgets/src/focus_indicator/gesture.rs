//! Tap / long-press recognition for a single contact.
//!
//! A session opens on pointer-down and is classified only on pointer-up:
//! movement in between is not inspected, so a drag that returns to its
//! starting point still counts as a tap.

use focal_core::{ContactId, Point, PointerInput};
use tracing::debug;

/// Transient record of an open touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Contact that opened the session.
    pub contact: ContactId,
    /// Clock time of pointer-down.
    pub down_ms: u64,
    /// Position of pointer-down.
    pub down_point: Point,
}

impl GestureSession {
    /// Time held so far.
    #[must_use]
    pub const fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.down_ms)
    }
}

/// What a completed touch meant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchIntent {
    /// Short press: focus at the down point.
    Tap {
        /// Where the touch went down
        position: Point,
    },
    /// Press held past the threshold.
    LongPress {
        /// Where the touch went down
        position: Point,
    },
    /// The contact travelled too far between down and up.
    Rejected {
        /// Horizontal travel
        dx: f32,
        /// Vertical travel
        dy: f32,
    },
}

/// Classifies down/up pairs into taps and long presses.
#[derive(Debug, Clone)]
pub struct TapRecognizer {
    long_press_ms: u64,
    tap_slop: f32,
    session: Option<GestureSession>,
}

impl TapRecognizer {
    /// Create a recognizer with the given thresholds.
    #[must_use]
    pub const fn new(long_press_ms: u64, tap_slop: f32) -> Self {
        Self {
            long_press_ms,
            tap_slop,
            session: None,
        }
    }

    /// The open session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Whether a touch is currently down.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Drop the open session without classifying it.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Feed one input at clock time `now_ms`.
    ///
    /// Returns an intent only when a session completes. Inputs from a second
    /// contact while one is already down are ignored.
    pub fn on_input(&mut self, input: PointerInput, now_ms: u64) -> Option<TouchIntent> {
        match input {
            PointerInput::Down { contact, position } => {
                if self.session.is_some_and(|s| s.contact != contact) {
                    return None;
                }
                self.session = Some(GestureSession {
                    contact,
                    down_ms: now_ms,
                    down_point: position,
                });
                None
            }
            PointerInput::Move { .. } => None,
            PointerInput::Up { contact, position } => {
                let session = self.session.filter(|s| s.contact == contact)?;
                self.session = None;
                Some(self.classify(&session, position, now_ms))
            }
            PointerInput::Cancel { contact } => {
                if self.session.is_some_and(|s| s.contact == contact) {
                    self.session = None;
                }
                None
            }
        }
    }

    /// Decide what a session ending at `up_point` meant.
    #[must_use]
    pub fn classify(&self, session: &GestureSession, up_point: Point, now_ms: u64) -> TouchIntent {
        let (dx, dy) = session.down_point.abs_delta(&up_point);
        if dx >= self.tap_slop || dy >= self.tap_slop {
            debug!(dx, dy, slop = self.tap_slop, "touch rejected as drag");
            return TouchIntent::Rejected { dx, dy };
        }

        let held = session.elapsed_ms(now_ms);
        if held > self.long_press_ms {
            debug!(held, "long press recognized");
            TouchIntent::LongPress {
                position: session.down_point,
            }
        } else {
            debug!(held, "tap recognized");
            TouchIntent::Tap {
                position: session.down_point,
            }
        }
    }
}
