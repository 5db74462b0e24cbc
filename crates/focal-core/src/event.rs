//! Input events for widgets.
//!
//! Hosts deliver mouse, touch or unified pointer events. Widgets that only
//! care about a single contact can fold all three families into a
//! [`PointerInput`] with [`Event::pointer_input`].

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Window resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
    // Touch events
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
        /// Touch pressure (0.0 to 1.0)
        pressure: f32,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
        /// Touch pressure
        pressure: f32,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled (e.g., palm rejection)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    // Pointer events (unified mouse/touch/pen)
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer cancelled
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Identity of the contact that produced a pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactId {
    /// The (left button of the) mouse
    Mouse,
    /// A touch point
    Touch(TouchId),
    /// A unified pointer
    Pointer(PointerId),
}

/// A single-contact view of a pointer-like event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Contact went down
    Down {
        /// Contact identity
        contact: ContactId,
        /// Position
        position: Point,
    },
    /// Contact moved
    Move {
        /// Contact identity
        contact: ContactId,
        /// Position
        position: Point,
    },
    /// Contact lifted
    Up {
        /// Contact identity
        contact: ContactId,
        /// Position
        position: Point,
    },
    /// Contact was cancelled by the platform
    Cancel {
        /// Contact identity
        contact: ContactId,
    },
}

impl PointerInput {
    /// Identity of the contact.
    #[must_use]
    pub const fn contact(&self) -> ContactId {
        match self {
            Self::Down { contact, .. }
            | Self::Move { contact, .. }
            | Self::Up { contact, .. }
            | Self::Cancel { contact } => *contact,
        }
    }
}

impl Event {
    /// Fold a mouse, touch or pointer event into a [`PointerInput`].
    ///
    /// Only the left mouse button and primary pointers are reported; other
    /// buttons, secondary pointers and non-pointer events yield `None`.
    #[must_use]
    pub fn pointer_input(&self) -> Option<PointerInput> {
        let input = match *self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            } => PointerInput::Down {
                contact: ContactId::Mouse,
                position,
            },
            Self::MouseMove { position } => PointerInput::Move {
                contact: ContactId::Mouse,
                position,
            },
            Self::MouseUp {
                position,
                button: MouseButton::Left,
            } => PointerInput::Up {
                contact: ContactId::Mouse,
                position,
            },
            Self::TouchStart { id, position, .. } => PointerInput::Down {
                contact: ContactId::Touch(id),
                position,
            },
            Self::TouchMove { id, position, .. } => PointerInput::Move {
                contact: ContactId::Touch(id),
                position,
            },
            Self::TouchEnd { id, position } => PointerInput::Up {
                contact: ContactId::Touch(id),
                position,
            },
            Self::TouchCancel { id } => PointerInput::Cancel {
                contact: ContactId::Touch(id),
            },
            Self::PointerDown {
                pointer_id,
                position,
                is_primary: true,
                ..
            } => PointerInput::Down {
                contact: ContactId::Pointer(pointer_id),
                position,
            },
            Self::PointerMove {
                pointer_id,
                position,
                is_primary: true,
                ..
            } => PointerInput::Move {
                contact: ContactId::Pointer(pointer_id),
                position,
            },
            Self::PointerUp {
                pointer_id,
                position,
                is_primary: true,
                ..
            } => PointerInput::Up {
                contact: ContactId::Pointer(pointer_id),
                position,
            },
            Self::PointerCancel { pointer_id } => PointerInput::Cancel {
                contact: ContactId::Pointer(pointer_id),
            },
            _ => return None,
        };
        Some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_left_folds_to_pointer_input() {
        let down = Event::MouseDown {
            position: Point::new(1.0, 2.0),
            button: MouseButton::Left,
        };
        assert_eq!(
            down.pointer_input(),
            Some(PointerInput::Down {
                contact: ContactId::Mouse,
                position: Point::new(1.0, 2.0),
            })
        );
    }

    #[test]
    fn test_mouse_right_is_not_pointer_input() {
        let down = Event::MouseDown {
            position: Point::ORIGIN,
            button: MouseButton::Right,
        };
        assert!(down.pointer_input().is_none());
    }

    #[test]
    fn test_touch_cancel_keeps_identity() {
        let cancel = Event::TouchCancel { id: TouchId(7) };
        let input = cancel.pointer_input().unwrap();
        assert_eq!(input.contact(), ContactId::Touch(TouchId(7)));
        assert!(matches!(input, PointerInput::Cancel { .. }));
    }

    #[test]
    fn test_secondary_pointer_is_filtered() {
        let down = Event::PointerDown {
            pointer_id: PointerId(2),
            pointer_type: PointerType::Touch,
            position: Point::ORIGIN,
            is_primary: false,
        };
        assert!(down.pointer_input().is_none());
    }

    #[test]
    fn test_resize_is_not_pointer_input() {
        let resize = Event::Resize {
            width: 100.0,
            height: 100.0,
        };
        assert!(resize.pointer_input().is_none());
    }
}
