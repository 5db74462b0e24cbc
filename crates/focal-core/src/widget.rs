//! Widget and canvas traits.
//!
//! A host drives each widget through measure, layout and paint, and forwards
//! input to [`Widget::event`]. The returned [`EventOutcome`] tells the host
//! whether to run its own default handling.
//!
//! ```
//! use focal_core::{EventOutcome, TypeId};
//!
//! #[derive(Debug, PartialEq)]
//! struct Pressed;
//!
//! let outcome = EventOutcome::Message(Box::new(Pressed));
//! assert!(outcome.is_consumed());
//! assert_eq!(outcome.message::<Pressed>(), Some(&Pressed));
//! assert!(!EventOutcome::Ignored.is_consumed());
//! assert_ne!(TypeId::of::<Pressed>(), TypeId::of::<u8>());
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Identifies a widget's concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Type ID of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Size a widget settled on during layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Final size
    pub size: Size,
}

/// What a widget did with an event.
#[derive(Debug, Default)]
pub enum EventOutcome {
    /// Not handled; the host should apply its default handling.
    #[default]
    Ignored,
    /// Handled without producing a message.
    Consumed,
    /// Handled and produced a message for the host.
    Message(Box<dyn Any + Send>),
}

impl EventOutcome {
    /// Whether the widget took the event.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Downcast the carried message, if any.
    #[must_use]
    pub fn message<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Message(msg) => msg.downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// A paintable, interactive element.
pub trait Widget {
    /// Concrete type of this widget.
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept the bounds the host assigned.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Paint the current frame.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle one input event.
    fn event(&mut self, event: &Event) -> EventOutcome;

    /// Whether input currently does anything.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Name announced by screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Role announced by screen readers.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Stable identifier for test harnesses.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Paint target handed to [`Widget::paint`].
pub trait Canvas {
    /// Stroke a ring.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Button
    Button,
    /// Live status region
    Status,
    /// Decorative image
    Image,
}
