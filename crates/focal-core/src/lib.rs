//! Core types and traits for the Focal focus indicator.
//!
//! This crate provides foundational types used by the widget and host crates:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex (de)serialization
//! - Layout constraints: [`Constraints`]
//! - Events: [`Event`] and the single-contact [`PointerInput`] view
//! - Rendering: [`Widget`], [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Scheduling: [`TimerQueue`], a per-owner delayed-callback queue

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod timer;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, StrokeStyle};
pub use event::{
    ContactId, Event, MouseButton, PointerId, PointerInput, PointerType, TouchId,
};
pub use geometry::{Point, Rect, Size};
pub use timer::{DueTimer, TimerHandle, TimerQueue};
pub use widget::{
    AccessibleRole, Canvas, EventOutcome, LayoutResult, TypeId, Widget,
};
