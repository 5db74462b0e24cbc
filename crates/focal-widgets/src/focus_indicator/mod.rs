//! Camera focus indicator widget.
//!
//! A tap on the widget drops a ring at the touch point that shrinks from
//! `max_radius` toward `min_radius` while the host runs autofocus. The host
//! reports the outcome with [`FocusIndicator::report_success`] or
//! [`FocusIndicator::report_failure`]; the ring turns green or red, finishes
//! shrinking, holds for a moment and disappears. A long press instead
//! notifies the listener registered with
//! [`FocusIndicator::set_on_long_touch`].
//!
//! The widget is single-threaded. Its timers live in a private queue driven
//! by [`FocusIndicator::advance`]; the host calls it from its event loop.
//!
//! ```
//! use focal_core::{Event, Point, Rect, TouchId, Widget};
//! use focal_widgets::{FocusIndicator, FocusState};
//!
//! let mut focus = FocusIndicator::new();
//! focus.layout(Rect::new(0.0, 0.0, 480.0, 800.0));
//!
//! let at = Point::new(240.0, 400.0);
//! focus.event(&Event::TouchStart { id: TouchId(0), position: at, pressure: 1.0 });
//! focus.advance(80);
//! focus.event(&Event::TouchEnd { id: TouchId(0), position: at });
//! assert_eq!(focus.state(), FocusState::Focusing);
//!
//! focus.report_success();
//! focus.advance(2_000);
//! assert_eq!(focus.state(), FocusState::Idle);
//! ```

mod config;
mod driver;
mod gesture;
mod render;

pub use config::FocusConfig;
pub use driver::{AnimationDriver, FocusTimer};
pub use gesture::{GestureSession, TapRecognizer, TouchIntent};
pub use render::{circle_for, clamp_center, state_color, Circle};

use crate::error::ConfigError;
use focal_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, EventOutcome, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Phase of the focus cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FocusState {
    /// Nothing drawn; taps are recognized.
    #[default]
    Idle,
    /// Ring shrinking, waiting for a result.
    Focusing,
    /// Focus succeeded.
    Success,
    /// Focus failed.
    Failed,
}

impl FocusState {
    /// Whether this is success or failure.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

/// Message emitted when a tap starts a focus cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusStarted {
    /// Clamped ring center
    pub center: Point,
}

/// Message emitted when a long press is recognized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongTouch {
    /// Where the press went down
    pub position: Point,
}

/// Callback invoked on long press with the widget that recognized it.
pub type LongTouchListener = Box<dyn FnMut(&FocusIndicator)>;

/// Tap-to-focus ring.
pub struct FocusIndicator {
    config: FocusConfig,
    state: FocusState,
    enabled: bool,
    auto_dismiss: bool,
    detached: bool,
    center: Point,
    bounds: Rect,
    recognizer: TapRecognizer,
    driver: AnimationDriver,
    long_touch: Option<LongTouchListener>,
    needs_repaint: bool,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
}

impl Default for FocusIndicator {
    fn default() -> Self {
        Self::from_valid_config(FocusConfig::default())
    }
}

impl std::fmt::Debug for FocusIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusIndicator")
            .field("state", &self.state)
            .field("radius", &self.driver.radius())
            .field("center", &self.center)
            .field("enabled", &self.enabled)
            .field("auto_dismiss", &self.auto_dismiss)
            .field("detached", &self.detached)
            .field("has_long_touch_listener", &self.long_touch.is_some())
            .finish_non_exhaustive()
    }
}

impl FocusIndicator {
    /// Create an indicator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an indicator with a custom configuration.
    pub fn with_config(config: FocusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: FocusConfig) -> Self {
        Self {
            state: FocusState::Idle,
            enabled: true,
            auto_dismiss: config.auto_dismiss,
            detached: false,
            center: Point::new(config.max_radius as f32, config.max_radius as f32),
            bounds: Rect::default(),
            recognizer: TapRecognizer::new(config.long_press_ms, config.tap_slop),
            driver: AnimationDriver::new(config.max_radius),
            long_touch: None,
            needs_repaint: false,
            accessible_name_value: None,
            test_id_value: None,
            config,
        }
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // === Host controls ===

    /// Gate gesture recognition. A running animation is not interrupted.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            debug!(enabled, "focus input toggled");
        }
        self.enabled = enabled;
        if !enabled {
            self.recognizer.cancel();
        }
    }

    /// Whether gesture recognition is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle whether success/failure clears itself after the hold.
    pub fn set_auto_dismiss(&mut self, auto_dismiss: bool) {
        self.auto_dismiss = auto_dismiss;
        if !auto_dismiss {
            self.driver.disarm_reset();
        } else if self.state.is_terminal()
            && self.driver.at_floor(self.config.min_radius)
            && !self.driver.reset_armed()
            && !self.detached
        {
            self.driver.arm_reset(self.config.hold_ms);
        }
    }

    /// Whether success/failure clears itself.
    #[must_use]
    pub const fn auto_dismiss_enabled(&self) -> bool {
        self.auto_dismiss
    }

    /// Register the long-press callback, replacing any previous one.
    pub fn set_on_long_touch(&mut self, listener: impl FnMut(&Self) + 'static) {
        self.long_touch = Some(Box::new(listener));
    }

    /// Remove the long-press callback.
    pub fn clear_on_long_touch(&mut self) {
        self.long_touch = None;
    }

    /// Report that autofocus succeeded.
    pub fn report_success(&mut self) {
        self.report(FocusState::Success);
    }

    /// Report that autofocus failed.
    pub fn report_failure(&mut self) {
        self.report(FocusState::Failed);
    }

    /// Return to idle immediately, dropping pending timers and any open touch.
    pub fn reset(&mut self) {
        self.driver.cancel_all();
        self.recognizer.cancel();
        if self.state != FocusState::Idle {
            self.transition(FocusState::Idle);
        }
    }

    /// Tear the widget down. Pending timers are cancelled and later clock
    /// advances do nothing.
    pub fn detach(&mut self) {
        let dropped = self.driver.pending();
        self.driver.cancel_all();
        self.recognizer.cancel();
        self.detached = true;
        debug!(dropped, "focus indicator detached");
    }

    /// Whether [`Self::detach`] has been called.
    #[must_use]
    pub const fn is_detached(&self) -> bool {
        self.detached
    }

    // === Clock ===

    /// Current clock time in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.driver.now_ms()
    }

    /// Advance the clock by `delta_ms`, firing due timers in order.
    pub fn advance(&mut self, delta_ms: u64) {
        self.advance_to(self.now_ms().saturating_add(delta_ms));
    }

    /// Advance the clock to `now_ms`, firing due timers in order.
    pub fn advance_to(&mut self, now_ms: u64) {
        if self.detached {
            return;
        }
        while let Some(timer) = self.driver.pop_due(now_ms) {
            match timer {
                FocusTimer::Tick => self.on_tick(),
                FocusTimer::Reset => self.on_hold_elapsed(),
            }
        }
        self.driver.set_now(now_ms);
    }

    /// Earliest time at which a timer will fire.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.driver.next_deadline()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.driver.pending()
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub const fn state(&self) -> FocusState {
        self.state
    }

    /// Current ring radius.
    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.driver.radius()
    }

    /// Ring center for the current (or last) focus cycle.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FocusConfig {
        &self.config
    }

    /// The ring to draw, or `None` while idle.
    #[must_use]
    pub fn circle(&self) -> Option<Circle> {
        circle_for(self.state, self.center, self.driver.radius(), &self.config)
    }

    /// Whether the widget is currently classifying touches.
    #[must_use]
    pub const fn is_recognizing(&self) -> bool {
        self.enabled && !self.detached && matches!(self.state, FocusState::Idle)
    }

    /// Whether a repaint has been requested.
    #[must_use]
    pub const fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Consume the pending repaint request.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    // === Internals ===

    fn invalidate(&mut self) {
        self.needs_repaint = true;
    }

    fn transition(&mut self, next: FocusState) {
        debug!(from = ?self.state, to = ?next, radius = self.driver.radius(), "focus state transition");
        self.state = next;
        self.invalidate();
    }

    fn report(&mut self, outcome: FocusState) {
        if self.detached {
            return;
        }
        if self.state == FocusState::Idle {
            debug!(?outcome, "focus result ignored while idle");
            return;
        }
        self.transition(outcome);
        if self.driver.at_floor(self.config.min_radius) {
            // The shrink has already parked; run the driver now so it arms
            // (or re-arms) the hold.
            self.driver.disarm_reset();
            self.driver.schedule_tick(0);
        }
    }

    fn start_focus(&mut self, touch: Point) {
        self.center = clamp_center(touch, self.bounds, &self.config);
        self.driver
            .start(self.config.max_radius, self.config.tick_interval_ms);
        self.transition(FocusState::Focusing);
    }

    fn on_tick(&mut self) {
        if self.state == FocusState::Idle {
            return;
        }
        if !self.driver.at_floor(self.config.min_radius) {
            self.driver
                .shrink(self.config.step_px, self.config.min_radius);
            self.invalidate();
            self.driver.schedule_tick(self.config.tick_interval_ms);
        } else if self.state.is_terminal() && self.auto_dismiss {
            debug!(hold_ms = self.config.hold_ms, "hold armed");
            self.driver.arm_reset(self.config.hold_ms);
        }
    }

    fn on_hold_elapsed(&mut self) {
        if self.state.is_terminal() {
            self.transition(FocusState::Idle);
        }
    }

    fn notify_long_touch(&mut self) {
        if let Some(mut listener) = self.long_touch.take() {
            listener(&*self);
            self.long_touch = Some(listener);
        }
    }
}

impl Widget for FocusIndicator {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let diameter = 2.0 * self.config.edge_margin();
        constraints.fill_or(Size::new(diameter, diameter))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(circle) = self.circle() {
            circle.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> EventOutcome {
        if let Event::Resize { width, height } = *event {
            let usable = |v: f32| v.is_finite() && v >= 0.0;
            if usable(width) && usable(height) {
                self.bounds = Rect::new(self.bounds.x, self.bounds.y, width, height);
            } else {
                debug!(width, height, "ignoring resize to unusable size");
            }
            return EventOutcome::Ignored;
        }

        let Some(input) = event.pointer_input() else {
            return EventOutcome::Ignored;
        };
        if !self.is_recognizing() {
            self.recognizer.cancel();
            return EventOutcome::Ignored;
        }

        match self.recognizer.on_input(input, self.now_ms()) {
            Some(TouchIntent::Tap { position }) => {
                self.start_focus(position);
                EventOutcome::Message(Box::new(FocusStarted {
                    center: self.center,
                }))
            }
            Some(TouchIntent::LongPress { position }) => {
                self.notify_long_touch();
                EventOutcome::Message(Box::new(LongTouch { position }))
            }
            Some(TouchIntent::Rejected { .. }) | None => EventOutcome::Consumed,
        }
    }

    fn is_interactive(&self) -> bool {
        self.is_recognizing()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Status
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
