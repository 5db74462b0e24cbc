//! Radius animation clock.
//!
//! The driver owns the indicator's timer queue and its current radius. It
//! keeps at most one tick and one hold-reset pending at any time: scheduling
//! either again replaces the previous one.

use focal_core::{DueTimer, TimerHandle, TimerQueue};
use tracing::trace;

/// What a timer asks the indicator to do when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTimer {
    /// Advance the shrink animation.
    Tick,
    /// Leave the success/failure hold and go idle.
    Reset,
}

/// Shrinking radius plus its pending timers.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    timers: TimerQueue<FocusTimer>,
    tick: Option<TimerHandle>,
    reset: Option<TimerHandle>,
    radius: u32,
}

impl AnimationDriver {
    /// Create an idle driver resting at `radius`.
    #[must_use]
    pub fn new(radius: u32) -> Self {
        Self {
            timers: TimerQueue::new(),
            tick: None,
            reset: None,
            radius,
        }
    }

    /// Current radius in pixels.
    #[must_use]
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// Current clock time.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now_ms: u64) {
        self.timers.set_now(now_ms);
    }

    /// Restart from `max_radius`, dropping anything pending, and schedule
    /// the first tick.
    pub fn start(&mut self, max_radius: u32, interval_ms: u64) {
        self.cancel_all();
        self.radius = max_radius;
        self.schedule_tick(interval_ms);
    }

    /// Shrink by `step`, never below `min_radius`. Returns whether it moved.
    pub fn shrink(&mut self, step: u32, min_radius: u32) -> bool {
        let next = self.radius.saturating_sub(step).max(min_radius);
        let moved = next != self.radius;
        self.radius = next;
        trace!(radius = self.radius, "radius tick");
        moved
    }

    /// Whether the radius has reached `min_radius`.
    #[must_use]
    pub const fn at_floor(&self, min_radius: u32) -> bool {
        self.radius <= min_radius
    }

    /// Schedule the next tick, replacing any pending one.
    pub fn schedule_tick(&mut self, delay_ms: u64) {
        if let Some(old) = self.tick.take() {
            self.timers.cancel(old);
        }
        self.tick = Some(self.timers.schedule(delay_ms, FocusTimer::Tick));
    }

    /// Arm the hold-reset, replacing any pending one.
    pub fn arm_reset(&mut self, hold_ms: u64) {
        self.disarm_reset();
        self.reset = Some(self.timers.schedule(hold_ms, FocusTimer::Reset));
    }

    /// Cancel the hold-reset, if armed.
    pub fn disarm_reset(&mut self) {
        if let Some(old) = self.reset.take() {
            self.timers.cancel(old);
        }
    }

    /// Whether a hold-reset is pending.
    #[must_use]
    pub const fn reset_armed(&self) -> bool {
        self.reset.is_some()
    }

    /// Whether a tick is pending.
    #[must_use]
    pub const fn tick_pending(&self) -> bool {
        self.tick.is_some()
    }

    /// Cancel everything pending.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
        self.tick = None;
        self.reset = None;
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Take the earliest timer due by `until_ms`, advancing the clock to it.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<FocusTimer> {
        let DueTimer { handle, payload } = self.timers.pop_due(until_ms)?;
        if self.tick == Some(handle) {
            self.tick = None;
        }
        if self.reset == Some(handle) {
            self.reset = None;
        }
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_resets_radius_and_schedules_tick() {
        let mut driver = AnimationDriver::new(50);
        driver.start(80, 20);
        assert_eq!(driver.radius(), 80);
        assert!(driver.tick_pending());
        assert_eq!(driver.next_deadline(), Some(20));
    }

    #[test]
    fn test_shrink_clamps_to_floor() {
        let mut driver = AnimationDriver::new(53);
        assert!(driver.shrink(2, 50));
        assert_eq!(driver.radius(), 51);
        assert!(driver.shrink(2, 50));
        assert_eq!(driver.radius(), 50);
        assert!(!driver.shrink(2, 50));
        assert!(driver.at_floor(50));
    }

    #[test]
    fn test_shrink_saturates_at_zero() {
        let mut driver = AnimationDriver::new(1);
        driver.shrink(5, 0);
        assert_eq!(driver.radius(), 0);
    }

    #[test]
    fn test_schedule_tick_replaces_pending() {
        let mut driver = AnimationDriver::new(80);
        driver.schedule_tick(20);
        driver.schedule_tick(0);
        assert_eq!(driver.pending(), 1);
        assert_eq!(driver.pop_due(0), Some(FocusTimer::Tick));
        assert!(!driver.tick_pending());
        assert_eq!(driver.pop_due(100), None);
    }

    #[test]
    fn test_arm_reset_rearms() {
        let mut driver = AnimationDriver::new(50);
        driver.arm_reset(500);
        driver.set_now(300);
        driver.arm_reset(500);
        assert_eq!(driver.pending(), 1);
        assert_eq!(driver.pop_due(799), None);
        assert_eq!(driver.pop_due(800), Some(FocusTimer::Reset));
        assert!(!driver.reset_armed());
        assert_eq!(driver.now_ms(), 800);
    }

    #[test]
    fn test_disarm_reset() {
        let mut driver = AnimationDriver::new(50);
        driver.arm_reset(500);
        driver.disarm_reset();
        assert!(!driver.reset_armed());
        assert_eq!(driver.pending(), 0);
    }

    #[test]
    fn test_cancel_all() {
        let mut driver = AnimationDriver::new(50);
        driver.schedule_tick(20);
        driver.arm_reset(500);
        driver.cancel_all();
        assert_eq!(driver.pending(), 0);
        assert!(!driver.tick_pending());
        assert!(!driver.reset_armed());
        assert_eq!(driver.pop_due(u64::MAX), None);
    }
}
