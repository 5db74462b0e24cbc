//! Single-threaded delayed-callback queue.
//!
//! A [`TimerQueue`] owns a monotonic millisecond clock and a set of pending
//! timers, each carrying a payload that tells the owner what to do when it
//! fires. The queue never runs code itself: the owner drains due timers with
//! [`TimerQueue::pop_due`] and dispatches on the payload, so every callback
//! runs on the owner's thread with exclusive access to its state.
//!
//! Timers fire in deadline order; timers sharing a deadline fire in the order
//! they were scheduled. Dropping the queue (or calling [`TimerQueue::clear`])
//! cancels everything still pending.
//!
//! ```
//! use focal_core::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let tick = timers.schedule(20, "tick");
//! timers.schedule(20, "later");
//!
//! assert!(timers.pop_due(10).is_none());
//! let due = timers.pop_due(25).unwrap();
//! assert_eq!(due.handle, tick);
//! assert_eq!(due.payload, "tick");
//! assert_eq!(timers.now_ms(), 20);
//! ```

use std::collections::BTreeMap;

/// Handle to a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle {
    deadline_ms: u64,
    seq: u64,
}

impl TimerHandle {
    /// Clock time at which the timer fires.
    #[must_use]
    pub const fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }
}

/// A timer that has come due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueTimer<T> {
    /// Handle the timer was scheduled with
    pub handle: TimerHandle,
    /// Payload supplied at scheduling time
    pub payload: T,
}

/// Deadline-ordered queue of cancellable timers driven by a virtual clock.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now_ms: u64,
    next_seq: u64,
    pending: BTreeMap<TimerHandle, T>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward. Earlier times are ignored.
    ///
    /// This does not fire anything; drain with [`Self::pop_due`] first.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Schedule `payload` to fire `delay_ms` after the current clock time.
    pub fn schedule(&mut self, delay_ms: u64, payload: T) -> TimerHandle {
        self.schedule_at(self.now_ms.saturating_add(delay_ms), payload)
    }

    /// Schedule `payload` at an absolute clock time.
    ///
    /// Deadlines in the past fire on the next drain.
    pub fn schedule_at(&mut self, deadline_ms: u64, payload: T) -> TimerHandle {
        let handle = TimerHandle {
            deadline_ms,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(handle, payload);
        handle
    }

    /// Cancel a pending timer, returning its payload if it had not fired yet.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        self.pending.remove(&handle)
    }

    /// Check whether a timer is still pending.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Cancel every pending timer, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.keys().next().map(TimerHandle::deadline_ms)
    }

    /// Remove the earliest timer due at or before `until_ms`.
    ///
    /// The clock is moved to the timer's deadline (never backwards), so
    /// anything the owner schedules while handling it is measured from the
    /// moment it fired.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<DueTimer<T>> {
        let (&handle, _) = self.pending.iter().next()?;
        if handle.deadline_ms > until_ms {
            return None;
        }
        let payload = self.pending.remove(&handle)?;
        self.set_now(handle.deadline_ms);
        Some(DueTimer { handle, payload })
    }
}
