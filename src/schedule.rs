//! One-shot timers for frame pacing and delayed transitions.
//!
//! Everything runs on the UI thread: the host asks [`Scheduler::next_deadline`]
//! how long it may block on input, then drains [`Scheduler::due`] and routes
//! the fired events to the state machines.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Handle to an armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Deadline-ordered set of one-shot timers.
#[derive(Debug)]
pub struct Scheduler<E> {
    next_id: u64,
    timers: BTreeMap<(u64, TimerId), E>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            timers: BTreeMap::new(),
        }
    }

    /// Arm a timer that fires `delay` after `now_ms`.
    pub fn arm(&mut self, now_ms: u64, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = now_ms.saturating_add(delay.as_millis() as u64);
        self.timers.insert((deadline, id), event);
        id
    }

    /// Cancel a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|(_, timer), _| *timer != id);
        self.timers.len() != before
    }

    /// Cancel every pending timer.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.keys().any(|(_, timer)| *timer == id)
    }

    /// Remove and return every timer whose deadline is at or before `now_ms`,
    /// earliest first. Timers sharing a deadline fire in arming order.
    pub fn due(&mut self, now_ms: u64) -> Vec<(TimerId, E)> {
        let pending = self.timers.split_off(&(now_ms.saturating_add(1), TimerId(0)));
        let fired = std::mem::replace(&mut self.timers, pending);
        fired.into_iter().map(|((_, id), event)| (id, event)).collect()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

/// Monotonic millisecond clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn due_returns_expired_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(0, ms(500), "late");
        scheduler.arm(0, ms(16), "frame");
        scheduler.arm(0, ms(600), "later");

        let fired: Vec<_> = scheduler.due(500).into_iter().map(|(_, e)| e).collect();
        assert_eq!(fired, vec!["frame", "late"]);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.next_deadline(), Some(600));
    }

    #[test]
    fn nothing_due_before_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(100, ms(16), ());
        assert!(scheduler.due(115).is_empty());
        assert_eq!(scheduler.due(116).len(), 1);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_arming_order() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(0, ms(10), 1);
        scheduler.arm(0, ms(10), 2);
        scheduler.arm(0, ms(10), 3);
        let fired: Vec<_> = scheduler.due(10).into_iter().map(|(_, e)| e).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.arm(0, ms(500), ());
        assert!(scheduler.is_pending(id));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(!scheduler.is_pending(id));
        assert!(scheduler.due(1_000).is_empty());
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.arm(0, ms(5), ());
        assert_eq!(scheduler.due(5).len(), 1);
        assert!(!scheduler.cancel(id));
    }

    #[test]
    fn cancel_all_clears_everything() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(0, ms(5), ());
        scheduler.arm(0, ms(50), ());
        scheduler.cancel_all();
        scheduler.cancel_all();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.next_deadline(), None);
    }
}
