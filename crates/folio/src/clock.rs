//! Virtual time for deterministic timer tests.
//!
//! `VirtualClock` holds one-shot timers carrying a payload. Time only
//! advances when `advance_by` is called, and every timer that comes due is
//! returned in firing order. Cancelled timers never fire.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};

/// Handle returned by `schedule`, used to cancel a pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct TimerEntry<T> {
    /// When the timer should fire (virtual time in ms)
    fire_at_ms: u64,
    id: TimerId,
    payload: T,
}

impl<T> PartialEq for TimerEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at_ms == other.fire_at_ms && self.id == other.id
    }
}

impl<T> Eq for TimerEntry<T> {}

impl<T> PartialOrd for TimerEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TimerEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: earlier fire time first, then scheduling order
        other
            .fire_at_ms
            .cmp(&self.fire_at_ms)
            .then_with(|| other.id.cmp(&self.id))
    }
}

pub struct VirtualClock<T> {
    current_time_ms: u64,
    next_id: u64,
    pending_timers: BinaryHeap<TimerEntry<T>>,
    cancelled: BTreeSet<TimerId>,
}

impl<T> VirtualClock<T> {
    pub fn new() -> Self {
        Self {
            current_time_ms: 0,
            next_id: 0,
            pending_timers: BinaryHeap::new(),
            cancelled: BTreeSet::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.current_time_ms
    }

    /// Registers a one-shot timer firing `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending_timers.push(TimerEntry {
            fire_at_ms: self.current_time_ms + delay_ms,
            id,
            payload,
        });
        id
    }

    /// Returns `true` when the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let pending = self
            .pending_timers
            .iter()
            .any(|entry| entry.id == id && !self.cancelled.contains(&id));
        if pending {
            self.cancelled.insert(id);
        }
        pending
    }

    /// Advances virtual time and returns due payloads with their fire times.
    pub fn advance_by(&mut self, ms: u64) -> Vec<(u64, T)> {
        let target_time = self.current_time_ms + ms;
        let mut fired = Vec::new();
        while self
            .pending_timers
            .peek()
            .is_some_and(|entry| entry.fire_at_ms <= target_time)
        {
            let Some(entry) = self.pending_timers.pop() else {
                break;
            };
            if self.cancelled.remove(&entry.id) {
                continue;
            }
            fired.push((entry.fire_at_ms, entry.payload));
        }
        self.current_time_ms = target_time;
        fired
    }

    pub fn has_pending_timers(&self) -> bool {
        self.pending_timers
            .iter()
            .any(|entry| !self.cancelled.contains(&entry.id))
    }

    /// Time until the next live timer fires.
    pub fn time_to_next_timer(&self) -> Option<u64> {
        self.pending_timers
            .iter()
            .filter(|entry| !self.cancelled.contains(&entry.id))
            .map(|entry| entry.fire_at_ms.saturating_sub(self.current_time_ms))
            .min()
    }

    pub fn clear_timers(&mut self) {
        self.pending_timers.clear();
        self.cancelled.clear();
    }
}

impl<T> Default for VirtualClock<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        let clock = VirtualClock::<()>::new();
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn timer_fires_once_at_deadline() {
        let mut clock = VirtualClock::new();
        clock.schedule(1000, "loaded");

        assert!(clock.advance_by(999).is_empty());
        assert_eq!(clock.advance_by(1), vec![(1000, "loaded")]);
        assert!(clock.advance_by(5000).is_empty());
        assert!(!clock.has_pending_timers());
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(300, 'c');
        clock.schedule(100, 'a');
        clock.schedule(200, 'b');

        let fired: Vec<char> = clock.advance_by(350).into_iter().map(|(_, p)| p).collect();
        assert_eq!(fired, vec!['a', 'b', 'c']);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut clock = VirtualClock::new();
        let id = clock.schedule(100, 1);
        clock.schedule(200, 2);

        assert!(clock.cancel(id));
        assert!(!clock.cancel(id));
        assert_eq!(clock.time_to_next_timer(), Some(200));
        assert_eq!(clock.advance_by(500), vec![(200, 2)]);
    }

    #[test]
    fn time_to_next_timer() {
        let mut clock = VirtualClock::new();
        assert!(clock.time_to_next_timer().is_none());

        clock.schedule(1000, ());
        assert_eq!(clock.time_to_next_timer(), Some(1000));

        clock.advance_by(300);
        assert_eq!(clock.time_to_next_timer(), Some(700));
    }
}
