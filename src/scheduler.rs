//! Deadline queue for follow-up transitions.
//!
//! Nothing here sleeps. The event loop asks for whatever is due on each
//! tick and applies it; tests drive it with a manual clock.

use std::time::Instant;

struct Entry<T> {
    due: Instant,
    seq: u64,
    payload: T,
}

/// Pending payloads ordered by due time, ties in insertion order.
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due: Instant, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let at = self
            .entries
            .partition_point(|e| (e.due, e.seq) <= (due, seq));
        self.entries.insert(at, Entry { due, seq, payload });
    }

    /// Remove and return every payload due at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let split = self.entries.partition_point(|e| e.due <= now);
        self.entries.drain(..split).map(|e| e.payload).collect()
    }

    /// Drop every pending payload matching `predicate`. Returns how many were dropped.
    pub fn cancel<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|e| !predicate(&e.payload));
        before - self.entries.len()
    }

    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.entries.iter().any(|e| predicate(&e.payload))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_take_due_in_deadline_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start + Duration::from_millis(300), "late");
        scheduler.schedule(start + Duration::from_millis(100), "early");
        scheduler.schedule(start + Duration::from_millis(200), "middle");

        assert!(scheduler.take_due(start).is_empty());
        assert_eq!(
            scheduler.take_due(start + Duration::from_millis(200)),
            vec!["early", "middle"]
        );
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.take_due(start + Duration::from_secs(1)), vec!["late"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let due = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(due, 1);
        scheduler.schedule(due, 2);
        scheduler.schedule(due, 3);
        assert_eq!(scheduler.take_due(due), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel() {
        let due = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(due, 1);
        scheduler.schedule(due, 2);
        scheduler.schedule(due, 3);

        assert_eq!(scheduler.cancel(|n| n % 2 == 1), 2);
        assert_eq!(scheduler.len(), 1);
        assert!(!scheduler.any(|n| *n == 1));
        assert!(scheduler.any(|n| *n == 2));
        assert_eq!(scheduler.take_due(due), vec![2]);
    }
}
