use std::{cmp::Reverse, collections::BinaryHeap};

use crate::foundation::core::Millis;

#[derive(Debug)]
struct Entry<T> {
    at: Millis,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.at, self.seq).cmp(&(other.at, other.seq))
    }
}

/// Virtual-clock timer queue.
///
/// Tasks fire in deadline order; ties fire in scheduling order. Nothing runs on its own:
/// the owner polls [`Timers::pop_due`] with the current time, and pending tasks are dropped
/// with the queue.
#[derive(Debug)]
pub struct Timers<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Millis, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { at, seq, task }));
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.heap.peek().map(|Reverse(e)| e.at)
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Millis) -> Vec<T> {
        let mut out = Vec::new();
        while self.next_deadline().is_some_and(|at| at <= now) {
            if let Some(Reverse(e)) = self.heap.pop() {
                out.push(e.task);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/timers.rs"]
mod tests;
