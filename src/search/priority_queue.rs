//! Stable minimum-priority queue.
//!
//! Values come out lowest priority first; values sharing a priority come out
//! in the order they went in.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, VecDeque},
};

use crate::{Error, Result};

/// `f64` priority with a total order so it can key a `BTreeMap`.
#[derive(Debug, Clone, Copy)]
struct Priority(f64);

impl Priority {
    fn new(value: f64) -> Self {
        // -0.0 and 0.0 must share a bucket
        if value == 0.0 {
            Priority(0.0)
        } else {
            Priority(value)
        }
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Minimum-priority queue, FIFO within a priority.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    buckets: BTreeMap<Priority, VecDeque<T>>,
    count: usize,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            count: 0,
        }
    }

    pub fn enqueue(&mut self, priority: f64, value: T) {
        self.buckets
            .entry(Priority::new(priority))
            .or_default()
            .push_back(value);
        self.count += 1;
    }

    /// Remove the earliest-inserted value among those with the smallest priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if nothing is enqueued.
    pub fn dequeue(&mut self) -> Result<T> {
        self.dequeue_with_priority().map(|(_, value)| value)
    }

    /// Like [`dequeue`](Self::dequeue) but also reports the value's priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if nothing is enqueued.
    pub fn dequeue_with_priority(&mut self) -> Result<(f64, T)> {
        let mut entry = self.buckets.first_entry().ok_or(Error::EmptyQueue)?;
        let priority = entry.key().0;
        let value = entry.get_mut().pop_front().ok_or(Error::EmptyQueue)?;
        if entry.get().is_empty() {
            entry.remove();
        }
        self.count -= 1;
        Ok((priority, value))
    }

    /// Smallest priority currently enqueued.
    pub fn peek_priority(&self) -> Option<f64> {
        self.buckets.keys().next().map(|p| p.0)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
        self.count = 0;
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
