//! Stock [`SearchObserver`] implementations.
//!
//! The engine has no timeout of its own; bounding a search by wall-clock time
//! or by work done is a matter of plugging one of these in.

use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ports::{NodeVisited, SearchObserver, Visit};

/// Observer that never cancels. The default for `find`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<S> SearchObserver<S> for NoopObserver {}

/// Cancels once more than `limit` nodes have been visited.
#[derive(Debug, Clone)]
pub struct ExpansionLimit {
    limit: usize,
    visited: usize,
}

impl ExpansionLimit {
    pub fn new(limit: usize) -> Self {
        Self { limit, visited: 0 }
    }

    /// Visits seen so far, the cancelled one included.
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn reset(&mut self) {
        self.visited = 0;
    }
}

impl<S> SearchObserver<S> for ExpansionLimit {
    fn on_node_visited(&mut self, _event: &NodeVisited<'_, S>) -> Visit {
        self.visited += 1;
        if self.visited > self.limit {
            debug!("expansion limit {} reached, cancelling", self.limit);
            Visit::Cancel
        } else {
            Visit::Continue
        }
    }
}

/// Cancels the first visit at or after a wall-clock deadline.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    /// Deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self::at(Instant::now() + budget)
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }
}

impl<S> SearchObserver<S> for Deadline {
    fn on_node_visited(&mut self, _event: &NodeVisited<'_, S>) -> Visit {
        if self.expired() {
            debug!("search deadline passed, cancelling");
            Visit::Cancel
        } else {
            Visit::Continue
        }
    }
}

/// One recorded visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub action: String,
    pub step_cost: f64,
    pub cost: f64,
    pub depth: u32,
}

/// Records every visit, never cancels.
#[derive(Debug, Clone, Default)]
pub struct VisitLog {
    records: Vec<VisitRecord>,
}

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[VisitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Deepest node visited so far.
    pub fn max_depth(&self) -> u32 {
        self.records.iter().map(|r| r.depth).max().unwrap_or(0)
    }
}

impl<S> SearchObserver<S> for VisitLog {
    fn on_node_visited(&mut self, event: &NodeVisited<'_, S>) -> Visit {
        self.records.push(VisitRecord {
            action: event.successor.action.name.clone(),
            step_cost: event.successor.cost,
            cost: event.cost,
            depth: event.depth,
        });
        Visit::Continue
    }
}

/// Consults `first`, then `second`; cancels as soon as either does.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<S, A, B> SearchObserver<S> for Chain<A, B>
where
    A: SearchObserver<S>,
    B: SearchObserver<S>,
{
    fn on_node_visited(&mut self, event: &NodeVisited<'_, S>) -> Visit {
        match self.first.on_node_visited(event) {
            Visit::Cancel => Visit::Cancel,
            Visit::Continue => self.second.on_node_visited(event),
        }
    }
}
