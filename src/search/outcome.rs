//! What a path-finding search reports once `find` returns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a [`crate::search::Search`] stands.
///
/// `find` moves a search from `Idle` (or a previous result) to one of the
/// three final outcomes; the running phase is never observable from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOutcome {
    #[default]
    Idle,
    /// A terminal state was reached; the solution is available.
    Succeeded,
    /// The observer asked the search to stop.
    Cancelled,
    /// The frontier ran dry without reaching a terminal state.
    Exhausted,
}

impl SearchOutcome {
    pub fn is_success(self) -> bool {
        self == SearchOutcome::Succeeded
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchOutcome::Idle => "idle",
            SearchOutcome::Succeeded => "succeeded",
            SearchOutcome::Cancelled => "cancelled",
            SearchOutcome::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work counters for the last search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes whose successors were generated
    pub expansions: usize,
    /// Nodes created, root included
    pub nodes_created: usize,
    /// Deepest node created
    pub max_depth: u32,
}

/// Serializable summary of a finished search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub strategy: String,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    /// Action names from start to goal (empty unless succeeded)
    pub actions: Vec<String>,
    pub cost: f64,
}
