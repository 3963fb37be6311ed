//! Observer port - the cooperative hook raised while a search runs
//!
//! Every search raises [`SearchObserver::on_node_visited`] synchronously, once
//! per non-root node, before that node is examined. Returning
//! [`Visit::Cancel`] ends the search: no further nodes are created and the
//! search reports failure.

use crate::state::Successor;

/// Verdict returned by an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    #[default]
    Continue,
    Cancel,
}

impl Visit {
    pub fn is_cancel(self) -> bool {
        self == Visit::Cancel
    }
}

/// Payload of a visit notification.
#[derive(Debug)]
pub struct NodeVisited<'a, S> {
    /// State the transition leaves from
    pub state: &'a S,
    /// Transition being taken
    pub successor: &'a Successor<S>,
    /// Cost recorded on the visited node (path cost, or the preset utility in games)
    pub cost: f64,
    /// Depth of the visited node
    pub depth: u32,
}

/// Observer trait for monitoring and cancelling searches
///
/// Closures of the form `FnMut(&NodeVisited<'_, S>) -> Visit` implement this
/// trait, so ad-hoc hooks need no wrapper type:
///
/// ```
/// use statesearch::{
///     Search,
///     domains::graph::{Graph, GraphState},
///     ports::{NodeVisited, Visit},
/// };
///
/// let graph = Graph::builder()
///     .edge("A", "B", 1.0)
///     .goal("B")
///     .build();
/// let mut search = Search::breadth_first();
/// let mut visits = 0;
/// let found = search
///     .find_with(graph.start("A").unwrap(), &mut |_: &NodeVisited<'_, GraphState>| {
///         visits += 1;
///         Visit::Continue
///     })
///     .unwrap();
/// assert!(found);
/// assert_eq!(visits, 1);
/// ```
///
/// Stock implementations live in [`crate::adapters`].
pub trait SearchObserver<S> {
    /// Called before a non-root node is examined.
    ///
    /// # Default Implementation
    ///
    /// Always continues.
    fn on_node_visited(&mut self, _event: &NodeVisited<'_, S>) -> Visit {
        Visit::Continue
    }
}

impl<S, F> SearchObserver<S> for F
where
    F: FnMut(&NodeVisited<'_, S>) -> Visit,
{
    fn on_node_visited(&mut self, event: &NodeVisited<'_, S>) -> Visit {
        self(event)
    }
}
