//! Machinery shared by the minimax-family searches.

use log::debug;
use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};

use super::report::AdversarialReport;
use crate::{
    Result,
    config::AdversarialConfig,
    ports::{NodeVisited, SearchObserver, Visit},
    search::node::{NodeId, SearchTree},
    state::{AdversarialState, Successor},
};

/// Depth bound, tie-break randomness, cancellation and bookkeeping for one
/// game-tree search object.
///
/// The search looks `depth` full turns ahead, i.e. `depth * 2` plies.
#[derive(Debug)]
pub struct AdversarialSearch<S> {
    depth: u32,
    rng: StdRng,
    cancelled: bool,
    tree: Option<SearchTree<S>>,
    report: AdversarialReport,
}

impl<S: AdversarialState> AdversarialSearch<S> {
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when `config.depth` is zero.
    pub fn new(config: &AdversarialConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            depth: config.depth,
            rng: StdRng::seed_from_u64(config.seed.unwrap_or_else(random)),
            cancelled: false,
            tree: None,
            report: AdversarialReport::default(),
        })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Replace the tie-breaking random source.
    pub fn set_rng(&mut self, rng: StdRng) {
        self.rng = rng;
    }

    /// True at a finished game or at the ply horizon.
    pub fn is_terminal(&self, tree: &SearchTree<S>, id: NodeId) -> bool {
        let node = &tree[id];
        node.state.is_terminal() || node.depth == self.depth * 2
    }

    /// Raise the observer for the move `successor` out of `parent`.
    ///
    /// Once any call has been cancelled, every later call in the same search
    /// is cancelled too without consulting the observer.
    pub fn process_event(
        &mut self,
        tree: &SearchTree<S>,
        parent: NodeId,
        successor: &Successor<S>,
        observer: &mut dyn SearchObserver<S>,
    ) -> Visit {
        if self.cancelled {
            return Visit::Cancel;
        }
        let node = &tree[parent];
        let verdict = observer.on_node_visited(&NodeVisited {
            state: &node.state,
            successor,
            cost: successor.state.utility(),
            depth: node.depth + 1,
        });
        if verdict.is_cancel() {
            debug!("adversarial search cancelled at depth {}", node.depth + 1);
            self.cancelled = true;
        }
        verdict
    }

    /// Raise the observer and, unless cancelled, add the child for
    /// `successor` with its cost preset to the child's utility.
    pub fn expand(
        &mut self,
        tree: &mut SearchTree<S>,
        parent: NodeId,
        successor: Successor<S>,
        observer: &mut dyn SearchObserver<S>,
    ) -> Option<NodeId> {
        if self.process_event(tree, parent, &successor, observer).is_cancel() {
            return None;
        }
        let utility = successor.state.utility();
        Some(tree.add_child_with_cost(parent, successor, utility))
    }

    /// Pick the child of `id` whose cost equals `value`.
    ///
    /// A child whose state is terminal is preferred, since its value is a
    /// real game outcome rather than a horizon estimate; otherwise one of the
    /// matching children is drawn at random. The chosen child's cost is set
    /// to `value` and it is flagged as on the solution path. Returns `id`
    /// itself when no child's cost equals `value` (including when it has no
    /// children, or `value` is NaN).
    pub fn best_child(&mut self, tree: &mut SearchTree<S>, id: NodeId, value: f64) -> NodeId {
        let matching: Vec<NodeId> = tree[id]
            .children
            .iter()
            .copied()
            .filter(|&child| tree[child].cost == value)
            .collect();

        let chosen = matching
            .iter()
            .copied()
            .find(|&child| tree[child].state.is_terminal())
            .or_else(|| matching.choose(&mut self.rng).copied());

        let Some(chosen) = chosen else {
            return id;
        };
        let node = &mut tree[chosen];
        node.cost = value;
        node.on_solution_path = true;
        chosen
    }

    /// Reset per-search state and create the tree for `state`.
    pub fn begin(&mut self, state: S) -> SearchTree<S> {
        self.cancelled = false;
        self.tree = None;
        SearchTree::new(state)
    }

    /// Record the finished tree and turn the resolved node into a move.
    pub fn finish(&mut self, tree: SearchTree<S>, resolved: NodeId) -> Option<Successor<S>> {
        let root = tree.root();
        self.report = AdversarialReport {
            value: (!root.children.is_empty()).then_some(root.cost),
            nodes_created: tree.len(),
            cancelled: self.cancelled,
            depth: self.depth,
        };
        debug!(
            "adversarial search finished: value={:?} nodes={} cancelled={}",
            self.report.value, self.report.nodes_created, self.report.cancelled
        );

        let successor = if resolved == NodeId::ROOT {
            None
        } else {
            tree[resolved].successor.clone()
        };
        self.tree = Some(tree);
        successor
    }

    pub fn report(&self) -> &AdversarialReport {
        &self.report
    }

    pub fn tree(&self) -> Option<&SearchTree<S>> {
        self.tree.as_ref()
    }
}
