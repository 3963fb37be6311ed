//! Minimax with alpha-beta pruning.

use log::trace;

use super::{GameSearch, base::AdversarialSearch, report::AdversarialReport};
use crate::{
    Result,
    config::AdversarialConfig,
    ports::SearchObserver,
    search::node::{NodeId, SearchTree},
    state::{AdversarialState, Successor},
};

/// Minimax that stops examining a position's moves once they cannot change
/// the decision above it.
///
/// The root value matches [`crate::Minimax`] for the same position and
/// depth, with at most as many nodes created.
///
/// On a cutoff the child that caused it is returned directly, carrying the
/// pruning bound as its cost; that value is a bound, not the exact value
/// [`AdversarialSearch::best_child`] would settle on with every move
/// examined. Tie-breaking between moves whose recorded costs are equal may
/// therefore choose a move whose recorded cost is only a bound.
#[derive(Debug)]
pub struct AlphaBeta<S> {
    base: AdversarialSearch<S>,
}

impl<S: AdversarialState> AlphaBeta<S> {
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when `config.depth` is zero.
    pub fn new(config: &AdversarialConfig) -> Result<Self> {
        Ok(Self {
            base: AdversarialSearch::new(config)?,
        })
    }

    pub fn base(&self) -> &AdversarialSearch<S> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut AdversarialSearch<S> {
        &mut self.base
    }

    fn max_value(
        &mut self,
        tree: &mut SearchTree<S>,
        id: NodeId,
        mut alpha: f64,
        beta: f64,
        observer: &mut dyn SearchObserver<S>,
    ) -> NodeId {
        if self.base.is_terminal(tree, id) {
            return id;
        }

        let mut best = f64::NEG_INFINITY;
        for successor in tree[id].state.successors() {
            let Some(child) = self.base.expand(tree, id, successor, observer) else {
                return id;
            };
            let resolved = self.min_value(tree, child, alpha, beta, observer);
            let value = tree[resolved].cost;
            best = best.max(value);
            tree[child].cost = best;
            tree[id].cost = best;

            if best >= beta {
                trace!("beta cutoff at depth {} ({best} >= {beta})", tree[id].depth);
                return child;
            }
            alpha = alpha.max(best);
        }

        if tree[id].children.is_empty() {
            return id;
        }
        self.base.best_child(tree, id, best)
    }

    fn min_value(
        &mut self,
        tree: &mut SearchTree<S>,
        id: NodeId,
        alpha: f64,
        mut beta: f64,
        observer: &mut dyn SearchObserver<S>,
    ) -> NodeId {
        if self.base.is_terminal(tree, id) {
            return id;
        }

        let mut best = f64::INFINITY;
        for successor in tree[id].state.successors() {
            let Some(child) = self.base.expand(tree, id, successor, observer) else {
                return id;
            };
            let resolved = self.max_value(tree, child, alpha, beta, observer);
            let value = tree[resolved].cost;
            best = best.min(value);
            tree[child].cost = best;
            tree[id].cost = best;

            if best <= alpha {
                trace!("alpha cutoff at depth {} ({best} <= {alpha})", tree[id].depth);
                return child;
            }
            beta = beta.min(best);
        }

        if tree[id].children.is_empty() {
            return id;
        }
        self.base.best_child(tree, id, best)
    }
}

impl<S: AdversarialState> GameSearch<S> for AlphaBeta<S> {
    fn find_with(&mut self, state: S, observer: &mut dyn SearchObserver<S>) -> Option<Successor<S>> {
        let mut tree = self.base.begin(state);
        let (alpha, beta) = (f64::NEG_INFINITY, f64::INFINITY);
        let resolved = if tree.root().state.player_to_move() {
            self.max_value(&mut tree, NodeId::ROOT, alpha, beta, observer)
        } else {
            self.min_value(&mut tree, NodeId::ROOT, alpha, beta, observer)
        };
        self.base.finish(tree, resolved)
    }

    fn report(&self) -> &AdversarialReport {
        self.base.report()
    }

    fn tree(&self) -> Option<&SearchTree<S>> {
        self.base.tree()
    }

    fn name(&self) -> &'static str {
        "alpha-beta"
    }
}
