//! Full-width minimax.

use super::{GameSearch, base::AdversarialSearch, report::AdversarialReport};
use crate::{
    Result,
    config::AdversarialConfig,
    ports::SearchObserver,
    search::node::{NodeId, SearchTree},
    state::{AdversarialState, Successor},
};

/// Minimax without pruning: every successor within the horizon is visited.
///
/// # Examples
///
/// ```
/// use statesearch::{GameSearch, Minimax, config::AdversarialConfig, domains::game_tree::GameTree};
///
/// // The maximizer picks the branch whose worst reply is best.
/// let game = GameTree::uniform(2, 2, &[2.0, 8.0, 3.0, 12.0], true);
/// let mut minimax = Minimax::new(&AdversarialConfig::new(1).with_seed(1)).unwrap();
/// let chosen = minimax.find(game.root()).unwrap();
/// assert_eq!(chosen.action.name, "1");
/// assert_eq!(minimax.report().value, Some(3.0));
/// ```
#[derive(Debug)]
pub struct Minimax<S> {
    base: AdversarialSearch<S>,
}

impl<S: AdversarialState> Minimax<S> {
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
            let resolved = self.min_value(tree, child, observer);
            let value = tree[resolved].cost;
            best = best.max(value);
            // the child records the running optimum, not its own value
            tree[child].cost = best;
            tree[id].cost = best;
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
            let resolved = self.max_value(tree, child, observer);
            let value = tree[resolved].cost;
            best = best.min(value);
            tree[child].cost = best;
            tree[id].cost = best;
        }

        if tree[id].children.is_empty() {
            return id;
        }
        self.base.best_child(tree, id, best)
    }
}

impl<S: AdversarialState> GameSearch<S> for Minimax<S> {
    fn find_with(&mut self, state: S, observer: &mut dyn SearchObserver<S>) -> Option<Successor<S>> {
        let mut tree = self.base.begin(state);
        let resolved = if tree.root().state.player_to_move() {
            self.max_value(&mut tree, NodeId::ROOT, observer)
        } else {
            self.min_value(&mut tree, NodeId::ROOT, observer)
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
        "minimax"
    }
}
