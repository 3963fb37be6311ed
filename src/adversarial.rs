//! Move selection in two-player zero-sum games.
//!
//! Both searches look `depth` full turns ahead from the given position,
//! treat the side reported by [`AdversarialState::player_to_move`] as the
//! maximizer, and break ties between equally valued moves with a seedable
//! random source.

pub mod alpha_beta;
pub mod base;
pub mod minimax;
pub mod report;

pub use alpha_beta::AlphaBeta;
pub use base::AdversarialSearch;
pub use minimax::Minimax;
pub use report::AdversarialReport;

use crate::{
    Result,
    adapters::NoopObserver,
    config::{AdversarialConfig, GameAlgorithm},
    ports::SearchObserver,
    search::node::SearchTree,
    state::{AdversarialState, Successor},
};

/// Common interface of the minimax-family searches.
pub trait GameSearch<S: AdversarialState> {
    /// Choose a move for the side to move in `state`.
    ///
    /// Returns `None` when `state` is terminal or the search was cancelled
    /// before any move resolved.
    fn find(&mut self, state: S) -> Option<Successor<S>> {
        self.find_with(state, &mut NoopObserver)
    }

    /// Like [`GameSearch::find`], raising `observer` before every node is created.
    fn find_with(&mut self, state: S, observer: &mut dyn SearchObserver<S>) -> Option<Successor<S>>;

    /// Summary of the most recent call to `find`.
    fn report(&self) -> &AdversarialReport;

    /// Tree built by the most recent call to `find`.
    fn tree(&self) -> Option<&SearchTree<S>>;

    fn name(&self) -> &'static str;
}

impl GameAlgorithm {
    /// Build a search of this kind.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when `config` is invalid.
    pub fn build<S: AdversarialState + 'static>(
        self,
        config: &AdversarialConfig,
    ) -> Result<Box<dyn GameSearch<S>>> {
        Ok(match self {
            GameAlgorithm::Minimax => Box::new(Minimax::new(config)?),
            GameAlgorithm::AlphaBeta => Box::new(AlphaBeta::new(config)?),
        })
    }
}
