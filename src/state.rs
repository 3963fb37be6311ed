//! Capabilities a domain supplies to the search engine.
//!
//! The engine never inspects a state beyond these traits. Domains implement
//! [`State`] for path finding and additionally [`AdversarialState`] for
//! two-player games.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    identifiers::{ActionId, StateId},
};

/// A node of an abstract state graph.
///
/// Equality (`PartialEq`) is the state's own notion of sameness and is what
/// duplicate suppression compares against.
pub trait State: Clone + PartialEq {
    /// True if this state is a goal (or, in games, a finished position).
    fn is_terminal(&self) -> bool;

    /// Transitions out of this state.
    ///
    /// Called again on every expansion; the engine does not cache the result,
    /// so the sequence must be finite and reproducible.
    fn successors(&self) -> Vec<Successor<Self>>;

    /// Estimated remaining cost to a goal. Only heuristic frontiers call this.
    fn heuristic(&self) -> f64 {
        0.0
    }
}

/// A position in a two-player zero-sum game.
pub trait AdversarialState: State {
    /// Payoff from the maximizer's point of view.
    ///
    /// Meaningful at terminal positions; at a depth cutoff it serves as the
    /// static evaluation.
    fn utility(&self) -> f64;

    /// True when the maximizing player moves next.
    fn player_to_move(&self) -> bool;

    /// The initial position of the game this state belongs to.
    fn reset(&self) -> Self;
}

/// Label of a transition.
///
/// Only `name` matters to search; the rest is carried for collaborators that
/// key data by transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub name: String,
    /// Probability the transition happens when chosen (1.0 for deterministic moves).
    pub probability: f64,
    pub parent: Option<StateId>,
    pub child: Option<StateId>,
}

impl Action {
    /// A deterministic action with the default id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ActionId::default(),
            name: name.into(),
            probability: 1.0,
            parent: None,
            child: None,
        }
    }

    pub fn with_id(mut self, id: ActionId) -> Self {
        self.id = id;
        self
    }

    /// Set the transition probability.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProbability`] unless `probability` is finite and in `[0, 1]`.
    pub fn with_probability(mut self, probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidProbability { value: probability });
        }
        self.probability = probability;
        Ok(self)
    }

    /// Record the states this action connects.
    pub fn between(mut self, parent: impl Into<StateId>, child: impl Into<StateId>) -> Self {
        self.parent = Some(parent.into());
        self.child = Some(child.into());
        self
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One transition out of a state: what it costs, what it is called and where it leads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Successor<S> {
    pub cost: f64,
    pub action: Action,
    pub state: S,
}

impl<S> Successor<S> {
    pub fn new(cost: f64, action: Action, state: S) -> Self {
        Self {
            cost,
            action,
            state,
        }
    }

    /// Shorthand for a deterministic transition labelled `name`.
    pub fn labelled(cost: f64, name: impl Into<String>, state: S) -> Self {
        Self::new(cost, Action::new(name), state)
    }
}
