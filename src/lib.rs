//! Generic state-space search.
//!
//! This crate provides:
//! - Path-finding over any [`State`] graph with pluggable frontiers
//!   (breadth-first, depth-first, depth-limited, greedy best-first, A*)
//! - Move selection in two-player zero-sum games ([`Minimax`], [`AlphaBeta`])
//! - Cooperative cancellation through the [`SearchObserver`] port and a set
//!   of stock observers (expansion budgets, deadlines, visit logs)
//! - Reference domains: weighted graphs, the 8-puzzle, Tic-Tac-Toe and
//!   explicit game trees

pub mod adapters;
pub mod adversarial;
pub mod cli;
pub mod config;
pub mod domains;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod search;
pub mod state;

pub use adversarial::{AdversarialReport, AlphaBeta, GameSearch, Minimax};
pub use config::{AdversarialConfig, GameAlgorithm, SearchConfig, StrategyKind};
pub use error::{Error, Result};
pub use identifiers::{ActionId, ActionIdAllocator, StateId};
pub use ports::{NodeVisited, SearchObserver, Visit};
pub use search::{Search, SearchOutcome, SearchReport, SearchStats};
pub use state::{Action, AdversarialState, State, Successor};
