//! Uninformed and heuristic path-finding search.

pub mod driver;
pub mod frontier;
pub mod node;
pub mod outcome;
pub mod priority_queue;

pub use driver::Search;
pub use frontier::{
    BreadthFirst, CostCombiner, DepthFirst, DepthLimited, Frontier, HeuristicFrontier,
};
pub use node::{Node, NodeId, SearchTree};
pub use outcome::{SearchOutcome, SearchReport, SearchStats};
pub use priority_queue::PriorityQueue;
