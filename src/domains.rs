//! Reference state spaces.

pub mod game_tree;
pub mod graph;
pub mod puzzle;
pub mod tictactoe;

pub use game_tree::{GamePosition, GameTree, GameTreeBuilder};
pub use graph::{Graph, GraphBuilder, GraphState};
pub use puzzle::{Puzzle, Slide};
pub use tictactoe::{BoardState, Cell, Player};
