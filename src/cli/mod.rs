//! Command-line interface for the `statesearch` binary.
//!
//! `solve` runs path-finding search on the sliding-tile puzzle; `play`
//! picks Tic-Tac-Toe moves with minimax or alpha-beta.

pub mod commands;
pub mod output;
