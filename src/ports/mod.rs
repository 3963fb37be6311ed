//! Ports (trait boundaries) between the search engine and its callers.
//!
//! The engine owns these traits; callers plug in adapters such as the ones in
//! [`crate::adapters`] or plain closures.

pub mod observer;

pub use observer::{NodeVisited, SearchObserver, Visit};
