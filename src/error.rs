//! Error types for the statesearch crate

use thiserror::Error;

/// Main error type for the statesearch crate
///
/// Cancelled and exhausted searches are ordinary outcomes, not errors; see
/// [`crate::search::SearchOutcome`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid operation: {message}")]
    InvalidOperation { message: String },

    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("probability {value} must lie in [0, 1]")]
    InvalidProbability { value: f64 },

    #[error("invalid tile layout '{input}': {reason}")]
    InvalidTiles { input: String, reason: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid move: position {position} is off the board or already occupied")]
    InvalidMove { position: usize },

    #[error("unknown vertex '{name}'")]
    UnknownVertex { name: String },

    #[error("invalid strategy '{input}'. Expected one of: {expected}")]
    ParseStrategy { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
