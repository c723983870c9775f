//! Board Errors

use thiserror::Error;

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-level errors
#[derive(Debug, Error)]
pub enum BoardError {
    /// The key-value store rejected a read or write
    #[error("storage error: {0}")]
    Storage(String),

    /// Persisted data could not be parsed
    #[error("malformed board data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unknown lane: {0}")]
    UnknownLane(String),

    /// A save was attempted before the initial load finished
    #[error("board not loaded yet")]
    NotLoaded,
}
