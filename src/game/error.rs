//! Error types for board synchronization
//!
//! None of these are fatal to the process. Every failure degrades to
//! "ignore and keep the previous visible state", since the external rule
//! engine is the only source of truth for the board.

/// Errors that can occur while syncing the local board with the rule engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// Snapshot text could not be parsed into a rectangular grid
    #[error("Malformed snapshot: {reason}")]
    MalformedSnapshot { reason: String },

    /// Snapshot dimensions differ from the local board
    #[error("Snapshot is {found:?} but the board is {expected:?} (rows, cols)")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// The move request was never answered by the engine
    #[error("Engine transport failed: {message}")]
    TransportFailure { message: String },

    /// Pick id does not map to a board cell
    #[error("Pick id {cell_id} is outside the board")]
    InvalidPick { cell_id: usize },

    /// A move request is already waiting for the engine
    #[error("A move request is already outstanding")]
    RequestOutstanding,
}

impl SyncError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SyncError::MalformedSnapshot {
            reason: reason.into(),
        }
    }

    pub(crate) fn transport(message: impl Into<String>) -> Self {
        SyncError::TransportFailure {
            message: message.into(),
        }
    }
}

/// Result type alias for board sync operations
pub type SyncResult<T> = Result<T, SyncError>;
