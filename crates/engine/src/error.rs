//! Engine errors.

use radiolog_core::{DecodeError, RowUid};
use radiolog_storage::StoreError;
use thiserror::Error;

/// Result type for repository operations.
pub type LogResult<T> = std::result::Result<T, LogError>;

/// Failure of a repository operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// The positional id is outside `1..=N` for the current snapshot.
    #[error("invalid message id: {0}")]
    InvalidId(usize),

    /// No row carries this uid in the current snapshot.
    #[error("no message with uid {0}")]
    UnknownUid(RowUid),

    /// A snapshot row does not decode against the fixed vocabularies.
    #[error("malformed row at position {id}: {source}")]
    Malformed {
        /// 1-based position of the offending row.
        id: usize,
        /// What failed to decode.
        #[source]
        source: DecodeError,
    },

    /// The store call failed. Version conflicts are retryable; remote
    /// failures are not retried automatically.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LogError {
    /// Whether retrying the whole operation with fresh data may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LogError::Store(e) if e.is_retryable())
    }
}
