//! Unified error type for radiolog.
//!
//! This module wraps the internal layer errors and presents one consistent
//! surface to users of the facade.

use radiolog_core::{Role, RowUid};
use radiolog_engine::{LogError, Operation};
use radiolog_storage::StoreError;
use thiserror::Error;

/// All radiolog errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A positional message id outside `1..=N` at validation time.
    #[error("invalid message id: {0}")]
    InvalidId(usize),

    /// A stable uid no longer present in the table.
    #[error("no message with uid {0}")]
    UnknownUid(RowUid),

    /// Credential rejection. Deliberately uniform: an unknown user and a
    /// wrong password are indistinguishable.
    #[error("invalid credentials")]
    AuthFailure,

    /// The permission matrix denies this role the operation.
    #[error("{role} is not permitted to {operation}")]
    Forbidden {
        /// The session's role.
        role: Role,
        /// What it tried to do.
        operation: Operation,
    },

    /// A concurrent writer won; retrying with fresh data may succeed.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A row in the shared table does not decode against the fixed
    /// vocabularies (a foreign client wrote it).
    #[error("malformed row at position {id}: {reason}")]
    Malformed {
        /// 1-based position of the offending row.
        id: usize,
        /// What failed to decode.
        reason: String,
    },

    /// Undifferentiated remote-store failure. Not retried automatically;
    /// the user retries the action manually.
    #[error("store error: {0}")]
    Store(String),
}

/// Result type for radiolog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether retrying with fresh data may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }

    /// Check for a positional-id failure.
    pub fn is_invalid_id(&self) -> bool {
        matches!(self, Error::InvalidId(_))
    }

    /// Check for a credential rejection.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Error::AuthFailure)
    }

    /// Check for a permission-matrix denial.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Error::Forbidden { .. })
    }
}

// Convert from internal engine errors
impl From<LogError> for Error {
    fn from(e: LogError) -> Self {
        match e {
            LogError::InvalidId(id) => Error::InvalidId(id),
            LogError::UnknownUid(uid) => Error::UnknownUid(uid),
            LogError::Malformed { id, source } => Error::Malformed {
                id,
                reason: source.to_string(),
            },
            // A version conflict or a row deleted under us: both are races
            // with a concurrent writer, both clean up on retry.
            LogError::Store(s @ StoreError::Conflict { .. })
            | LogError::Store(s @ StoreError::RowOutOfBounds { .. }) => {
                Error::Conflict(s.to_string())
            }
            LogError::Store(s) => Error::Store(s.to_string()),
        }
    }
}
