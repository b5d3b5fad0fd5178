//! Store adapter errors.

use radiolog_core::Version;
use thiserror::Error;

/// Result type for store adapter operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure of a store call.
///
/// Remote failures are deliberately undifferentiated at this layer: the
/// caller cannot tell network from auth from quota, and nothing here retries
/// automatically. Version conflicts are the one retryable case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The remote call failed. Cause is opaque; the caller retries manually.
    #[error("remote store call failed: {0}")]
    Remote(String),

    /// The addressed row does not exist (or is the header row).
    #[error("row {row} out of bounds (store has {rows} data rows)")]
    RowOutOfBounds {
        /// The 1-based sheet row that was addressed.
        row: usize,
        /// Data rows present at the time of the call.
        rows: usize,
    },

    /// A checked write presented a stale row version.
    #[error("version conflict on row {row}: expected {expected}, found {found}")]
    Conflict {
        /// The 1-based sheet row that was addressed.
        row: usize,
        /// The version the writer read.
        expected: Version,
        /// The version actually present.
        found: Version,
    },
}

impl StoreError {
    /// Whether retrying with fresh data may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}
