//! Decode errors for cell text that does not match the fixed vocabularies.

use thiserror::Error;

/// Failure to interpret a stored cell value.
///
/// A shared table can be written by foreign clients; a row that no longer
/// matches the fixed enumerations or the timestamp format surfaces as one of
/// these rather than panicking mid-snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Section cell is not one of S1..S7, HQ.
    #[error("unknown section: {0:?}")]
    UnknownSection(String),

    /// Status cell is not one of the three workflow states.
    #[error("unknown status: {0:?}")]
    UnknownStatus(String),

    /// Role name is not in the fixed role set.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    /// Timestamp cell does not match `YYYY-MM-DD HH:MM:SS`.
    #[error("bad timestamp: {0:?}")]
    BadTimestamp(String),
}
