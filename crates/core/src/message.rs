//! The message entity and the comment concatenation grammar.

use crate::types::{RowUid, Section, Status};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A logged radio message.
///
/// `id` is positional: it equals the message's 1-based position in the
/// store's append order at the time of the read, and deleting message `k`
/// shifts every id above `k` down by one. Treat it as ephemeral. `uid` is the
/// stable surrogate identity for callers that need one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// 1-based position in the snapshot this message was read from.
    pub id: usize,
    /// Stable store-assigned identity; survives deletions of earlier rows.
    pub uid: RowUid,
    /// Who transmitted the message. Free text.
    pub sender: String,
    /// Message body. Free text.
    pub body: String,
    /// Functional area the message is routed to.
    pub section: Section,
    /// Workflow state.
    pub status: Status,
    /// Creation time, fixed at append.
    pub timestamp: NaiveDateTime,
    /// Append-only `[author] text` entries joined by newline; empty initially.
    pub comment: String,
}

impl Message {
    /// Whether the message still awaits action.
    pub fn is_unresolved(&self) -> bool {
        self.status == Status::Logged
    }
}

/// One comment entry in its stored form: `[author] text`.
pub fn comment_entry(author: &str, text: &str) -> String {
    format!("[{author}] {text}")
}

/// Append a comment entry to an existing comment cell.
///
/// An empty cell takes the entry bare; a non-empty cell gets a newline
/// separator. The cell is monotonically growing under this operation.
pub fn append_comment(existing: &str, author: &str, text: &str) -> String {
    let entry = comment_entry(author, text);
    if existing.is_empty() {
        entry
    } else {
        format!("{existing}\n{entry}")
    }
}
