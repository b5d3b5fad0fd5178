//! The message repository.
//!
//! Every operation re-reads the full table immediately before validating and
//! acting; no row count or snapshot is ever reused from a prior call. The
//! backing store is shared across sessions with no transaction boundary, so
//! the one read-modify-write sequence here (comment append) goes through the
//! store's checked write instead of a blind overwrite.

use crate::error::{LogError, LogResult};
use radiolog_core::{append_comment, now_local, Message, RowUid, Section, Status};
use radiolog_storage::{
    decode_message, sheet_row_for_id, Column, RowCells, RowStore, StoreError, StoredRow,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Attempts for the comment-append checked write before surfacing the
/// conflict to the caller.
pub const COMMENT_WRITE_ATTEMPTS: usize = 3;

/// The domain API over the shared table.
///
/// Positional ids are valid for exactly one snapshot: id `k` addresses
/// whatever row sits at position `k` when the operation re-reads the table.
/// Callers that hold ids across deletes should use the `*_by_uid` variants,
/// which resolve the stable uid to its current position first.
pub struct MessageLog {
    store: Arc<dyn RowStore>,
}

impl MessageLog {
    /// Create a repository over a store.
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        MessageLog { store }
    }

    // ========================================================================
    // Append / read
    // ========================================================================

    /// Append a message with the default `Logged` status.
    ///
    /// Timestamp is the current local time; the comment cell starts empty.
    /// Returns the store-assigned uid.
    pub fn add(&self, sender: &str, body: &str, section: Section) -> LogResult<RowUid> {
        self.add_with_status(sender, body, section, Status::default())
    }

    /// Append a message with an explicit status.
    pub fn add_with_status(
        &self,
        sender: &str,
        body: &str,
        section: Section,
        status: Status,
    ) -> LogResult<RowUid> {
        let cells = RowCells::new_message(sender, body, section, status, now_local());
        let uid = self.store.append(cells)?;
        debug!(%uid, %section, "message appended");
        Ok(uid)
    }

    /// Full snapshot in insertion order, ids assigned 1..=N positionally.
    pub fn list(&self) -> LogResult<Vec<Message>> {
        let rows = self.rows()?;
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let id = index + 1;
                decode_message(id, row).map_err(|source| LogError::Malformed { id, source })
            })
            .collect()
    }

    /// Count of messages with status exactly `Logged`, grouped by section.
    ///
    /// Sections with no unresolved messages are absent from the result.
    pub fn unresolved_by_section(&self) -> LogResult<BTreeMap<Section, usize>> {
        let mut counts = BTreeMap::new();
        for message in self.list()? {
            if message.is_unresolved() {
                *counts.entry(message.section).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    // ========================================================================
    // Positional mutation
    // ========================================================================

    /// Overwrite the status cell of message `id`.
    pub fn update_status(&self, id: usize, status: Status) -> LogResult<()> {
        let rows = self.rows()?;
        Self::validate_id(id, rows.len())?;
        self.store
            .write_cell(sheet_row_for_id(id), Column::Status, status.as_str())?;
        debug!(id, %status, "status updated");
        Ok(())
    }

    /// Append `[author] text` to the comment cell of message `id`.
    ///
    /// The read-compose-write goes through the store's checked write; a
    /// concurrent writer to the same row forces a re-read and retry rather
    /// than a silently lost update. After [`COMMENT_WRITE_ATTEMPTS`] losses
    /// the conflict is surfaced (retryable).
    pub fn add_comment(&self, id: usize, text: &str, author: &str) -> LogResult<()> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let rows = self.rows()?;
            Self::validate_id(id, rows.len())?;
            let row = &rows[id - 1];
            let updated = append_comment(&row.cells.comment, author, text);

            match self.store.write_cell_checked(
                sheet_row_for_id(id),
                Column::Comment,
                &updated,
                row.version,
            ) {
                Ok(()) => {
                    debug!(id, author, "comment appended");
                    return Ok(());
                }
                Err(StoreError::Conflict { .. }) if attempt < COMMENT_WRITE_ATTEMPTS => {
                    warn!(id, attempt, "comment append lost a write race, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Overwrite the comment cell of message `id` wholesale.
    ///
    /// Full-control operation; the facade gates it. Last-writer-wins by
    /// design, like any other whole-cell overwrite.
    pub fn edit_comment(&self, id: usize, text: &str) -> LogResult<()> {
        let rows = self.rows()?;
        Self::validate_id(id, rows.len())?;
        self.store
            .write_cell(sheet_row_for_id(id), Column::Comment, text)?;
        debug!(id, "comment overwritten");
        Ok(())
    }

    /// Remove message `id`. Ids above `id` shift down by one; there is no
    /// tombstone and no recovery.
    pub fn delete(&self, id: usize) -> LogResult<()> {
        let rows = self.rows()?;
        Self::validate_id(id, rows.len())?;
        self.store.delete_row(sheet_row_for_id(id))?;
        debug!(id, "message deleted");
        Ok(())
    }

    // ========================================================================
    // Stable-identity layer
    // ========================================================================

    /// Current 1-based position of the row carrying `uid`.
    pub fn position_of(&self, uid: RowUid) -> LogResult<usize> {
        let rows = self.rows()?;
        Self::position_in(&rows, uid)
    }

    /// The message carrying `uid`, at its current position.
    pub fn find_by_uid(&self, uid: RowUid) -> LogResult<Message> {
        let rows = self.rows()?;
        let id = Self::position_in(&rows, uid)?;
        decode_message(id, &rows[id - 1]).map_err(|source| LogError::Malformed { id, source })
    }

    /// [`update_status`](Self::update_status), addressed by stable uid.
    pub fn update_status_by_uid(&self, uid: RowUid, status: Status) -> LogResult<()> {
        let rows = self.rows()?;
        let id = Self::position_in(&rows, uid)?;
        self.store
            .write_cell(sheet_row_for_id(id), Column::Status, status.as_str())?;
        debug!(%uid, id, %status, "status updated by uid");
        Ok(())
    }

    /// [`add_comment`](Self::add_comment), addressed by stable uid.
    ///
    /// The uid is re-resolved on every retry, so a delete that shifts the row
    /// between attempts cannot land the comment on the wrong message.
    pub fn add_comment_by_uid(&self, uid: RowUid, text: &str, author: &str) -> LogResult<()> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let rows = self.rows()?;
            let id = Self::position_in(&rows, uid)?;
            let row = &rows[id - 1];
            let updated = append_comment(&row.cells.comment, author, text);

            match self.store.write_cell_checked(
                sheet_row_for_id(id),
                Column::Comment,
                &updated,
                row.version,
            ) {
                Ok(()) => return Ok(()),
                Err(StoreError::Conflict { .. }) if attempt < COMMENT_WRITE_ATTEMPTS => {
                    warn!(%uid, attempt, "comment append lost a write race, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// [`delete`](Self::delete), addressed by stable uid.
    pub fn delete_by_uid(&self, uid: RowUid) -> LogResult<()> {
        let rows = self.rows()?;
        let id = Self::position_in(&rows, uid)?;
        self.store.delete_row(sheet_row_for_id(id))?;
        debug!(%uid, id, "message deleted by uid");
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Fresh full read of the table, raw cells as stored. Never cached.
    ///
    /// Public for consumers of the raw table (export); most callers want
    /// [`list`](Self::list).
    pub fn rows(&self) -> LogResult<Vec<StoredRow>> {
        Ok(self.store.read_all()?)
    }

    /// An id is valid iff `1 <= id <= rows`. Both bounds are enforced; the
    /// header row is unreachable through the repository.
    fn validate_id(id: usize, rows: usize) -> LogResult<()> {
        if id >= 1 && id <= rows {
            Ok(())
        } else {
            Err(LogError::InvalidId(id))
        }
    }

    fn position_in(rows: &[StoredRow], uid: RowUid) -> LogResult<usize> {
        rows.iter()
            .position(|row| row.uid == uid)
            .map(|index| index + 1)
            .ok_or(LogError::UnknownUid(uid))
    }
}
