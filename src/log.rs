//! Main entry point for radiolog.
//!
//! This module provides the `RadioLog` struct: credential check, permission
//! gating, and delegation to the message repository.

use crate::error::{Error, Result};
use crate::export::ExportDocument;
use radiolog_core::{Message, RowUid, Section, Status};
use radiolog_engine::{
    battalion_defaults, CredentialStore, MessageLog, Operation, Session, StaticCredentials,
};
use radiolog_storage::{MemoryStore, RowStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// The radiolog facade.
///
/// Every operation takes the calling [`Session`] and is checked against the
/// permission matrix before any store call; a denied operation never touches
/// the table. Create one with [`RadioLog::builder`] or, for an in-process
/// store with the default credential table, [`RadioLog::in_memory`].
///
/// # Example
///
/// ```ignore
/// use radiolog::prelude::*;
///
/// let log = RadioLog::in_memory();
/// let mut admin = log.login("admin", "admin123")?;
///
/// log.upload(&mut admin, "Alpha 6", "Request resupply", Section::S4)?;
/// let messages = log.list(&admin)?;
/// ```
pub struct RadioLog {
    messages: MessageLog,
    credentials: Arc<dyn CredentialStore>,
}

impl RadioLog {
    /// Create a builder for store and credential injection.
    pub fn builder() -> RadioLogBuilder {
        RadioLogBuilder::new()
    }

    /// An in-memory log with the default battalion credential table.
    ///
    /// The store is process-local and lost on drop. Useful for tests and
    /// embedded use.
    pub fn in_memory() -> Self {
        Self::builder().build()
    }

    /// Access the repository directly, bypassing permission gating.
    ///
    /// For trusted embedding code; everything session-facing goes through
    /// the gated methods instead.
    pub fn repository(&self) -> &MessageLog {
        &self.messages
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Check credentials and start a session.
    ///
    /// Fails with [`Error::AuthFailure`] on any mismatch, without
    /// distinguishing unknown user from wrong password.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        self.credentials
            .authenticate(username, password)
            .map(Session::new)
            .ok_or(Error::AuthFailure)
    }

    // ========================================================================
    // Reads (any authenticated role)
    // ========================================================================

    /// Full snapshot in insertion order.
    pub fn list(&self, session: &Session) -> Result<Vec<Message>> {
        self.ensure(session, Operation::ViewLog)?;
        Ok(self.messages.list()?)
    }

    /// Unresolved (`Logged`) message counts per section, zero-count sections
    /// absent. Drives notification badges upstream.
    pub fn unresolved_by_section(&self, session: &Session) -> Result<BTreeMap<Section, usize>> {
        self.ensure(session, Operation::ViewLog)?;
        Ok(self.messages.unresolved_by_section()?)
    }

    /// The message carrying `uid`, at its current position.
    pub fn find_by_uid(&self, session: &Session, uid: RowUid) -> Result<Message> {
        self.ensure(session, Operation::ViewLog)?;
        Ok(self.messages.find_by_uid(uid)?)
    }

    /// Re-fetch the log if the session's periodic refresh is due at `now`.
    ///
    /// Returns the fresh snapshot when the 5-minute interval has elapsed
    /// (rearming the clock), `None` otherwise. Polling liveness, not push.
    pub fn refresh_if_due(
        &self,
        session: &mut Session,
        now: Instant,
    ) -> Result<Option<Vec<Message>>> {
        self.ensure(session, Operation::ViewLog)?;
        if session.refresh_due(now) {
            Ok(Some(self.messages.list()?))
        } else {
            Ok(None)
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Upload a message (Admin only). Status starts `Logged`, comment empty,
    /// timestamp now. Counts toward the session's unseen notifications.
    pub fn upload(
        &self,
        session: &mut Session,
        sender: &str,
        body: &str,
        section: Section,
    ) -> Result<RowUid> {
        self.ensure(session, Operation::UploadMessage)?;
        let uid = self.messages.add(sender, body, section)?;
        session.record_upload();
        Ok(uid)
    }

    /// Set the status of message `id` (any authenticated role).
    pub fn update_status(&self, session: &Session, id: usize, status: Status) -> Result<()> {
        self.ensure(session, Operation::UpdateStatus)?;
        Ok(self.messages.update_status(id, status)?)
    }

    /// Set the status of the message carrying `uid`.
    pub fn update_status_by_uid(
        &self,
        session: &Session,
        uid: RowUid,
        status: Status,
    ) -> Result<()> {
        self.ensure(session, Operation::UpdateStatus)?;
        Ok(self.messages.update_status_by_uid(uid, status)?)
    }

    /// Append a comment to message `id`, authored as the session's role
    /// (any authenticated role).
    pub fn add_comment(&self, session: &Session, id: usize, text: &str) -> Result<()> {
        self.ensure(session, Operation::AddComment)?;
        Ok(self
            .messages
            .add_comment(id, text, session.role().as_str())?)
    }

    /// Append a comment to the message carrying `uid`.
    pub fn add_comment_by_uid(&self, session: &Session, uid: RowUid, text: &str) -> Result<()> {
        self.ensure(session, Operation::AddComment)?;
        Ok(self
            .messages
            .add_comment_by_uid(uid, text, session.role().as_str())?)
    }

    /// Overwrite the comment cell of message `id` wholesale (full-control
    /// roles).
    pub fn edit_comment(&self, session: &Session, id: usize, text: &str) -> Result<()> {
        self.ensure(session, Operation::EditComment)?;
        Ok(self.messages.edit_comment(id, text)?)
    }

    /// Delete message `id` permanently (full-control roles). Later ids shift
    /// down by one.
    pub fn delete(&self, session: &Session, id: usize) -> Result<()> {
        self.ensure(session, Operation::DeleteMessage)?;
        Ok(self.messages.delete(id)?)
    }

    /// Delete the message carrying `uid` (full-control roles).
    pub fn delete_by_uid(&self, session: &Session, uid: RowUid) -> Result<()> {
        self.ensure(session, Operation::DeleteMessage)?;
        Ok(self.messages.delete_by_uid(uid)?)
    }

    // ========================================================================
    // Export (full-control roles)
    // ========================================================================

    /// Render the full table for spreadsheet export.
    pub fn export(&self, session: &Session) -> Result<ExportDocument> {
        self.ensure(session, Operation::ExportLog)?;
        let rows = self.messages.rows()?;
        Ok(ExportDocument::new(session.role(), &rows))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn ensure(&self, session: &Session, operation: Operation) -> Result<()> {
        let role = session.role();
        if operation.permitted_for(role) {
            Ok(())
        } else {
            Err(Error::Forbidden { role, operation })
        }
    }
}

/// Builder for store and credential injection.
///
/// # Example
///
/// ```ignore
/// use radiolog::prelude::*;
/// use std::sync::Arc;
///
/// // Custom store and credential table
/// let log = RadioLog::builder()
///     .store(Arc::new(MemoryStore::new()))
///     .credentials(Arc::new(
///         StaticCredentials::new().with_user("duty", "secret", Role::Hq),
///     ))
///     .build();
/// ```
pub struct RadioLogBuilder {
    store: Option<Arc<dyn RowStore>>,
    credentials: Option<Arc<dyn CredentialStore>>,
}

impl RadioLogBuilder {
    /// Create a builder with no store or credentials set.
    pub fn new() -> Self {
        RadioLogBuilder {
            store: None,
            credentials: None,
        }
    }

    /// Use this store. Defaults to a fresh [`MemoryStore`].
    pub fn store(mut self, store: Arc<dyn RowStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use this credential table. Defaults to the battalion table.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use a fixed credential table.
    pub fn static_credentials(self, table: StaticCredentials) -> Self {
        self.credentials(Arc::new(table))
    }

    /// Build the facade.
    pub fn build(self) -> RadioLog {
        let store: Arc<dyn RowStore> = match self.store {
            Some(store) => store,
            None => Arc::new(MemoryStore::new()),
        };
        let credentials: Arc<dyn CredentialStore> = match self.credentials {
            Some(credentials) => credentials,
            None => battalion_defaults(),
        };
        RadioLog {
            messages: MessageLog::new(store),
            credentials,
        }
    }
}

impl Default for RadioLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
