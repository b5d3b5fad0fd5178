//! Access control: credentials and the permission matrix.
//!
//! The trust model is flat. A role either has an operation everywhere or
//! nowhere; there is no per-section scoping despite the rank naming.

use once_cell::sync::Lazy;
use radiolog_core::Role;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// An operation a role may or may not be permitted to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read the full log.
    ViewLog,
    /// Set a message's workflow status.
    UpdateStatus,
    /// Append a `[author] text` comment entry.
    AddComment,
    /// Append a new message to the log.
    UploadMessage,
    /// Overwrite a comment cell wholesale.
    EditComment,
    /// Remove a message permanently.
    DeleteMessage,
    /// Produce the spreadsheet export.
    ExportLog,
}

impl Operation {
    /// Whether `role` is permitted to perform this operation.
    ///
    /// The matrix: every authenticated role may view, update status, and
    /// comment; only Admin uploads; the full-control set edits comments,
    /// deletes, and exports.
    pub fn permitted_for(&self, role: Role) -> bool {
        match self {
            Operation::ViewLog | Operation::UpdateStatus | Operation::AddComment => true,
            Operation::UploadMessage => role == Role::Admin,
            Operation::EditComment | Operation::DeleteMessage | Operation::ExportLog => {
                role.is_full_control()
            }
        }
    }

    /// Short verb phrase for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ViewLog => "view the log",
            Operation::UpdateStatus => "update status",
            Operation::AddComment => "add a comment",
            Operation::UploadMessage => "upload a message",
            Operation::EditComment => "edit a comment",
            Operation::DeleteMessage => "delete a message",
            Operation::ExportLog => "export the log",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps credentials to a role.
///
/// Implementations return `None` on any mismatch, without distinguishing an
/// unknown user from a wrong password; the uniform failure avoids user
/// enumeration. No lockout or rate limiting is provided at this layer.
pub trait CredentialStore: Send + Sync {
    /// Check a credential pair. Username matching is trimmed and
    /// case-insensitive; the password must match exactly.
    fn authenticate(&self, username: &str, password: &str) -> Option<Role>;
}

/// A fixed in-memory credential table.
///
/// One pluggable [`CredentialStore`] among others; an external identity
/// provider would implement the same trait.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    // Keyed by normalized (trimmed, lowercased) username.
    users: HashMap<String, (String, Role)>,
}

impl StaticCredentials {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account. The username is normalized; re-adding replaces.
    pub fn with_user(mut self, username: &str, password: &str, role: Role) -> Self {
        self.users.insert(
            username.trim().to_lowercase(),
            (password.to_string(), role),
        );
        self
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the table has no accounts.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl CredentialStore for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> Option<Role> {
        let key = username.trim().to_lowercase();
        match self.users.get(&key) {
            Some((stored, role)) if stored == password => Some(*role),
            _ => None,
        }
    }
}

static DEFAULTS: Lazy<Arc<StaticCredentials>> = Lazy::new(|| {
    Arc::new(
        StaticCredentials::new()
            .with_user("admin", "admin123", Role::Admin)
            .with_user("commander", "cmd123", Role::Commander)
            .with_user("exo", "exo123", Role::ExO)
            .with_user("s1", "s1pass", Role::S1)
            .with_user("s2", "s2pass", Role::S2)
            .with_user("s3", "s3pass", Role::S3)
            .with_user("s4", "s4pass", Role::S4)
            .with_user("s5", "s5pass", Role::S5)
            .with_user("s6", "s6pass", Role::S6)
            .with_user("s7", "s7pass", Role::S7)
            .with_user("hq", "hqpass", Role::Hq),
    )
});

/// The battalion's default credential table: one account per role.
pub fn battalion_defaults() -> Arc<StaticCredentials> {
    DEFAULTS.clone()
}
