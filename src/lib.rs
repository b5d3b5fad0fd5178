//! # Radiolog
//!
//! Role-gated radio message log over a shared tabular store.
//!
//! A small set of users authenticate, append timestamped messages, update
//! workflow status, and attach comments. The table is shared across sessions
//! with no transaction boundary; radiolog enforces the access-control matrix
//! at the API boundary and uses optimistic per-row versioning for the one
//! read-modify-write sequence (comment append).
//!
//! ## Quick Start
//!
//! ```ignore
//! use radiolog::prelude::*;
//!
//! // In-memory store, default credential table
//! let log = RadioLog::in_memory();
//!
//! // Authenticate
//! let mut admin = log.login("admin", "admin123")?;
//!
//! // Upload (Admin only), comment, update status
//! log.upload(&mut admin, "Alpha 6", "Request resupply", Section::S4)?;
//! log.add_comment(&admin, 1, "acknowledged")?;
//! log.update_status(&admin, 1, Status::Completed)?;
//!
//! // Export (full-control roles)
//! let doc = log.export(&admin)?;
//! assert_eq!(doc.filename, "radio_logs_admin.xlsx");
//! ```
//!
//! ## Layers
//!
//! - [`RowStore`]: the remote tabular store contract (1-based rows, one
//!   header row); [`MemoryStore`] is the in-process reference backend
//! - [`MessageLog`]: the repository — every operation re-reads the full
//!   table before validating and acting
//! - [`CredentialStore`] and [`Operation`]: authentication and the
//!   permission matrix
//! - [`Session`]: per-session notification counter and refresh clock
//! - [`RadioLog`]: the facade tying the above together
//!
//! ## Identity
//!
//! Message ids are positional: id `k` is the 1-based position in the store's
//! append order at read time, and deletes shift later ids down. Every message
//! also carries a stable [`RowUid`] assigned at append; the `*_by_uid`
//! operations resolve it to the current position first.

#![warn(missing_docs)]

mod error;
mod export;
mod log;

pub mod prelude;

// Re-export main entry points
pub use crate::log::{RadioLog, RadioLogBuilder};
pub use error::{Error, Result};
pub use export::{export_filename, ExportDocument};

// Re-export the domain vocabulary and layer contracts
pub use radiolog_core::{Message, Role, RowUid, Section, Status, Version};
pub use radiolog_engine::{
    battalion_defaults, CredentialStore, MessageLog, Operation, Session, StaticCredentials,
    REFRESH_INTERVAL,
};
pub use radiolog_storage::{
    Column, MemoryStore, RowCells, RowStore, StoreError, StoreResult, StoredRow, HEADER,
};
