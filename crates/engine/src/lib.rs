//! Domain engine for radiolog.
//!
//! Three concerns live here, layered on the store adapter:
//! - [`MessageLog`]: the message repository (append, list, status update,
//!   comments, delete, unresolved counts, uid lookup)
//! - access control: [`CredentialStore`], [`StaticCredentials`], and the
//!   [`Operation`] permission matrix
//! - [`Session`]: per-session notification counter and refresh clock

#![forbid(unsafe_code)]

pub mod access;
pub mod error;
pub mod repository;
pub mod session;

pub use access::{battalion_defaults, CredentialStore, Operation, StaticCredentials};
pub use error::{LogError, LogResult};
pub use repository::{MessageLog, COMMENT_WRITE_ATTEMPTS};
pub use session::{Session, REFRESH_INTERVAL};
