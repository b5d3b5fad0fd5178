//! Convenient imports for radiolog users.
//!
//! ```ignore
//! use radiolog::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::export::{export_filename, ExportDocument};
pub use crate::log::{RadioLog, RadioLogBuilder};
pub use radiolog_core::{Message, Role, RowUid, Section, Status};
pub use radiolog_engine::{CredentialStore, Operation, Session, StaticCredentials};
pub use radiolog_storage::{MemoryStore, RowStore};
