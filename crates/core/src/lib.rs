//! Core types for the radiolog message log.
//!
//! This crate defines the fundamental vocabulary shared by every layer:
//! - [`Section`], [`Status`], [`Role`]: the fixed enumerations of the log
//! - [`Message`]: the sole domain entity
//! - [`RowUid`], [`Version`]: stable row identity and optimistic versioning
//! - timestamp formatting helpers matching the store's cell format

#![forbid(unsafe_code)]

pub mod error;
pub mod message;
pub mod timestamps;
pub mod types;

pub use error::DecodeError;
pub use message::{append_comment, comment_entry, Message};
pub use timestamps::{format_timestamp, now_local, parse_timestamp, TIMESTAMP_FORMAT};
pub use types::{Role, RowUid, Section, Status, Version};
