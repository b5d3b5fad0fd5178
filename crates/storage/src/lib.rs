//! Store adapter for radiolog.
//!
//! This crate abstracts the shared tabular store the message log lives in:
//! - [`RowStore`]: the row-addressable read/update/delete contract
//! - [`Column`]: the fixed six-column layout, with 1-based addressing and a
//!   single header row
//! - [`RowCells`] / [`StoredRow`]: cell text plus store-assigned identity and
//!   version
//! - [`MemoryStore`]: in-process reference backend with optimistic per-row
//!   versioning
//!
//! Every repository read re-fetches the full table through [`RowStore`];
//! nothing in this crate caches.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod column;
pub mod error;
pub mod memory;
pub mod row;
pub mod store;

pub use column::{id_for_sheet_row, sheet_row_for_id, Column, HEADER, HEADER_ROWS};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use row::{decode_message, RowCells, StoredRow};
pub use store::RowStore;
