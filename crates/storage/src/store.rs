//! The row-addressable store contract.

use crate::column::Column;
use crate::error::StoreResult;
use crate::row::{RowCells, StoredRow};
use radiolog_core::{RowUid, Version};

/// A remote tabular store, append-only by default, with row-addressable
/// read/update/delete.
///
/// Rows are addressed by 1-based sheet row, header row included: the sheet
/// row for message id `k` is `k + HEADER_ROWS`. All calls are synchronous
/// blocking remote calls; implementations keep no client-side cache, so every
/// [`read_all`](RowStore::read_all) reflects the table at call time.
///
/// Any call may fail with an undifferentiated remote error. The checked write
/// is the one operation with a defined concurrent-writer outcome; everything
/// else is last-writer-wins on the cell.
pub trait RowStore: Send + Sync {
    /// Append one data row. The store assigns and returns its stable uid.
    fn append(&self, cells: RowCells) -> StoreResult<RowUid>;

    /// Read the full table, in insertion order, header excluded.
    fn read_all(&self) -> StoreResult<Vec<StoredRow>>;

    /// Read one cell.
    fn read_cell(&self, row: usize, column: Column) -> StoreResult<String>;

    /// Overwrite one cell unconditionally. Last-writer-wins.
    fn write_cell(&self, row: usize, column: Column, value: &str) -> StoreResult<()>;

    /// Overwrite one cell only if the row version still matches `expected`.
    ///
    /// Fails with a retryable [`StoreError::Conflict`] when the row changed
    /// since the caller's read.
    ///
    /// [`StoreError::Conflict`]: crate::StoreError::Conflict
    fn write_cell_checked(
        &self,
        row: usize,
        column: Column,
        value: &str,
        expected: Version,
    ) -> StoreResult<()>;

    /// Remove one data row. Rows below it shift up by one.
    fn delete_row(&self, row: usize) -> StoreResult<()>;
}
