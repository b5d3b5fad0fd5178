//! In-process reference backend.
//!
//! `MemoryStore` stands in for the remote spreadsheet in tests and embedded
//! use. It implements the full [`RowStore`] contract, including per-row
//! optimistic versions, behind a `parking_lot::RwLock`.

use crate::column::{Column, HEADER_ROWS};
use crate::error::{StoreError, StoreResult};
use crate::row::{RowCells, StoredRow};
use crate::store::RowStore;
use parking_lot::RwLock;
use radiolog_core::{RowUid, Version};
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory tabular store with stable uids and per-row versions.
///
/// Reads clone the table, matching the remote contract where every
/// `read_all` is a fresh full fetch. Uids are allocated from an atomic
/// counter and never reused, so they survive deletions of earlier rows.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<StoredRow>>,
    next_uid: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryStore {
            rows: RwLock::new(Vec::new()),
            next_uid: AtomicU64::new(1),
        }
    }

    /// Number of data rows currently present.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Whether the store holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Vec index for a sheet row, bounds-checked against `rows` data rows.
    fn data_index(row: usize, rows: usize) -> StoreResult<usize> {
        match row.checked_sub(HEADER_ROWS + 1) {
            Some(index) if index < rows => Ok(index),
            _ => Err(StoreError::RowOutOfBounds { row, rows }),
        }
    }
}

impl RowStore for MemoryStore {
    fn append(&self, cells: RowCells) -> StoreResult<RowUid> {
        let uid = RowUid::new(self.next_uid.fetch_add(1, Ordering::Relaxed));
        self.rows.write().push(StoredRow {
            uid,
            version: Version::initial(),
            cells,
        });
        Ok(uid)
    }

    fn read_all(&self) -> StoreResult<Vec<StoredRow>> {
        Ok(self.rows.read().clone())
    }

    fn read_cell(&self, row: usize, column: Column) -> StoreResult<String> {
        let rows = self.rows.read();
        let index = Self::data_index(row, rows.len())?;
        Ok(rows[index].cells.get(column).to_string())
    }

    fn write_cell(&self, row: usize, column: Column, value: &str) -> StoreResult<()> {
        let mut rows = self.rows.write();
        let index = Self::data_index(row, rows.len())?;
        let stored = &mut rows[index];
        stored.cells.set(column, value);
        stored.version = stored.version.next();
        Ok(())
    }

    fn write_cell_checked(
        &self,
        row: usize,
        column: Column,
        value: &str,
        expected: Version,
    ) -> StoreResult<()> {
        let mut rows = self.rows.write();
        let index = Self::data_index(row, rows.len())?;
        let stored = &mut rows[index];
        if stored.version != expected {
            return Err(StoreError::Conflict {
                row,
                expected,
                found: stored.version,
            });
        }
        stored.cells.set(column, value);
        stored.version = stored.version.next();
        Ok(())
    }

    fn delete_row(&self, row: usize) -> StoreResult<()> {
        let mut rows = self.rows.write();
        let index = Self::data_index(row, rows.len())?;
        rows.remove(index);
        Ok(())
    }
}
