//! Spreadsheet export surface.
//!
//! Radiolog produces the data contract a spreadsheet formatter consumes:
//! filename, header, and string-rendered rows in insertion order. Byte-level
//! `.xlsx` encoding belongs to the presentation layer, not this crate.

use radiolog_core::Role;
use radiolog_storage::{StoredRow, HEADER};

/// Export filename for a role: `radio_logs_<role-lowercased>.xlsx`.
pub fn export_filename(role: Role) -> String {
    format!("radio_logs_{}.xlsx", role.as_str().to_lowercase())
}

/// A fully rendered export: same columns as the store, all rows, insertion
/// order. Feed this to whatever writes the actual spreadsheet bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Suggested filename, derived from the exporting role.
    pub filename: String,
    /// Column headers, in table order.
    pub columns: [&'static str; 6],
    /// One entry per message, cells as stored.
    pub rows: Vec<Vec<String>>,
}

impl ExportDocument {
    /// Render an export for `role` from a raw table snapshot.
    pub fn new(role: Role, rows: &[StoredRow]) -> Self {
        ExportDocument {
            filename: export_filename(role),
            columns: HEADER,
            rows: rows.iter().map(|row| row.cells.to_vec()).collect(),
        }
    }

    /// Number of data rows in the export.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the export holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
