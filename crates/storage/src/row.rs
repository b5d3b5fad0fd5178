//! Row cell text and its mapping to the message model.

use crate::column::Column;
use radiolog_core::{
    format_timestamp, parse_timestamp, DecodeError, Message, RowUid, Section, Status, Version,
};
use serde::{Deserialize, Serialize};

/// The six cells of one data row, as stored.
///
/// Cells are plain text; the fixed vocabularies (section, status, timestamp
/// format) are enforced on decode, not here, because a shared table can be
/// written by foreign clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCells {
    /// Column 1.
    pub sender: String,
    /// Column 2.
    pub body: String,
    /// Column 3.
    pub section: String,
    /// Column 4.
    pub status: String,
    /// Column 5.
    pub timestamp: String,
    /// Column 6.
    pub comment: String,
}

impl RowCells {
    /// Cells for a freshly appended message: current timestamp already
    /// rendered, empty comment.
    pub fn new_message(
        sender: &str,
        body: &str,
        section: Section,
        status: Status,
        timestamp: chrono::NaiveDateTime,
    ) -> Self {
        RowCells {
            sender: sender.to_string(),
            body: body.to_string(),
            section: section.as_str().to_string(),
            status: status.as_str().to_string(),
            timestamp: format_timestamp(timestamp),
            comment: String::new(),
        }
    }

    /// Read one cell.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Sender => &self.sender,
            Column::Body => &self.body,
            Column::Section => &self.section,
            Column::Status => &self.status,
            Column::Timestamp => &self.timestamp,
            Column::Comment => &self.comment,
        }
    }

    /// Overwrite one cell.
    pub fn set(&mut self, column: Column, value: &str) {
        let cell = match column {
            Column::Sender => &mut self.sender,
            Column::Body => &mut self.body,
            Column::Section => &mut self.section,
            Column::Status => &mut self.status,
            Column::Timestamp => &mut self.timestamp,
            Column::Comment => &mut self.comment,
        };
        *cell = value.to_string();
    }

    /// Cells in column order, for tabular export.
    pub fn to_vec(&self) -> Vec<String> {
        Column::ALL.iter().map(|c| self.get(*c).to_string()).collect()
    }
}

/// A data row as returned by a full-table read: cell text plus the
/// store-assigned identity and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRow {
    /// Stable identity assigned at append.
    pub uid: RowUid,
    /// Optimistic-concurrency token, bumped on every cell write.
    pub version: Version,
    /// The six cells.
    pub cells: RowCells,
}

/// Decode a stored row into a [`Message`] at position `id`.
pub fn decode_message(id: usize, row: &StoredRow) -> Result<Message, DecodeError> {
    Ok(Message {
        id,
        uid: row.uid,
        sender: row.cells.sender.clone(),
        body: row.cells.body.clone(),
        section: row.cells.section.parse()?,
        status: row.cells.status.parse()?,
        timestamp: parse_timestamp(&row.cells.timestamp)?,
        comment: row.cells.comment.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiolog_core::parse_timestamp;

    fn sample_row() -> StoredRow {
        let ts = parse_timestamp("2024-05-17 08:30:00").unwrap();
        StoredRow {
            uid: RowUid::new(7),
            version: Version::initial(),
            cells: RowCells::new_message("Alice", "radio check", Section::S3, Status::Logged, ts),
        }
    }

    #[test]
    fn new_message_cells_render_vocabulary() {
        let row = sample_row();
        assert_eq!(row.cells.section, "S3");
        assert_eq!(row.cells.status, "Logged");
        assert_eq!(row.cells.timestamp, "2024-05-17 08:30:00");
        assert!(row.cells.comment.is_empty());
    }

    #[test]
    fn decode_restores_message_fields() {
        let row = sample_row();
        let msg = decode_message(4, &row).unwrap();
        assert_eq!(msg.id, 4);
        assert_eq!(msg.uid, RowUid::new(7));
        assert_eq!(msg.section, Section::S3);
        assert_eq!(msg.status, Status::Logged);
        assert_eq!(msg.sender, "Alice");
    }

    #[test]
    fn decode_rejects_foreign_cell_text() {
        let mut row = sample_row();
        row.cells.status = "Pending".to_string();
        assert!(matches!(decode_message(1, &row), Err(DecodeError::UnknownStatus(_))));

        let mut row = sample_row();
        row.cells.timestamp = "yesterday".to_string();
        assert!(matches!(decode_message(1, &row), Err(DecodeError::BadTimestamp(_))));
    }

    #[test]
    fn get_set_cover_every_column() {
        let mut cells = RowCells::default();
        for column in Column::ALL {
            cells.set(column, column.header());
            assert_eq!(cells.get(column), column.header());
        }
        assert_eq!(cells.to_vec(), crate::column::HEADER.to_vec());
    }
}
