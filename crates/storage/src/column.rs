//! The fixed column layout and row addressing of the shared table.
//!
//! Columns are 1-indexed and the table carries exactly one header row, so the
//! sheet row for message id `k` is `k + 1`. Both offsets are kept here and
//! nowhere else.

/// Number of header rows preceding the first data row.
pub const HEADER_ROWS: usize = 1;

/// Header row cell text, in column order.
pub const HEADER: [&str; 6] = ["Sender", "Message", "Section", "Status", "Timestamp", "Comment"];

/// A column of the shared table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Column 1: who transmitted the message.
    Sender,
    /// Column 2: the message body.
    Body,
    /// Column 3: the section tag.
    Section,
    /// Column 4: the workflow status.
    Status,
    /// Column 5: the append timestamp.
    Timestamp,
    /// Column 6: the comment cell.
    Comment,
}

impl Column {
    /// All columns, in table order.
    pub const ALL: [Column; 6] = [
        Column::Sender,
        Column::Body,
        Column::Section,
        Column::Status,
        Column::Timestamp,
        Column::Comment,
    ];

    /// 1-based column index, as the remote store addresses cells.
    pub fn index(&self) -> usize {
        match self {
            Column::Sender => 1,
            Column::Body => 2,
            Column::Section => 3,
            Column::Status => 4,
            Column::Timestamp => 5,
            Column::Comment => 6,
        }
    }

    /// Header text for this column.
    pub fn header(&self) -> &'static str {
        HEADER[self.index() - 1]
    }
}

/// Sheet row (1-based, header included) holding message id `id`.
pub fn sheet_row_for_id(id: usize) -> usize {
    id + HEADER_ROWS
}

/// Message id stored at a sheet row, or `None` for the header row.
pub fn id_for_sheet_row(row: usize) -> Option<usize> {
    row.checked_sub(HEADER_ROWS).filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_indices_are_one_based_and_dense() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i + 1);
        }
    }

    #[test]
    fn header_matches_store_schema() {
        assert_eq!(Column::Body.header(), "Message");
        assert_eq!(Column::Comment.header(), "Comment");
    }

    #[test]
    fn row_addressing_offsets_by_header() {
        assert_eq!(sheet_row_for_id(1), 2);
        assert_eq!(id_for_sheet_row(2), Some(1));
        assert_eq!(id_for_sheet_row(1), None, "row 1 is the header");
        assert_eq!(id_for_sheet_row(0), None);
    }
}
