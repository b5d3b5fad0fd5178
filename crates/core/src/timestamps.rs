//! Timestamp helpers matching the store's cell format.
//!
//! Timestamps are written once at append in the local clock's
//! `YYYY-MM-DD HH:MM:SS` form and never updated.

use crate::error::DecodeError;
use chrono::{Local, NaiveDateTime};

/// The cell format for timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local wall-clock time, truncated to seconds.
pub fn now_local() -> NaiveDateTime {
    // Reparse through the cell format so an appended message compares equal
    // to its own stored form.
    let formatted = Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string();
    NaiveDateTime::parse_from_str(&formatted, TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| Local::now().naive_local())
}

/// Render a timestamp in cell form.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp cell.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, DecodeError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::BadTimestamp(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_and_parse_roundtrip() {
        let ts = parse_timestamp("2024-05-17 08:30:00").unwrap();
        assert_eq!(format_timestamp(ts), "2024-05-17 08:30:00");
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        assert!(parse_timestamp("17/05/2024 08:30").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn now_local_has_no_subsecond_part() {
        let now = now_local();
        let reparsed = parse_timestamp(&format_timestamp(now)).unwrap();
        assert_eq!(now, reparsed, "append-time timestamps must equal their stored form");
    }
}
