//! Date formatting for cards and detail panels.
//!
//! API dates arrive as plain dates (`2023-01-01`) or full RFC 3339
//! timestamps. Anything else is shown as-is.

use chrono::{DateTime, NaiveDate};

/// Parse a date or timestamp string into a calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // "2023-01-01T00:00:00" without an offset
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Short form used on cards: `Jan 2023`.
pub fn short_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Long form used in detail panels: `January 1, 2023`.
pub fn long_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}
