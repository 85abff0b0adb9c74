//! Small string and date helpers shared by the logger and the renderers.

use chrono::{DateTime, Local};

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a char
/// boundary) with an ellipsis and a count of the dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Render an ISO-8601 publication timestamp as a local calendar date.
///
/// Timestamps that do not parse are shown as-is.
pub fn published_date(published_at: &str) -> String {
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(ts) => ts.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        Err(_) => published_at.to_string(),
    }
}
