// src/util/text.rs
use chrono::{DateTime, Utc};

/// Shorten note content for a list card.
///
/// Content longer than `limit` characters is cut at `limit` characters and
/// `...` is appended; shorter content is returned unchanged.
///
/// # Examples
///
/// ```
/// use ainotes::util::text::truncate_preview;
///
/// assert_eq!(truncate_preview("milk, eggs", 100), "milk, eggs");
/// assert_eq!(truncate_preview("abcdef", 3), "abc...");
/// ```
pub fn truncate_preview(content: &str, limit: usize) -> String {
    match content.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// Date only, as shown on list cards: `Mar 1, 2024`.
pub fn format_short_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Date and time, as shown on the detail view: `March 1, 2024 at 10:15 AM UTC`.
pub fn format_long_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y at %I:%M %p UTC").to_string()
}
