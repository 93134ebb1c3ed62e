//! Display formatting for API timestamps.

use chrono::DateTime;

/// Textual fallback rendered for unparseable timestamps.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an API timestamp for display.
///
/// Accepts RFC 3339 with either offset form — the API emits `+0000` without
/// a colon — and renders the long en-US form with two-digit 12-hour time,
/// in the timestamp's own offset. Malformed input renders the literal
/// [`INVALID_DATE`] fallback.
///
/// # Examples
/// ```
/// use client::presentation::display_date;
///
/// assert_eq!(display_date("2015-03-21T14:30:00+0000"), "March 21, 2015, 02:30 PM");
/// assert_eq!(display_date("not a date"), "Invalid Date");
/// ```
#[must_use]
pub fn display_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .map_or_else(
            |_| INVALID_DATE.to_owned(),
            |timestamp| timestamp.format("%B %-d, %Y, %I:%M %p").to_string(),
        )
}
