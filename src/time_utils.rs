// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting and parsing.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format elapsed seconds as `MM:SS` for the session timer display.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Extract the calendar date from a stored RFC3339 timestamp.
///
/// Returns `None` for empty or unparsable values (e.g. the initial
/// `lastWorkoutDate` of a fresh stats document).
pub fn parse_stored_date(timestamp: &str) -> Option<NaiveDate> {
    if timestamp.is_empty() {
        return None;
    }
    timestamp
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}
