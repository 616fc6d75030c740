//! Storage format for `admins` table timestamps.
//!
//! Timestamps are stored as TEXT in ISO-8601 form with a `T` separator and a
//! microsecond fraction, taken from the local wall clock. Reading is more
//! tolerant than writing: other writers of the same table (for example
//! SQLite's `CURRENT_TIMESTAMP` default) use a space separator and omit the
//! fraction, and those rows must still load.

use chrono::{Local, NaiveDateTime, Timelike};

/// Format written for `created_at` and `updated_at` columns.
pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Formats accepted when reading timestamps back, tried in order.
const READ_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Error returned when a stored timestamp cannot be interpreted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The text matched none of the accepted formats.
    #[error("unrecognized timestamp text: {0:?}")]
    Unrecognized(String),
}

/// The current local wall-clock time, without a timezone offset.
///
/// Truncated to microsecond precision so a value survives a trip through
/// the storage format unchanged.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(now.nanosecond() / 1000 * 1000)
        .unwrap_or(now)
}

/// Render a timestamp in the storage format.
#[must_use]
pub fn format(ts: NaiveDateTime) -> String {
    ts.format(STORAGE_FORMAT).to_string()
}

/// Parse a stored timestamp.
///
/// # Errors
///
/// Returns [`TimestampError::Unrecognized`] if the text matches none of the
/// accepted formats.
pub fn parse(s: &str) -> Result<NaiveDateTime, TimestampError> {
    for fmt in READ_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts);
        }
    }
    Err(TimestampError::Unrecognized(s.to_owned()))
}
