//! Permissive free-text date/time parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use zonewall_core::error::DomainError;

/// Formats tried in order for a full date/time reading.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Formats tried for a date-only reading (time defaults to midnight).
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses a free-text wall-clock reading into naive date/time fields.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeInput` when no known format
/// matches.
pub fn parse_nominal(input: &str) -> Result<NaiveDateTime, DomainError> {
    let trimmed = input.trim();

    // RFC 3339 first. The offset suffix is dropped: the wall-clock
    // fields as written are the reading, whatever zone marker the
    // client attached.
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_local());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
                return Ok(midnight);
            }
        }
    }

    Err(DomainError::InvalidTimeInput(format!(
        "unrecognized date/time: {trimmed:?}"
    )))
}
