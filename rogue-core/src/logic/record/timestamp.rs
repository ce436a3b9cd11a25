//! Detection timestamps
//!
//! The controller sends ISO-8601 strings, sometimes without an offset.
//! Offset-less values are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::constants::COOKIE_FORMAT;
use crate::error::{ReportError, ReportResult};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Parse a detection timestamp into UTC
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render an instant as `Sat, 01-Jun-2024 00:00:00 GMT`
pub fn to_cookie_string(instant: &DateTime<Utc>) -> String {
    instant.format(COOKIE_FORMAT).to_string()
}

/// Parse `value` and render it cookie-style, failing loudly on bad input
pub fn humanize(field: &'static str, value: &str) -> ReportResult<String> {
    parse_timestamp(value)
        .map(|instant| to_cookie_string(&instant))
        .ok_or_else(|| ReportError::MalformedTimestamp {
            field,
            value: value.to_string(),
        })
}
