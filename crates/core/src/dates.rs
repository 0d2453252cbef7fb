//! Shoot date parsing.
//!
//! Dates arrive as ISO-8601 strings: a calendar date (`2025-01-20`, taken
//! as UTC midnight), a full RFC 3339 timestamp, or a date-time without an
//! offset (taken as UTC). Empty or absent values map to `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Parse an optional date string.
pub fn parse_optional(raw: Option<&str>) -> Result<Option<Timestamp>, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }

    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Some(local.and_utc()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| Some(date.and_time(chrono::NaiveTime::MIN).and_utc()))
        .map_err(|_| CoreError::Validation(format!("invalid date '{raw}'")))
}
