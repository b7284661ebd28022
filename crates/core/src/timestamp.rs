//! Local/GMT timestamp pairs.
//!
//! Typo stores naive local time. WordPress wants the same instant twice: once
//! as local time and once in a `*_gmt` column. The GMT value is always the
//! local value plus [`GMT_OFFSET_HOURS`].

use chrono::{Duration, NaiveDateTime};

use crate::constants::GMT_OFFSET_HOURS;
use crate::error::{CoreError, Result};

const WRITE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a timestamp as returned by the source database in text form.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|source| CoreError::InvalidTimestamp { value: value.to_owned(), source })
}

/// Render a timestamp the way WordPress stores `DATETIME` columns.
#[must_use]
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(WRITE_FORMAT).to_string()
}

/// A local timestamp together with its derived GMT counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePair {
    pub local: NaiveDateTime,
    pub gmt: NaiveDateTime,
}

impl DatePair {
    #[must_use]
    pub fn from_local(local: NaiveDateTime) -> Self {
        Self { local, gmt: local + Duration::hours(GMT_OFFSET_HOURS) }
    }
}
