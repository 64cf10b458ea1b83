// crates/shared-kernel/src/value_objects/timestamp.rs
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// 比較可能な正規化済み時刻 (UNIX エポック秒)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochSeconds(i64);

impl EpochSeconds {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for EpochSeconds {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl PartialEq<i64> for EpochSeconds {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<EpochSeconds> for i64 {
    fn eq(&self, other: &EpochSeconds) -> bool {
        *self == other.0
    }
}

impl fmt::Display for EpochSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A time field as it appears in serialized data.
///
/// Records registered through the mobile app carry an integer epoch value, records from the
/// web app carry an ISO-8601 string. Both may appear in the same collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    EpochSeconds(i64),
    Iso(String),
}

impl TimeValue {
    pub fn as_time_ref(&self) -> TimeRef<'_> {
        match self {
            Self::EpochSeconds(secs) => TimeRef::EpochSeconds(*secs),
            Self::Iso(raw) => TimeRef::Iso(raw),
        }
    }

    /// Canonical epoch seconds for this value.
    pub fn normalize(&self) -> DomainResult<EpochSeconds> {
        normalize_time(self)
    }
}

impl Default for TimeValue {
    fn default() -> Self {
        Self::EpochSeconds(0)
    }
}

impl From<i64> for TimeValue {
    fn from(value: i64) -> Self {
        Self::EpochSeconds(value)
    }
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        Self::Iso(value.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        Self::Iso(value)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EpochSeconds(secs) => write!(f, "{secs}"),
            Self::Iso(raw) => f.write_str(raw),
        }
    }
}

/// Borrowed view over either time representation; the input of [`normalize_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRef<'a> {
    EpochSeconds(i64),
    Iso(&'a str),
}

impl From<i64> for TimeRef<'_> {
    fn from(value: i64) -> Self {
        Self::EpochSeconds(value)
    }
}

impl<'a> From<&'a str> for TimeRef<'a> {
    fn from(value: &'a str) -> Self {
        Self::Iso(value)
    }
}

impl<'a> From<&'a String> for TimeRef<'a> {
    fn from(value: &'a String) -> Self {
        Self::Iso(value.as_str())
    }
}

impl<'a> From<&'a TimeValue> for TimeRef<'a> {
    fn from(value: &'a TimeValue) -> Self {
        value.as_time_ref()
    }
}

/// Converts either time representation into epoch seconds.
///
/// ISO strings are parsed with their UTC offset respected; an instant with sub-second
/// precision is truncated toward zero, never rounded. Strings without an offset are read
/// as UTC. A string that cannot be parsed is reported as
/// [`DomainError::MalformedTimestamp`] instead of being coerced to a comparable value.
pub fn normalize_time<'a>(value: impl Into<TimeRef<'a>>) -> DomainResult<EpochSeconds> {
    match value.into() {
        TimeRef::EpochSeconds(secs) => Ok(EpochSeconds::new(secs)),
        TimeRef::Iso(raw) => {
            let instant = parse_iso(raw)?;
            // i64 division truncates toward zero, matching millisecond-to-second truncation.
            Ok(EpochSeconds::new(instant.timestamp_millis() / 1000))
        }
    }
}

/// Date-times carrying an offset. `%#z` takes `Z`, `+hh:mm`, `+hhmm` and `+hh`.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Date-times without an offset, read as UTC.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_iso(raw: &str) -> DomainResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS.iter().find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok()) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Some(naive) = LOCAL_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok()) {
        return Ok(naive.and_utc());
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(DomainError::MalformedTimestamp {
        value: raw.to_string(),
        details: "expected ISO 8601 date-time (offset optional, seconds optional) or YYYY-MM-DD".to_string(),
    })
}
