//! Civil (wall-clock) date/time → UTC.
//!
//! Birth data arrives as a local date and clock time in the timezone of the
//! birth place. The zone is an IANA entry from `chrono-tz`, so historical
//! offsets and DST rules are applied for the birth date.

use chrono::{LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::utc_instant::UtcInstant;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TimeError::Missing("birth date"));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` or `HH:MM:SS` clock time.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TimeError::Missing("birth time"));
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}

/// Convert a local date and time in `zone` to a UTC instant.
///
/// Ambiguous local times (DST fall-back overlap) resolve to the earlier
/// instant. Local times inside a DST gap do not exist and are rejected.
pub fn civil_to_utc(date: NaiveDate, time: NaiveTime, zone: Tz) -> Result<UtcInstant, TimeError> {
    let local = date.and_time(time);
    let zoned = match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            return Err(TimeError::NonexistentLocalTime {
                local: local.to_string(),
                zone: zone.name().to_string(),
            });
        }
    };
    Ok(UtcInstant::from(zoned.with_timezone(&Utc)))
}
