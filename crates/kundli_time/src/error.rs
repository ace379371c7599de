//! Error types for civil-time parsing and conversion.

use thiserror::Error;

/// Errors from parsing a birth date/time or placing it in a timezone.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A required field was empty.
    #[error("missing {0}")]
    Missing(&'static str),
    /// Date string did not parse as `YYYY-MM-DD`.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Time string did not parse as `HH:MM` or `HH:MM:SS`.
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    /// Local wall-clock time falls in a DST gap of the zone.
    #[error("local time {local} does not exist in timezone {zone}")]
    NonexistentLocalTime { local: String, zone: String },
}
