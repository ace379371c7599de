//! Time conversions for birth-chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - Julian centuries since J2000.0
//! - Greenwich mean/apparent and local sidereal time
//! - `UtcInstant`, the UTC representation handed to every downstream stage
//! - Civil (local wall-clock) date/time → UTC conversion through IANA zones

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_instant;

pub use civil::{civil_to_utc, parse_clock_time, parse_date};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{
    apparent_sidereal_time_deg, apparent_sidereal_time_hours, gmst_deg, local_sidereal_time_hours,
};
pub use utc_instant::UtcInstant;
