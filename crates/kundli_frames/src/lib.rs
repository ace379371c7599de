//! Angle and ecliptic-frame helpers shared by the kundli pipeline.
//!
//! Provides angle normalization, the mean obliquity of the ecliptic, a
//! low-order nutation model (for apparent sidereal time), and the general
//! precession polynomial used by the ayanamsha.

pub mod angles;
pub mod nutation;
pub mod obliquity;
pub mod precession;

pub use angles::{normalize_360, normalize_hours, wrap_180};
pub use nutation::{Nutation, nutation};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, mean_obliquity_rad};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
