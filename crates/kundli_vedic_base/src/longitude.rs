//! Zodiac-tagged body longitudes.
//!
//! A bare degree value does not say which zodiac it is measured in. The
//! chart pipeline carries [`CelestialLongitude`] instead, so a tropical value
//! can never be read as a sidereal one.

use kundli_bodies::{Body, tropical_longitude};
use kundli_frames::normalize_360;
use serde::{Deserialize, Serialize};

use crate::ayanamsha::ayanamsha_at_jd;
use crate::system::ChartSystem;

/// Reference frame of an ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zodiac {
    /// Measured from the vernal equinox.
    Tropical,
    /// Measured from the fixed stars (Lahiri).
    Sidereal,
}

impl Zodiac {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tropical => "tropical",
            Self::Sidereal => "sidereal",
        }
    }
}

impl std::fmt::Display for Zodiac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Longitude of one body, tagged with its zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialLongitude {
    pub body: Body,
    /// Degrees in [0, 360).
    pub degrees: f64,
    pub zodiac: Zodiac,
}

impl CelestialLongitude {
    pub fn new(body: Body, degrees: f64, zodiac: Zodiac) -> Self {
        Self {
            body,
            degrees: normalize_360(degrees),
            zodiac,
        }
    }

    pub fn tropical(body: Body, degrees: f64) -> Self {
        Self::new(body, degrees, Zodiac::Tropical)
    }

    pub fn sidereal(body: Body, degrees: f64) -> Self {
        Self::new(body, degrees, Zodiac::Sidereal)
    }

    /// Re-express in `zodiac` using the ayanamsa at `jd`.
    pub fn to_zodiac(self, zodiac: Zodiac, jd: f64) -> Self {
        let degrees = match (self.zodiac, zodiac) {
            (Zodiac::Tropical, Zodiac::Sidereal) => self.degrees - ayanamsha_at_jd(jd),
            (Zodiac::Sidereal, Zodiac::Tropical) => self.degrees + ayanamsha_at_jd(jd),
            _ => self.degrees,
        };
        Self::new(self.body, degrees, zodiac)
    }
}

/// Longitude of `body` at `jd` in the zodiac of `system`.
pub fn celestial_longitude(body: Body, jd: f64, system: ChartSystem) -> CelestialLongitude {
    CelestialLongitude::tropical(body, tropical_longitude(body, jd)).to_zodiac(system.zodiac(), jd)
}
