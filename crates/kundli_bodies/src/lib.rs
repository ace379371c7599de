//! Low-order geocentric longitude models for the chart bodies.
//!
//! Each body has one authoritative formula:
//! - Sun: mean longitude + two-term equation of centre
//! - Moon: mean longitude + 13 principal periodic terms (ELP2000-style)
//! - Mercury..Saturn: mean Keplerian elements + two-term equation of centre,
//!   projected to the geocentric ecliptic through the Sun model
//! - Rahu/Ketu: linear mean lunar node
//!
//! These are illustrative-chart models. Expect arc-minute accuracy for the
//! Sun, a few tenths of a degree for the Moon, and up to about a degree for
//! the planets. They are not an ephemeris.
//!
//! All functions are pure and return **tropical** longitudes in [0, 360).

pub mod body;
pub mod moon;
pub mod nodes;
pub mod planets;
pub mod sun;

pub use body::{ALL_BODIES, Body, CLASSICAL_BODIES, UnknownBody};
pub use moon::moon_longitude_deg;
pub use nodes::{mean_ketu_deg, mean_rahu_deg};
pub use planets::{OrbitalElements, geocentric_planet_longitude_deg, heliocentric_position};
pub use sun::{SolarPosition, sun_longitude_deg, sun_position};

use kundli_time::{UtcInstant, jd_to_centuries};

/// Tropical geocentric ecliptic longitude of `body` at Julian Date `jd` (UT).
pub fn tropical_longitude(body: Body, jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    match body {
        Body::Sun => sun_longitude_deg(t),
        Body::Moon => moon_longitude_deg(t),
        Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
            geocentric_planet_longitude_deg(body, t)
        }
        Body::Rahu => mean_rahu_deg(t),
        Body::Ketu => mean_ketu_deg(t),
    }
}

/// Tropical longitude of `body` at a UTC instant.
pub fn tropical_longitude_at(body: Body, instant: &UtcInstant) -> f64 {
    tropical_longitude(body, instant.to_julian_day())
}
