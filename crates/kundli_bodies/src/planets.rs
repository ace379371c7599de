//! Geocentric longitudes of Mercury, Venus, Mars, Jupiter and Saturn.
//!
//! Each planet is a mean Keplerian orbit: mean longitude and longitude of
//! perihelion linear in Julian centuries, fixed eccentricity and semi-major
//! axis. A two-term equation of centre gives the heliocentric longitude and
//! radius, which are then seen from Earth (placed opposite the Sun model)
//! in the ecliptic plane. Orbital inclinations are ignored.
//!
//! Element values: Standish (1992) mean elements for J2000.0, as tabulated
//! in Meeus, "Astronomical Algorithms" (2nd ed), Table 31.A.

use kundli_frames::normalize_360;

use crate::body::Body;
use crate::sun::sun_position;

/// Mean orbital elements of one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Mean longitude at J2000.0 (deg).
    pub mean_longitude_j2000: f64,
    /// Mean longitude rate (deg per Julian century).
    pub mean_longitude_rate: f64,
    /// Longitude of perihelion at J2000.0 (deg).
    pub perihelion_j2000: f64,
    /// Longitude of perihelion rate (deg per Julian century).
    pub perihelion_rate: f64,
    /// Orbital eccentricity.
    pub eccentricity: f64,
    /// Semi-major axis (AU).
    pub semi_major_au: f64,
}

impl OrbitalElements {
    /// Elements for a planet body. `None` for the Sun, Moon and nodes.
    pub const fn for_body(body: Body) -> Option<Self> {
        match body {
            Body::Mercury => Some(MERCURY),
            Body::Venus => Some(VENUS),
            Body::Mars => Some(MARS),
            Body::Jupiter => Some(JUPITER),
            Body::Saturn => Some(SATURN),
            Body::Sun | Body::Moon | Body::Rahu | Body::Ketu => None,
        }
    }
}

const MERCURY: OrbitalElements = OrbitalElements {
    mean_longitude_j2000: 252.250_906,
    mean_longitude_rate: 149_472.674_635_8,
    perihelion_j2000: 77.456_119,
    perihelion_rate: 0.158_864_3,
    eccentricity: 0.205_631_75,
    semi_major_au: 0.387_098_310,
};

const VENUS: OrbitalElements = OrbitalElements {
    mean_longitude_j2000: 181.979_801,
    mean_longitude_rate: 58_517.815_676_0,
    perihelion_j2000: 131.563_707,
    perihelion_rate: 0.004_864_6,
    eccentricity: 0.006_771_88,
    semi_major_au: 0.723_329_820,
};

const MARS: OrbitalElements = OrbitalElements {
    mean_longitude_j2000: 355.433_275,
    mean_longitude_rate: 19_140.299_331_3,
    perihelion_j2000: 336.060_234,
    perihelion_rate: 0.443_889_8,
    eccentricity: 0.093_400_62,
    semi_major_au: 1.523_679_342,
};

const JUPITER: OrbitalElements = OrbitalElements {
    mean_longitude_j2000: 34.351_484,
    mean_longitude_rate: 3034.905_674_6,
    perihelion_j2000: 14.331_309,
    perihelion_rate: 0.215_552_5,
    eccentricity: 0.048_494_85,
    semi_major_au: 5.202_603_191,
};

const SATURN: OrbitalElements = OrbitalElements {
    mean_longitude_j2000: 50.077_471,
    mean_longitude_rate: 1222.113_794_3,
    perihelion_j2000: 93.056_787,
    perihelion_rate: 0.566_549_6,
    eccentricity: 0.055_508_62,
    semi_major_au: 9.554_909_596,
};

/// Heliocentric `(longitude_deg, radius_au)` from mean elements.
///
/// `t` = Julian centuries since J2000.0.
pub fn heliocentric_position(elements: &OrbitalElements, t: f64) -> (f64, f64) {
    let e = elements.eccentricity;
    let mean_longitude = elements.mean_longitude_j2000 + elements.mean_longitude_rate * t;
    let perihelion = elements.perihelion_j2000 + elements.perihelion_rate * t;
    let m = (mean_longitude - perihelion).to_radians();

    let center_rad = (2.0 * e - e * e * e / 4.0) * m.sin() + 1.25 * e * e * (2.0 * m).sin();
    let true_anomaly = m + center_rad;
    let radius = elements.semi_major_au * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    (normalize_360(mean_longitude + center_rad.to_degrees()), radius)
}

/// Tropical geocentric longitude of a planet in degrees, [0, 360).
///
/// Bodies without orbital elements fall back to the Sun's longitude;
/// [`crate::tropical_longitude`] only dispatches the five planets here.
pub fn geocentric_planet_longitude_deg(body: Body, t: f64) -> f64 {
    let Some(elements) = OrbitalElements::for_body(body) else {
        return sun_position(t).longitude_deg;
    };
    let (helio_lon, radius) = heliocentric_position(&elements, t);
    let sun = sun_position(t);

    // Earth sits at sun_lon + 180, so planet − Earth = planet + Sun vector.
    let (hl, sl) = (helio_lon.to_radians(), sun.longitude_deg.to_radians());
    let x = radius * hl.cos() + sun.radius_au * sl.cos();
    let y = radius * hl.sin() + sun.radius_au * sl.sin();
    normalize_360(y.atan2(x).to_degrees())
}
