//! Geocentric Sun.
//!
//! Mean longitude plus a two-term equation of centre built from the mean
//! anomaly and the eccentricity of Earth's orbit (all polynomials in Julian
//! centuries). Source: Meeus, "Astronomical Algorithms" (2nd ed), Ch. 25.

use kundli_frames::normalize_360;

/// Semi-major axis of Earth's orbit in AU.
const EARTH_SEMI_MAJOR_AU: f64 = 1.000_001_018;

/// Geocentric solar quantities at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// True (geometric) tropical longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Mean anomaly in degrees, [0, 360).
    pub mean_anomaly_deg: f64,
    /// Earth–Sun distance in AU.
    pub radius_au: f64,
}

/// Solar position at `t` Julian centuries since J2000.0.
pub fn sun_position(t: f64) -> SolarPosition {
    let t2 = t * t;
    let mean_longitude = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let mean_anomaly = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m = mean_anomaly.to_radians();
    let center_rad = (2.0 * e - e * e * e / 4.0) * m.sin() + 1.25 * e * e * (2.0 * m).sin();
    let true_anomaly = m + center_rad;

    SolarPosition {
        longitude_deg: normalize_360(mean_longitude + center_rad.to_degrees()),
        mean_anomaly_deg: normalize_360(mean_anomaly),
        radius_au: EARTH_SEMI_MAJOR_AU * (1.0 - e * e) / (1.0 + e * true_anomaly.cos()),
    }
}

/// Tropical longitude of the Sun in degrees, [0, 360).
pub fn sun_longitude_deg(t: f64) -> f64 {
    sun_position(t).longitude_deg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD: true longitude 199.90988 deg, R = 0.99766 AU
        let p = sun_position(-0.072_183_436);
        assert!((p.longitude_deg - 199.909_88).abs() < 0.005, "lon = {}", p.longitude_deg);
        assert!((p.radius_au - 0.997_66).abs() < 1e-4, "R = {}", p.radius_au);
    }

    #[test]
    fn radius_between_perihelion_and_aphelion() {
        for i in 0..365 {
            let t = i as f64 / 36_525.0;
            let r = sun_position(t).radius_au;
            assert!((0.983..=1.0168).contains(&r), "R = {r}");
        }
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let a = sun_longitude_deg(0.0);
        let b = sun_longitude_deg(1.0 / 36_525.0);
        let step = normalize_360(b - a);
        assert!((0.95..1.02).contains(&step), "daily motion = {step}");
    }
}
