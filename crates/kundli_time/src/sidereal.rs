//! Greenwich and local sidereal time.
//!
//! Sources:
//! - GMST: IAU 1982 expression, Meeus "Astronomical Algorithms" Eq. 12.4.
//! - Apparent sidereal time adds the equation of the equinoxes
//!   `Δψ·cos ε` (Meeus Ch. 12), with nutation from `kundli_frames`.
//!
//! Inputs are Julian Dates in UT. The civil UTC instant is used directly;
//! the sub-second UT1−UTC difference is below the accuracy of the body models.

use kundli_frames::{mean_obliquity_deg, normalize_360, normalize_hours, nutation};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·D + 0.000387933·T² − T³/38710000
/// where D = JD − 2451545.0 and T = D / 36525.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_360(theta)
}

/// Greenwich Apparent Sidereal Time in degrees, range [0, 360).
pub fn apparent_sidereal_time_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let nut = nutation(t);
    let true_eps = (mean_obliquity_deg(t) + nut.obliquity_arcsec / 3600.0).to_radians();
    let equation_of_equinoxes_deg = nut.longitude_arcsec / 3600.0 * true_eps.cos();
    normalize_360(gmst_deg(jd_ut) + equation_of_equinoxes_deg)
}

/// Greenwich Apparent Sidereal Time in hours, range [0, 24).
pub fn apparent_sidereal_time_hours(jd_ut: f64) -> f64 {
    normalize_hours(apparent_sidereal_time_deg(jd_ut) / 15.0)
}

/// Local sidereal time in hours from GAST and observer east longitude.
pub fn local_sidereal_time_hours(gast_hours: f64, longitude_east_deg: f64) -> f64 {
    normalize_hours(gast_hours + longitude_east_deg / 15.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_meeus_12a() {
        // 1987 April 10, 0h UT: GMST = 13h10m46.3668s = 197.693195 deg
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-5, "GMST = {g}");
    }

    #[test]
    fn gmst_meeus_12b() {
        // 1987 April 10, 19h21m00s UT: GMST = 128.7378734 deg
        let g = gmst_deg(2_446_896.306_25);
        assert!((g - 128.737_873_4).abs() < 1e-5, "GMST = {g}");
    }

    #[test]
    fn apparent_meeus_12a() {
        // Apparent: 13h10m46.1351s = 197.692230 deg
        let g = apparent_sidereal_time_deg(2_446_895.5);
        assert!((g - 197.692_23).abs() < 5e-5, "GAST = {g}");
    }

    #[test]
    fn hours_in_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5, 2_415_020.0] {
            let h = apparent_sidereal_time_hours(jd);
            assert!((0.0..24.0).contains(&h), "GAST out of range: {h}");
        }
    }

    #[test]
    fn lst_east_offset() {
        // 90 deg east = +6h
        assert!((local_sidereal_time_hours(20.0, 90.0) - 2.0).abs() < 1e-12);
        assert!((local_sidereal_time_hours(1.0, -30.0) - 23.0).abs() < 1e-12);
    }

    #[test]
    fn sidereal_day_shorter_than_solar() {
        // GMST advances ~0.9856 deg per solar day
        let g1 = gmst_deg(2_451_545.0);
        let g2 = gmst_deg(2_451_546.0);
        let diff = normalize_360(g2 - g1);
        assert!((diff - 0.985_647).abs() < 1e-4, "daily advance = {diff}");
    }
}
