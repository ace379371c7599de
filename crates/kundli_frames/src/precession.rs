//! General precession in ecliptic longitude.
//!
//! The accumulated westward motion of the vernal equinox since J2000.0,
//! truncated to its linear and quadratic terms. This drives the ayanamsha.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IAU 2006), Table 1.

/// General precession in ecliptic longitude, in arcseconds.
///
/// `t` = Julian centuries since J2000.0. The linear term is
/// ~5028.80"/century (≈ 1.3969°/century).
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    5028.796_195 * t + 1.105_434_8 * t * t
}

/// General precession in ecliptic longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn one_century_approx() {
        let p = general_precession_longitude_arcsec(1.0);
        assert!((p - 5029.90).abs() < 1.0, "p_A(1.0) = {p}");
    }

    #[test]
    fn rate_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn deg_conversion_consistent() {
        let t = 0.5;
        let arcsec = general_precession_longitude_arcsec(t);
        assert!((general_precession_longitude_deg(t) - arcsec / 3600.0).abs() < 1e-15);
    }
}
