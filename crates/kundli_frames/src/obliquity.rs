//! Mean obliquity of the ecliptic.
//!
//! Source: IAU 1980 polynomial (Lieske et al. 1977), as tabulated in Meeus,
//! "Astronomical Algorithms" (2nd ed), Eq. 22.2. Public domain.

/// Mean obliquity at J2000.0 in degrees (23 deg 26' 21.448").
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries since J2000.0.
///
/// `eps0 = 23°26'21.448" - 46.8150" T - 0.00059" T² + 0.001813" T³`
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    OBLIQUITY_J2000_DEG + (-46.8150 * t - 0.000_59 * t2 + 0.001_813 * t3) / 3600.0
}

/// Mean obliquity of the ecliptic in radians.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    mean_obliquity_deg(t).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn decreases_forward_in_time() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
        // ~ -0.013 deg/century
        let drift = mean_obliquity_deg(1.0) - mean_obliquity_deg(0.0);
        assert!((drift + 0.013).abs() < 0.001, "drift = {drift}");
    }

    #[test]
    fn rad_matches_deg() {
        let t = -0.1;
        assert!((mean_obliquity_rad(t) - mean_obliquity_deg(t).to_radians()).abs() < 1e-15);
    }
}
