//! Lahiri ayanamsa and tropical → sidereal conversion.
//!
//! The ayanamsa is the angular offset between the tropical zodiac (anchored
//! to the vernal equinox) and the sidereal zodiac (anchored to the fixed
//! stars). It grows as the equinox precesses westward: a J2000.0 reference
//! value plus the linear and quadratic general precession terms.

use kundli_frames::{general_precession_longitude_deg, normalize_360};
use kundli_time::jd_to_centuries;

use crate::system::ChartSystem;

/// Lahiri (Chitrapaksha) ayanamsa at J2000.0, in degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// Lahiri ayanamsa in degrees, `t` in Julian centuries since J2000.0.
pub fn lahiri_ayanamsha_deg(t: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_longitude_deg(t)
}

/// Lahiri ayanamsa at Julian Date `jd`.
pub fn ayanamsha_at_jd(jd: f64) -> f64 {
    lahiri_ayanamsha_deg(jd_to_centuries(jd))
}

/// Ayanamsa applied by `system`: `Some` for Vedic, `None` for Western.
pub fn ayanamsha_for(system: ChartSystem, jd: f64) -> Option<f64> {
    system.is_sidereal().then(|| ayanamsha_at_jd(jd))
}

/// Tropical → sidereal longitude at `jd`, in [0, 360).
pub fn to_sidereal(tropical_deg: f64, jd: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_at_jd(jd))
}

/// Longitude in the zodiac of `system`: sidereal for Vedic, unchanged
/// (normalized) for Western.
pub fn longitude_in_system(tropical_deg: f64, jd: f64, system: ChartSystem) -> f64 {
    match system {
        ChartSystem::Vedic => to_sidereal(tropical_deg, jd),
        ChartSystem::Western => normalize_360(tropical_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_time::J2000_JD;

    #[test]
    fn lahiri_at_j2000() {
        assert!((lahiri_ayanamsha_deg(0.0) - LAHIRI_J2000_DEG).abs() < 1e-15);
        assert!((ayanamsha_at_jd(J2000_JD) - LAHIRI_J2000_DEG).abs() < 1e-15);
    }

    #[test]
    fn precession_forward() {
        let diff = lahiri_ayanamsha_deg(1.0) - lahiri_ayanamsha_deg(0.0);
        // ~1.397 deg/century
        assert!((diff - 1.397).abs() < 0.01, "one century drift = {diff}");
    }

    #[test]
    fn lahiri_1990() {
        // 1990-06-15: about 23 deg 43'
        let aya = ayanamsha_at_jd(2_448_057.875);
        assert!((aya - 23.7197).abs() < 0.001, "aya = {aya}");
    }

    #[test]
    fn western_has_no_ayanamsha() {
        assert_eq!(ayanamsha_for(ChartSystem::Western, J2000_JD), None);
        assert_eq!(ayanamsha_for(ChartSystem::Vedic, J2000_JD), Some(LAHIRI_J2000_DEG));
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        let sid = to_sidereal(10.0, J2000_JD);
        assert!((sid - (370.0 - LAHIRI_J2000_DEG)).abs() < 1e-10);
    }

    #[test]
    fn western_only_normalizes() {
        assert_eq!(longitude_in_system(370.0, J2000_JD, ChartSystem::Western), 10.0);
    }
}
