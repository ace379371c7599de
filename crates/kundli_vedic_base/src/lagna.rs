//! Lagna (ascendant) computation.
//!
//! The rising degree is derived from local apparent sidereal time, the mean
//! obliquity of the ecliptic and the observer latitude:
//!
//! `Asc = atan2(sin θ · cos ε + tan φ · sin ε, cos θ)`
//!
//! where θ is the local sidereal angle. The ayanamsa is subtracted for
//! Vedic charts.
//!
//! Computation never fails. Inputs that leave the formula undefined (polar
//! latitude, non-finite values) produce [`Ascendant::Unknown`], which callers
//! must treat as "ascendant unavailable" and never as 0 deg Mesha.

use kundli_frames::{mean_obliquity_rad, normalize_360};
use kundli_time::{apparent_sidereal_time_hours, jd_to_centuries, local_sidereal_time_hours};

use crate::ayanamsha::longitude_in_system;
use crate::rashi::{Rashi, RashiInfo, rashi_from_longitude};
use crate::system::ChartSystem;

/// A computed ascendant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnaPosition {
    /// Longitude in the chart's zodiac, [0, 360).
    pub longitude_deg: f64,
    pub rashi: RashiInfo,
}

/// Ascendant, or the sentinel for an unavailable one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ascendant {
    Known(LagnaPosition),
    Unknown,
}

impl Ascendant {
    pub fn position(&self) -> Option<&LagnaPosition> {
        match self {
            Self::Known(p) => Some(p),
            Self::Unknown => None,
        }
    }

    pub fn rashi(&self) -> Option<Rashi> {
        self.position().map(|p| p.rashi.rashi)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Tropical ascendant longitude in degrees from a local sidereal time.
///
/// Returns `None` when the latitude is at or beyond a pole or any
/// intermediate value is non-finite.
pub fn ascendant_tropical_deg(lst_hours: f64, latitude_deg: f64, obliquity_rad: f64) -> Option<f64> {
    if !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0 {
        return None;
    }
    let theta = (lst_hours * 15.0).to_radians();
    let phi = latitude_deg.to_radians();
    let y = theta.sin() * obliquity_rad.cos() + phi.tan() * obliquity_rad.sin();
    let x = theta.cos();
    let asc = y.atan2(x).to_degrees();
    asc.is_finite().then(|| normalize_360(asc))
}

/// Local sidereal time in hours at Julian Date `jd` (UT) and east longitude.
pub fn local_sidereal_time_at(jd: f64, longitude_deg: f64) -> f64 {
    local_sidereal_time_hours(apparent_sidereal_time_hours(jd), longitude_deg)
}

/// Ascendant for a birth instant and place in the zodiac of `system`.
pub fn calculate_ascendant(
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    system: ChartSystem,
) -> Ascendant {
    if !jd.is_finite() || !longitude_deg.is_finite() {
        return Ascendant::Unknown;
    }
    let lst = local_sidereal_time_at(jd, longitude_deg);
    let eps = mean_obliquity_rad(jd_to_centuries(jd));
    match ascendant_tropical_deg(lst, latitude_deg, eps) {
        Some(tropical) => {
            let longitude_deg = longitude_in_system(tropical, jd, system);
            Ascendant::Known(LagnaPosition {
                longitude_deg,
                rashi: rashi_from_longitude(longitude_deg),
            })
        }
        None => Ascendant::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_frames::OBLIQUITY_J2000_DEG;

    const DELHI_JD: f64 = 2_448_057.875; // 1990-06-15 09:00 UTC

    #[test]
    fn equator_cardinal_points() {
        let eps = OBLIQUITY_J2000_DEG.to_radians();
        let a0 = ascendant_tropical_deg(0.0, 0.0, eps).unwrap();
        assert!(a0.abs() < 1e-9, "{a0}");
        let a6 = ascendant_tropical_deg(6.0, 0.0, eps).unwrap();
        assert!((a6 - 90.0).abs() < 1e-9, "{a6}");
        let a12 = ascendant_tropical_deg(12.0, 0.0, eps).unwrap();
        assert!((a12 - 180.0).abs() < 1e-9, "{a12}");
    }

    #[test]
    fn always_normalized() {
        let eps = OBLIQUITY_J2000_DEG.to_radians();
        for h in 0..48 {
            for lat in [-66.0, -30.0, 0.0, 28.6, 60.0] {
                let a = ascendant_tropical_deg(h as f64 * 0.5, lat, eps).unwrap();
                assert!((0.0..360.0).contains(&a), "lst {h} lat {lat}: {a}");
            }
        }
    }

    #[test]
    fn polar_and_nan_are_unknown() {
        assert_eq!(calculate_ascendant(DELHI_JD, 90.0, 0.0, ChartSystem::Vedic), Ascendant::Unknown);
        assert_eq!(calculate_ascendant(DELHI_JD, -91.0, 0.0, ChartSystem::Western), Ascendant::Unknown);
        assert_eq!(calculate_ascendant(f64::NAN, 28.0, 77.0, ChartSystem::Vedic), Ascendant::Unknown);
        assert_eq!(calculate_ascendant(DELHI_JD, 28.0, f64::INFINITY, ChartSystem::Vedic), Ascendant::Unknown);
        assert_eq!(Ascendant::Unknown.rashi(), None);
    }

    #[test]
    fn delhi_1990_tropical_and_sidereal() {
        let western = calculate_ascendant(DELHI_JD, 28.6139, 77.209, ChartSystem::Western);
        let vedic = calculate_ascendant(DELHI_JD, 28.6139, 77.209, ChartSystem::Vedic);
        let w = western.position().unwrap();
        let v = vedic.position().unwrap();
        assert!((w.longitude_deg - 112.47).abs() < 0.05, "western {}", w.longitude_deg);
        assert_eq!(w.rashi.rashi, Rashi::Karka);
        assert_eq!(v.rashi.rashi, Rashi::Mithuna);
        let shift = normalize_360(w.longitude_deg - v.longitude_deg);
        assert!((shift - 23.72).abs() < 0.01, "ayanamsa shift {shift}");
    }
}
