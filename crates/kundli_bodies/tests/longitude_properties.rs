//! Cross-body properties of the longitude models.

use kundli_bodies::{ALL_BODIES, Body, tropical_longitude};
use kundli_frames::{normalize_360, wrap_180};

/// Sweep from 1800 to 2200 in uneven steps.
fn sample_jds() -> impl Iterator<Item = f64> {
    (0..400).map(|i| 2_378_496.5 + i as f64 * 365.2422 + (i % 7) as f64 * 0.37)
}

#[test]
fn all_bodies_normalized() {
    for jd in sample_jds() {
        for &body in &ALL_BODIES {
            let lon = tropical_longitude(body, jd);
            assert!((0.0..360.0).contains(&lon), "{body:?} at {jd}: {lon}");
        }
    }
}

#[test]
fn ketu_always_opposes_rahu() {
    for jd in sample_jds() {
        let rahu = tropical_longitude(Body::Rahu, jd);
        let ketu = tropical_longitude(Body::Ketu, jd);
        assert!((normalize_360(ketu - rahu) - 180.0).abs() < 1e-9);
    }
}

#[test]
fn inner_planets_stay_near_sun() {
    // Greatest elongations: Mercury ~28 deg, Venus ~47 deg
    for jd in sample_jds() {
        let sun = tropical_longitude(Body::Sun, jd);
        let mercury = wrap_180(tropical_longitude(Body::Mercury, jd) - sun).abs();
        let venus = wrap_180(tropical_longitude(Body::Venus, jd) - sun).abs();
        assert!(mercury < 29.0, "Mercury elongation {mercury} at {jd}");
        assert!(venus < 48.5, "Venus elongation {venus} at {jd}");
    }
}

#[test]
fn deterministic() {
    let jd = 2_448_057.875;
    for &body in &ALL_BODIES {
        assert_eq!(tropical_longitude(body, jd), tropical_longitude(body, jd));
    }
}
