//! Mean lunar nodes (Rahu/Ketu).
//!
//! Rahu is the Moon's mean ascending node, regressing about 19.34° per
//! year. Ketu is the descending node, always Rahu + 180°.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 47.7, linear term.

use kundli_frames::normalize_360;

/// Mean Rahu (ascending node) ecliptic longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_360(125.044_52 - 1934.136_261 * t)
}

/// Mean Ketu (descending node) ecliptic longitude in degrees [0, 360).
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}
