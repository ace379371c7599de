//! Retrograde detection by finite differences.
//!
//! A body's longitude is sampled at `jd - w`, `jd` and `jd + w` in the
//! chart's zodiac, with the ayanamsa taken at `jd` for all three samples so
//! Vedic and Western charts agree on the flag. The two consecutive deltas are wrapped to [-180, 180] and
//! the body is retrograde when both are negative. The Sun and Moon are never
//! retrograde; Rahu and Ketu are always retrograde by convention.

use kundli_bodies::{Body, tropical_longitude};
use kundli_frames::wrap_180;

use crate::longitude::CelestialLongitude;
use crate::system::ChartSystem;

/// Half-width of the sampling window, in days.
pub const DEFAULT_RETROGRADE_WINDOW_DAYS: f64 = 3.0;

/// Signed longitude changes `(before → now, now → after)` over the window.
pub fn longitude_deltas(body: Body, jd: f64, system: ChartSystem, window_days: f64) -> (f64, f64) {
    let zodiac = system.zodiac();
    let at = |t: f64| {
        CelestialLongitude::tropical(body, tropical_longitude(body, t))
            .to_zodiac(zodiac, jd)
            .degrees
    };
    let before = at(jd - window_days);
    let now = at(jd);
    let after = at(jd + window_days);
    (wrap_180(now - before), wrap_180(after - now))
}

/// Whether `body` is retrograde at `jd`.
pub fn is_retrograde(body: Body, jd: f64, system: ChartSystem, window_days: f64) -> bool {
    match body {
        Body::Sun | Body::Moon => false,
        Body::Rahu | Body::Ketu => true,
        _ => {
            let (d1, d2) = longitude_deltas(body, jd, system, window_days);
            d1 < 0.0 && d2 < 0.0
        }
    }
}
