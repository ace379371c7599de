//! Geocentric Moon.
//!
//! Mean longitude plus the 13 largest periodic terms of the ELP2000-82
//! longitude series as tabulated by Meeus, "Astronomical Algorithms"
//! (2nd ed), Table 47.A. The eccentricity factor E on solar-anomaly terms is
//! omitted. Typical error is a few tenths of a degree.

use kundli_frames::normalize_360;

/// Periodic terms: `[nD, nM, nM', nF, amplitude_deg]`.
///
/// D = mean elongation, M = solar mean anomaly, M' = lunar mean anomaly,
/// F = argument of latitude.
#[rustfmt::skip]
static TERMS: [[f64; 5]; 13] = [
    // nD   nM   nM'   nF    amplitude (deg)
    [ 0.0,  0.0,  1.0,  0.0,  6.288_774],
    [ 2.0,  0.0, -1.0,  0.0,  1.274_027],
    [ 2.0,  0.0,  0.0,  0.0,  0.658_314],
    [ 0.0,  0.0,  2.0,  0.0,  0.213_618],
    [ 0.0,  1.0,  0.0,  0.0, -0.185_116],
    [ 0.0,  0.0,  0.0,  2.0, -0.114_332],
    [ 2.0,  0.0, -2.0,  0.0,  0.058_793],
    [ 2.0, -1.0, -1.0,  0.0,  0.057_066],
    [ 2.0,  0.0,  1.0,  0.0,  0.053_322],
    [ 2.0, -1.0,  0.0,  0.0,  0.045_758],
    [ 0.0,  1.0, -1.0,  0.0, -0.040_923],
    [ 1.0,  0.0,  0.0,  0.0, -0.034_720],
    [ 0.0,  1.0,  1.0,  0.0, -0.030_383],
];

/// Tropical longitude of the Moon in degrees, [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let mean_longitude = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();

    let perturbation: f64 = TERMS
        .iter()
        .map(|term| {
            let arg = term[0] * d + term[1] * m + term[2] * mp + term[3] * f;
            term[4] * arg.sin()
        })
        .sum();

    normalize_360(mean_longitude + perturbation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: lambda = 133.162655 deg (full series)
        let lon = moon_longitude_deg(-0.077_221_081_451);
        assert!((lon - 133.162_655).abs() < 0.1, "lon = {lon}");
    }

    #[test]
    fn daily_motion_in_range() {
        // Moon moves roughly 11.8 to 15.4 deg per day
        for i in 0..60 {
            let t0 = i as f64 / 36_525.0;
            let t1 = t0 + 1.0 / 36_525.0;
            let step = normalize_360(moon_longitude_deg(t1) - moon_longitude_deg(t0));
            assert!((11.0..16.0).contains(&step), "day {i}: {step}");
        }
    }

    #[test]
    fn output_normalized() {
        for i in -50..50 {
            let lon = moon_longitude_deg(i as f64 * 0.037);
            assert!((0.0..360.0).contains(&lon), "lon = {lon}");
        }
    }
}
