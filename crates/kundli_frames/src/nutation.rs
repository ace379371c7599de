//! Low-order nutation model.
//!
//! Four-term approximation of nutation in longitude and obliquity, accurate
//! to about 0.5" in longitude and 0.1" in obliquity. Sufficient for the
//! equation of the equinoxes in apparent sidereal time.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22.

/// Nutation in longitude and obliquity, both in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude_arcsec: f64,
    /// Δε, nutation in obliquity.
    pub obliquity_arcsec: f64,
}

/// Compute nutation at `t` Julian centuries since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    // Mean longitude of the ascending node of the Moon
    let omega = (125.044_52 - 1934.136_261 * t).to_radians();
    // Mean longitudes of the Sun and Moon
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let longitude_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let obliquity_arcsec = 9.20 * omega.cos()
        + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        longitude_arcsec,
        obliquity_arcsec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amplitude_bounded() {
        for i in -100..=100 {
            let t = i as f64 * 0.01;
            let n = nutation(t);
            assert!(n.longitude_arcsec.abs() < 19.0, "dpsi = {}", n.longitude_arcsec);
            assert!(n.obliquity_arcsec.abs() < 10.5, "deps = {}", n.obliquity_arcsec);
        }
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: T = -0.127296372348
        // Meeus gives dpsi = -3.788", deps = +9.443" (full model)
        let n = nutation(-0.127_296_372_348);
        assert!((n.longitude_arcsec + 3.788).abs() < 0.5, "dpsi = {}", n.longitude_arcsec);
        assert!((n.obliquity_arcsec - 9.443).abs() < 0.1, "deps = {}", n.obliquity_arcsec);
    }
}
