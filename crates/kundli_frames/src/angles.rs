//! Angle normalization.
//!
//! Every longitude in the pipeline passes through [`normalize_360`] and every
//! signed angular difference through [`wrap_180`], so boundary handling lives
//! in exactly one place.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0; that
/// case folds back to 0.0 so callers never see the upper bound.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize a time-of-day angle to [0, 24) hours.
pub fn normalize_hours(hours: f64) -> f64 {
    let r = hours.rem_euclid(24.0);
    if r >= 24.0 { 0.0 } else { r }
}

/// Wrap a signed angular difference to [-180, 180] degrees.
pub fn wrap_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(45.0, 45.0)]
    #[case(360.0, 0.0)]
    #[case(-10.0, 350.0)]
    #[case(730.0, 10.0)]
    #[case(-370.0, 350.0)]
    fn normalize_known(#[case] input: f64, #[case] expected: f64) {
        assert!((normalize_360(input) - expected).abs() < 1e-10, "{input} -> {}", normalize_360(input));
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn hours_wrap() {
        assert!((normalize_hours(25.5) - 1.5).abs() < 1e-12);
        assert!((normalize_hours(-0.5) - 23.5).abs() < 1e-12);
        assert!(normalize_hours(-1e-18) < 24.0);
    }

    #[rstest]
    #[case(10.0, 10.0)]
    #[case(190.0, -170.0)]
    #[case(-190.0, 170.0)]
    #[case(180.0, 180.0)]
    #[case(359.0, -1.0)]
    fn wrap_known(#[case] input: f64, #[case] expected: f64) {
        assert!((wrap_180(input) - expected).abs() < 1e-10, "{input} -> {}", wrap_180(input));
    }
}
