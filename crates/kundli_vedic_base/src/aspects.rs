//! Angular aspects between chart bodies.
//!
//! The separation of two bodies is the shorter arc between them, in
//! [0, 180]. It is matched against five named aspects in the order
//! conjunction, sextile, square, trine, opposition; the first whose orb
//! contains the separation wins. Rahu and Ketu are always exactly opposed,
//! so that pair is skipped.

use kundli_bodies::Body;
use kundli_frames::wrap_180;
use serde::{Deserialize, Serialize};

use crate::placement::Placement;

/// The five named aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Matching order.
pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }

    /// Exact angle of the aspect in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// Fallback influence text when no pair-specific entry exists.
    pub const fn generic_influence(self) -> &'static str {
        match self {
            Self::Conjunction => "The two energies merge and intensify each other.",
            Self::Sextile => "A supportive opening; cooperation comes with a little effort.",
            Self::Square => "Friction between the two drives action and growth.",
            Self::Trine => "Easy, harmonious flow that shows up as natural talent.",
            Self::Opposition => "A polarity worked out through others; balance is needed.",
        }
    }
}

/// Orb tolerance per aspect, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectOrbs {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
}

impl Default for AspectOrbs {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            sextile: 6.0,
            square: 7.0,
            trine: 8.0,
            opposition: 8.0,
        }
    }
}

impl AspectOrbs {
    pub const fn orb(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Sextile => self.sextile,
            AspectKind::Square => self.square,
            AspectKind::Trine => self.trine,
            AspectKind::Opposition => self.opposition,
        }
    }
}

/// An aspect found between two bodies. `first` precedes `second` in chart
/// order, whatever order they were passed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    pub first: Body,
    pub second: Body,
    pub kind: AspectKind,
    /// Shorter-arc separation, [0, 180].
    pub separation_deg: f64,
    /// Distance from exactness, `|separation - angle|`.
    pub orb_deg: f64,
    pub influence: &'static str,
}

/// Shorter-arc angular separation of two longitudes, in [0, 180].
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    wrap_180(a_deg - b_deg).abs()
}

/// First aspect whose orb contains `separation_deg`.
pub fn match_aspect(separation_deg: f64, orbs: &AspectOrbs) -> Option<AspectKind> {
    ALL_ASPECT_KINDS
        .into_iter()
        .find(|&k| (separation_deg - k.angle_deg()).abs() <= orbs.orb(k))
}

/// Aspect between two bodies at the given longitudes, if any.
pub fn aspect_between(
    a: (Body, f64),
    b: (Body, f64),
    orbs: &AspectOrbs,
) -> Option<Aspect> {
    let ((first, lon1), (second, lon2)) = if a.0 <= b.0 { (a, b) } else { (b, a) };
    let separation_deg = angular_separation(lon1, lon2);
    let kind = match_aspect(separation_deg, orbs)?;
    Some(Aspect {
        first,
        second,
        kind,
        separation_deg,
        orb_deg: (separation_deg - kind.angle_deg()).abs(),
        influence: influence(first, second, kind),
    })
}

/// All aspects among `placements`, pairs in placement order.
pub fn find_aspects(placements: &[Placement], orbs: &AspectOrbs) -> Vec<Aspect> {
    let mut out = Vec::new();
    for (i, p) in placements.iter().enumerate() {
        for q in &placements[i + 1..] {
            if p.body.is_node() && q.body.is_node() {
                continue;
            }
            if let Some(a) = aspect_between((p.body, p.longitude_deg), (q.body, q.longitude_deg), orbs) {
                out.push(a);
            }
        }
    }
    out
}

/// Interpretive text for an aspect, keyed by the sorted pair.
pub fn influence(a: Body, b: Body, kind: AspectKind) -> &'static str {
    use AspectKind::*;
    use Body::*;

    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    match (lo, hi, kind) {
        (Sun, Moon, Conjunction) => {
            "New-moon birth: will and feeling pull in one direction, giving focus but little detachment."
        }
        (Sun, Moon, Opposition) => {
            "Full-moon birth: inner needs and outer goals seek balance, often through relationships."
        }
        (Sun, Moon, Trine) => "Heart and mind cooperate; a naturally balanced temperament.",
        (Sun, Moon, Square) => "Restless tension between wants and needs that fuels ambition.",
        (Sun, Mercury, Conjunction) => {
            "Intellect closely bound to identity; articulate, sometimes too subjective."
        }
        (Sun, Venus, Conjunction) => "Charm, warmth and an eye for beauty shape the personality.",
        (Sun, Mars, Conjunction) => "Abundant drive and courage; needs outlets to avoid impatience.",
        (Sun, Jupiter, Conjunction) | (Sun, Jupiter, Trine) => {
            "Generosity, optimism and good fortune through wise guidance."
        }
        (Sun, Saturn, Conjunction) | (Sun, Saturn, Square) | (Sun, Saturn, Opposition) => {
            "Responsibility arrives early; success is slow but durable."
        }
        (Moon, Venus, Conjunction) | (Moon, Venus, Trine) => {
            "Affectionate, graceful emotions and ease in close relationships."
        }
        (Moon, Mars, Conjunction) => "Quick, passionate feelings; emotional courage with a short fuse.",
        (Moon, Mars, Square) | (Moon, Mars, Opposition) => {
            "Emotional flashpoints; learning to pause before reacting brings strength."
        }
        (Moon, Jupiter, Conjunction) | (Moon, Jupiter, Trine) => {
            "Emotional generosity, faith and protection in times of need."
        }
        (Moon, Saturn, Conjunction) | (Moon, Saturn, Square) | (Moon, Saturn, Opposition) => {
            "Emotional reserve and a serious outlook; maturity brings stability."
        }
        (Mercury, Jupiter, Trine) | (Mercury, Jupiter, Sextile) => {
            "Broad, well-informed thinking with a gift for teaching."
        }
        (Mercury, Saturn, Conjunction) => "A methodical, patient mind suited to deep study.",
        (Venus, Mars, Conjunction) => "Strong attraction and creative passion.",
        (Venus, Jupiter, Trine) => "Grace, prosperity and happiness in partnerships.",
        (Mars, Saturn, Square) | (Mars, Saturn, Opposition) => {
            "Drive meets resistance; disciplined effort overcomes frustration."
        }
        (Jupiter, Saturn, Conjunction) => "A turning point of ambition and structure; builds lasting works.",
        (Sun, Rahu, Conjunction) | (Sun, Ketu, Conjunction) => {
            "Eclipse-like contact: identity is shaped by unusual or karmic circumstances."
        }
        (Moon, Rahu, Conjunction) | (Moon, Ketu, Conjunction) => {
            "Sensitive, intuitive mind prone to restlessness; grounding practices help."
        }
        _ => kind.generic_influence(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::longitude::CelestialLongitude;
    use crate::rashi::Rashi;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, Some(AspectKind::Conjunction))]
    #[case(8.0, Some(AspectKind::Conjunction))]
    #[case(8.5, None)]
    #[case(55.0, Some(AspectKind::Sextile))]
    #[case(83.0, Some(AspectKind::Square))]
    #[case(112.0, Some(AspectKind::Trine))]
    #[case(150.0, None)]
    #[case(172.0, Some(AspectKind::Opposition))]
    #[case(180.0, Some(AspectKind::Opposition))]
    fn matching(#[case] sep: f64, #[case] expected: Option<AspectKind>) {
        assert_eq!(match_aspect(sep, &AspectOrbs::default()), expected);
    }

    #[test]
    fn first_match_wins_with_wide_orbs() {
        let orbs = AspectOrbs {
            conjunction: 40.0,
            sextile: 40.0,
            ..AspectOrbs::default()
        };
        assert_eq!(match_aspect(35.0, &orbs), Some(AspectKind::Conjunction));
    }

    #[test]
    fn separation_wraps() {
        assert!((angular_separation(355.0, 5.0) - 10.0).abs() < 1e-12);
        assert!((angular_separation(10.0, 200.0) - 170.0).abs() < 1e-12);
        assert!((angular_separation(0.0, 180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn symmetric_in_argument_order() {
        let orbs = AspectOrbs::default();
        let ab = aspect_between((Body::Saturn, 100.0), (Body::Moon, 282.0), &orbs);
        let ba = aspect_between((Body::Moon, 282.0), (Body::Saturn, 100.0), &orbs);
        assert_eq!(ab, ba);
        let a = ab.unwrap();
        assert_eq!((a.first, a.second), (Body::Moon, Body::Saturn));
        assert_eq!(a.kind, AspectKind::Opposition);
        assert!((a.orb_deg - 2.0).abs() < 1e-9);
    }

    #[test]
    fn pair_text_and_fallback() {
        assert_eq!(
            influence(Body::Jupiter, Body::Moon, AspectKind::Trine),
            influence(Body::Moon, Body::Jupiter, AspectKind::Trine)
        );
        assert_ne!(
            influence(Body::Moon, Body::Jupiter, AspectKind::Trine),
            AspectKind::Trine.generic_influence()
        );
        assert_eq!(
            influence(Body::Venus, Body::Saturn, AspectKind::Square),
            AspectKind::Square.generic_influence()
        );
    }

    #[test]
    fn nodes_pair_skipped() {
        let ps = [
            Placement::new(CelestialLongitude::sidereal(Body::Moon, 10.0), Rashi::Mesha, false),
            Placement::new(CelestialLongitude::sidereal(Body::Rahu, 12.0), Rashi::Mesha, true),
            Placement::new(CelestialLongitude::sidereal(Body::Ketu, 192.0), Rashi::Mesha, true),
        ];
        let aspects = find_aspects(&ps, &AspectOrbs::default());
        assert_eq!(aspects.len(), 2);
        assert!(aspects.iter().all(|a| !(a.first.is_node() && a.second.is_node())));
    }
}
