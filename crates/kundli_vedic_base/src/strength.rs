//! Planetary strength annotations for the seven classical planets.
//!
//! Tier by sign dignity first (exaltation, debilitation, own sign), then by
//! the natural friendship of the planets sharing its sign: more friends than
//! enemies is Strong, more enemies is Challenged, otherwise Moderate.

use kundli_bodies::Body;

use crate::graha_relationships::{
    NaisargikaMaitri, debilitation_sign, exaltation_sign, is_own_sign, naisargika_maitri,
};
use crate::placement::Placement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthTier {
    Exalted,
    Strong,
    Moderate,
    Challenged,
    Debilitated,
}

impl StrengthTier {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Challenged => "Challenged",
            Self::Debilitated => "Debilitated",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetStrength {
    pub body: Body,
    pub tier: StrengthTier,
    pub notes: Vec<String>,
}

fn names(bodies: &[Body]) -> String {
    bodies.iter().map(|b| b.name()).collect::<Vec<_>>().join(", ")
}

/// Strength of one placement, judged against the whole chart.
pub fn assess_strength(placement: &Placement, chart: &[Placement]) -> PlanetStrength {
    let body = placement.body;
    let sign = placement.sign();
    let mut notes = Vec::new();

    let mut friends = Vec::new();
    let mut enemies = Vec::new();
    for other in chart.iter().filter(|o| o.body != body && o.sign() == sign) {
        match naisargika_maitri(body, other.body) {
            NaisargikaMaitri::Friend => friends.push(other.body),
            NaisargikaMaitri::Enemy => enemies.push(other.body),
            NaisargikaMaitri::Neutral => {}
        }
    }

    let tier = if exaltation_sign(body) == Some(sign) {
        notes.push(format!("Exalted in {}", sign.name()));
        StrengthTier::Exalted
    } else if debilitation_sign(body) == Some(sign) {
        notes.push(format!("Debilitated in {}", sign.name()));
        StrengthTier::Debilitated
    } else if is_own_sign(body, sign) {
        notes.push(format!("In own sign {}", sign.name()));
        StrengthTier::Strong
    } else if friends.len() > enemies.len() {
        StrengthTier::Strong
    } else if enemies.len() > friends.len() {
        StrengthTier::Challenged
    } else {
        StrengthTier::Moderate
    };

    if !friends.is_empty() {
        notes.push(format!("Supported by friends: {}", names(&friends)));
    }
    if !enemies.is_empty() {
        notes.push(format!("Afflicted by enemies: {}", names(&enemies)));
    }
    if placement.retrograde {
        notes.push("Retrograde: results turn inward and may come with delay".to_string());
    }

    PlanetStrength { body, tier, notes }
}

/// Strengths of every classical planet in `chart`, in placement order.
pub fn assess_strengths(chart: &[Placement]) -> Vec<PlanetStrength> {
    chart
        .iter()
        .filter(|p| !p.body.is_node())
        .map(|p| assess_strength(p, chart))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::longitude::CelestialLongitude;
    use crate::rashi::Rashi;

    fn at(body: Body, lon: f64, retrograde: bool) -> Placement {
        Placement::new(CelestialLongitude::sidereal(body, lon), Rashi::Mesha, retrograde)
    }

    #[test]
    fn dignity_tiers() {
        let chart = [
            at(Body::Sun, 10.0, false),      // Mesha: exalted
            at(Body::Moon, 220.0, false),    // Vrischika: debilitated
            at(Body::Saturn, 305.0, false),  // Kumbha: own sign
        ];
        let s = assess_strengths(&chart);
        assert_eq!(s[0].tier, StrengthTier::Exalted);
        assert_eq!(s[1].tier, StrengthTier::Debilitated);
        assert_eq!(s[2].tier, StrengthTier::Strong);
        assert_eq!(s[2].notes[0], "In own sign Kumbha");
    }

    #[test]
    fn company_decides_when_no_dignity() {
        // Mithuna holds Jupiter (friend of Sun) and Moon (friend of Sun) with Sun
        let chart = [
            at(Body::Sun, 65.0, false),
            at(Body::Jupiter, 70.0, false),
            at(Body::Moon, 75.0, false),
            at(Body::Venus, 200.0, false),
        ];
        let sun = assess_strength(&chart[0], &chart);
        assert_eq!(sun.tier, StrengthTier::Strong);
        assert_eq!(sun.notes, vec!["Supported by friends: Jupiter, Moon".to_string()]);

        // Jupiter sees Sun and Moon as friends too
        assert_eq!(assess_strength(&chart[1], &chart).tier, StrengthTier::Strong);
    }

    #[test]
    fn enemies_challenge() {
        // Saturn with Sun and Mars in Simha (not Saturn's sign)
        let chart = [
            at(Body::Saturn, 125.0, false),
            at(Body::Sun, 140.0, false),
            at(Body::Mars, 145.0, false),
        ];
        assert_eq!(assess_strength(&chart[0], &chart).tier, StrengthTier::Challenged);
    }

    #[test]
    fn alone_is_moderate_and_retrograde_noted() {
        let chart = [at(Body::Mercury, 100.0, true)];
        let s = assess_strength(&chart[0], &chart);
        assert_eq!(s.tier, StrengthTier::Moderate);
        assert_eq!(s.notes.len(), 1);
        assert!(s.notes[0].starts_with("Retrograde"));
    }

    #[test]
    fn nodes_are_skipped() {
        let chart = [at(Body::Rahu, 10.0, true), at(Body::Mars, 40.0, false)];
        let s = assess_strengths(&chart);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].body, Body::Mars);
    }
}
