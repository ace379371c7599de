//! Yoga (auspicious combination) detection.
//!
//! A deliberately small rule set:
//! - Gaja Kesari: Moon and Jupiter both in angular houses (1, 4, 7, 10).
//! - Budha-Aditya: Sun and Mercury in the same sign within the conjunction orb.
//! - Chandra-Mangala: Moon and Mars in the same sign within the conjunction orb.

use kundli_bodies::Body;

use crate::aspects::angular_separation;
use crate::placement::{Placement, find};

/// Default orb for sign-sharing conjunction yogas, in degrees.
pub const DEFAULT_YOGA_CONJUNCTION_ORB_DEG: f64 = 10.0;

/// Angular houses (kendras).
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YogaStrength {
    Strong,
    Moderate,
}

impl YogaStrength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
        }
    }
}

/// A detected yoga.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yoga {
    pub name: &'static str,
    pub description: &'static str,
    pub strength: YogaStrength,
    pub bodies: [Body; 2],
}

const GAJA_KESARI: Yoga = Yoga {
    name: "Gaja Kesari Yoga",
    description: "Moon and Jupiter in angular houses bring wisdom, reputation and lasting prosperity.",
    strength: YogaStrength::Strong,
    bodies: [Body::Moon, Body::Jupiter],
};

const BUDHA_ADITYA: Yoga = Yoga {
    name: "Budha-Aditya Yoga",
    description: "Sun and Mercury together give sharp intelligence, eloquence and skill in learning.",
    strength: YogaStrength::Moderate,
    bodies: [Body::Sun, Body::Mercury],
};

const CHANDRA_MANGALA: Yoga = Yoga {
    name: "Chandra-Mangala Yoga",
    description: "Moon and Mars together give enterprise, earning power and financial drive.",
    strength: YogaStrength::Moderate,
    bodies: [Body::Moon, Body::Mars],
};

/// Both bodies present, in the same sign, and within `orb_deg`.
fn conjoined_in_sign(placements: &[Placement], a: Body, b: Body, orb_deg: f64) -> bool {
    match (find(placements, a), find(placements, b)) {
        (Some(p), Some(q)) => {
            p.sign() == q.sign() && angular_separation(p.longitude_deg, q.longitude_deg) <= orb_deg
        }
        _ => false,
    }
}

fn in_kendra(placements: &[Placement], body: Body) -> bool {
    find(placements, body).is_some_and(|p| KENDRA_HOUSES.contains(&p.house))
}

/// Yogas formed by `placements`, in rule order.
pub fn detect_yogas(placements: &[Placement], conjunction_orb_deg: f64) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    if in_kendra(placements, Body::Moon) && in_kendra(placements, Body::Jupiter) {
        yogas.push(GAJA_KESARI);
    }
    if conjoined_in_sign(placements, Body::Sun, Body::Mercury, conjunction_orb_deg) {
        yogas.push(BUDHA_ADITYA);
    }
    if conjoined_in_sign(placements, Body::Moon, Body::Mars, conjunction_orb_deg) {
        yogas.push(CHANDRA_MANGALA);
    }
    yogas
}
