//! Dosha (affliction) detection.
//!
//! Two rules:
//! - Kaal Sarp: all seven classical planets on one side of the Rahu–Ketu axis.
//! - Mangal (Manglik): Mars in house 1, 4, 7, 8 or 12.

use kundli_bodies::{Body, CLASSICAL_BODIES};
use kundli_frames::normalize_360;

use crate::placement::{Placement, find};

/// Houses in which Mars forms Mangal dosha.
pub const MANGAL_DOSHA_HOUSES: [u8; 5] = [1, 4, 7, 8, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

/// A detected dosha with suggested remedies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dosha {
    pub name: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub remedies: &'static [&'static str],
}

const KAAL_SARP: Dosha = Dosha {
    name: "Kaal Sarp Dosha",
    description: "All planets are hemmed between Rahu and Ketu, which can bring delays and sudden reversals until effort matures.",
    severity: Severity::High,
    remedies: &[
        "Perform Kaal Sarp dosha puja, traditionally at Trimbakeshwar",
        "Chant the Maha Mrityunjaya mantra daily",
        "Offer milk to a Shiva lingam on Mondays",
    ],
};

const MANGAL: Dosha = Dosha {
    name: "Mangal Dosha",
    description: "Mars occupies a sensitive house for partnership, which can bring friction or delay in marriage.",
    severity: Severity::Medium,
    remedies: &[
        "Recite the Hanuman Chalisa on Tuesdays",
        "Perform Mangal shanti puja before marriage",
        "Donate red lentils or red cloth on Tuesdays",
    ],
};

/// All classical planets strictly inside one half of the node axis.
///
/// A planet exactly on the axis breaks the pattern. Needs Rahu and every
/// classical planet to be present.
pub fn is_kaal_sarp(placements: &[Placement]) -> bool {
    let Some(rahu) = find(placements, Body::Rahu) else {
        return false;
    };
    let mut offsets = Vec::with_capacity(CLASSICAL_BODIES.len());
    for body in CLASSICAL_BODIES {
        match find(placements, body) {
            Some(p) => offsets.push(normalize_360(p.longitude_deg - rahu.longitude_deg)),
            None => return false,
        }
    }
    let rahu_side = offsets.iter().all(|&d| d > 0.0 && d < 180.0);
    let ketu_side = offsets.iter().all(|&d| d > 180.0);
    rahu_side || ketu_side
}

pub fn is_mangal_dosha(placements: &[Placement]) -> bool {
    find(placements, Body::Mars).is_some_and(|p| MANGAL_DOSHA_HOUSES.contains(&p.house))
}

/// Doshas present in `placements`, in rule order.
pub fn detect_doshas(placements: &[Placement]) -> Vec<Dosha> {
    let mut doshas = Vec::new();
    if is_kaal_sarp(placements) {
        doshas.push(KAAL_SARP);
    }
    if is_mangal_dosha(placements) {
        doshas.push(MANGAL);
    }
    doshas
}
