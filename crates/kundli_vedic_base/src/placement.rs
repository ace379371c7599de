//! A body placed in a chart: longitude, sign, house, motion.

use kundli_bodies::Body;

use crate::bhava::house_from_signs;
use crate::longitude::{CelestialLongitude, Zodiac};
use crate::rashi::{Rashi, RashiInfo, rashi_from_longitude};

/// Position of one body, in the chart's zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub body: Body,
    /// Longitude in [0, 360), measured in `zodiac`.
    pub longitude_deg: f64,
    pub zodiac: Zodiac,
    pub rashi: RashiInfo,
    /// House 1-12 counted from the anchor sign.
    pub house: u8,
    pub retrograde: bool,
}

impl Placement {
    /// Place a body at `longitude`, counting houses from `anchor` (normally
    /// the ascendant sign). The anchor must be in the same zodiac.
    pub fn new(longitude: CelestialLongitude, anchor: Rashi, retrograde: bool) -> Self {
        let rashi = rashi_from_longitude(longitude.degrees);
        Self {
            body: longitude.body,
            longitude_deg: rashi.rashi_index as f64 * 30.0 + rashi.degrees_in_rashi,
            zodiac: longitude.zodiac,
            rashi,
            house: house_from_signs(rashi.rashi, anchor),
            retrograde,
        }
    }

    pub fn sign(&self) -> Rashi {
        self.rashi.rashi
    }

    pub fn longitude(&self) -> CelestialLongitude {
        CelestialLongitude::new(self.body, self.longitude_deg, self.zodiac)
    }
}

/// First placement of `body`, if present.
pub fn find(placements: &[Placement], body: Body) -> Option<&Placement> {
    placements.iter().find(|p| p.body == body)
}
