//! The serialized birth chart.
//!
//! Everything here is plain data: strings, numbers, booleans and nested
//! records, so a chart round-trips through JSON unchanged. Sign names are
//! given in English (`sign`) and Sanskrit (`rashi`).

use kundli_place::Resolution;
use kundli_vedic_base::{
    Ascendant, Aspect, Bhava, ChartSystem, Dosha, NakshatraInfo, Placement, PlanetStrength, Rashi,
    RashiInfo, Yoga, Zodiac,
};
use serde::{Deserialize, Serialize};

/// Sign label used when the ascendant is unavailable.
pub const UNKNOWN_SIGN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChart {
    pub name: String,
    pub system: ChartSystem,
    /// ISO-8601 UTC instant, e.g. `1990-06-15T09:00:00Z`.
    pub utc_instant: String,
    pub julian_day: f64,
    pub location: Location,
    /// Lahiri ayanamsa applied, `None` for Western charts.
    pub ayanamsa: Option<f64>,
    pub ascendant: AscendantInfo,
    pub sun_sign: SignInfo,
    pub moon_sign: MoonSignInfo,
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<House>,
    pub aspects: Vec<AspectInfo>,
    pub yogas: Vec<YogaInfo>,
    pub doshas: Vec<DoshaInfo>,
    pub strengths: Vec<StrengthInfo>,
    pub quality: ChartQuality,
    pub warnings: Vec<String>,
}

impl BirthChart {
    pub fn planet(&self, name: &str) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.planet == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Place string as given.
    pub query: String,
    /// Table entry that matched.
    pub matched_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone name.
    pub timezone: String,
}

/// How trustworthy the chart is. `approximate` is set whenever any other
/// flag shows degradation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQuality {
    pub time_known: bool,
    pub place_resolution: Resolution,
    pub timezone_resolution: Resolution,
    pub ascendant_available: bool,
    pub approximate: bool,
}

impl ChartQuality {
    pub fn new(
        time_known: bool,
        place_resolution: Resolution,
        timezone_resolution: Resolution,
        ascendant_available: bool,
    ) -> Self {
        let approximate = !time_known
            || place_resolution.is_approximate()
            || timezone_resolution.is_approximate()
            || !ascendant_available;
        Self {
            time_known,
            place_resolution,
            timezone_resolution,
            ascendant_available,
            approximate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AscendantInfo {
    /// English sign name, or `"Unknown"`.
    pub sign: String,
    pub rashi: String,
    /// Degree within the sign; 0 when unknown.
    pub degree: f64,
    pub longitude: Option<f64>,
    pub dms: String,
    pub traits: String,
}

impl From<&Ascendant> for AscendantInfo {
    fn from(asc: &Ascendant) -> Self {
        match asc.position() {
            Some(p) => Self {
                sign: p.rashi.rashi.western_name().to_string(),
                rashi: p.rashi.rashi.name().to_string(),
                degree: p.rashi.degrees_in_rashi,
                longitude: Some(p.longitude_deg),
                dms: p.rashi.dms.to_string(),
                traits: p.rashi.rashi.traits().to_string(),
            },
            None => Self {
                sign: UNKNOWN_SIGN.to_string(),
                rashi: UNKNOWN_SIGN.to_string(),
                degree: 0.0,
                longitude: None,
                dms: String::new(),
                traits: String::new(),
            },
        }
    }
}

/// Static description of a sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInfo {
    pub sign: String,
    pub rashi: String,
    pub element: String,
    pub quality: String,
    pub ruler: String,
    pub traits: String,
}

impl From<Rashi> for SignInfo {
    fn from(r: Rashi) -> Self {
        Self {
            sign: r.western_name().to_string(),
            rashi: r.name().to_string(),
            element: r.element().name().to_string(),
            quality: r.quality().name().to_string(),
            ruler: r.lord().name().to_string(),
            traits: r.traits().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonSignInfo {
    #[serde(flatten)]
    pub sign: SignInfo,
    pub nakshatra: NakshatraPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraPosition {
    pub name: String,
    /// 1-based (Ashwini = 1).
    pub number: u8,
    pub pada: u8,
    pub lord: String,
    pub deity: String,
}

impl From<&NakshatraInfo> for NakshatraPosition {
    fn from(n: &NakshatraInfo) -> Self {
        Self {
            name: n.nakshatra.name().to_string(),
            number: n.nakshatra_index + 1,
            pada: n.pada,
            lord: n.nakshatra.lord().name().to_string(),
            deity: n.nakshatra.deity().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: String,
    pub sanskrit_name: String,
    /// Longitude in [0, 360), measured in `zodiac`.
    pub longitude: f64,
    pub zodiac: Zodiac,
    pub sign: String,
    pub rashi: String,
    pub degree: f64,
    pub dms: String,
    pub house: u8,
    pub retrograde: bool,
    /// Populated for the Moon only.
    pub nakshatra: Option<NakshatraPosition>,
}

impl PlanetPosition {
    pub fn new(p: &Placement, nakshatra: Option<&NakshatraInfo>) -> Self {
        let RashiInfo {
            rashi,
            dms,
            degrees_in_rashi,
            ..
        } = p.rashi;
        Self {
            planet: p.body.name().to_string(),
            sanskrit_name: p.body.sanskrit_name().to_string(),
            longitude: p.longitude_deg,
            zodiac: p.zodiac,
            sign: rashi.western_name().to_string(),
            rashi: rashi.name().to_string(),
            degree: degrees_in_rashi,
            dms: dms.to_string(),
            house: p.house,
            retrograde: p.retrograde,
            nakshatra: nakshatra.map(NakshatraPosition::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub number: u8,
    pub sign: String,
    pub rashi: String,
    pub cusp_degree: f64,
    pub significations: String,
}

impl From<&Bhava> for House {
    fn from(b: &Bhava) -> Self {
        Self {
            number: b.number,
            sign: b.rashi.western_name().to_string(),
            rashi: b.rashi.name().to_string(),
            cusp_degree: b.cusp_deg,
            significations: b.significations.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectInfo {
    pub planet1: String,
    pub planet2: String,
    pub aspect: String,
    /// Separation of the two bodies, [0, 180].
    pub angle: f64,
    pub orb: f64,
    pub influence: String,
}

impl From<&Aspect> for AspectInfo {
    fn from(a: &Aspect) -> Self {
        Self {
            planet1: a.first.name().to_string(),
            planet2: a.second.name().to_string(),
            aspect: a.kind.name().to_string(),
            angle: a.separation_deg,
            orb: a.orb_deg,
            influence: a.influence.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaInfo {
    pub name: String,
    pub description: String,
    pub strength: String,
    pub planets: Vec<String>,
}

impl From<&Yoga> for YogaInfo {
    fn from(y: &Yoga) -> Self {
        Self {
            name: y.name.to_string(),
            description: y.description.to_string(),
            strength: y.strength.name().to_string(),
            planets: y.bodies.iter().map(|b| b.name().to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshaInfo {
    pub name: String,
    pub description: String,
    pub severity: String,
    pub remedies: Vec<String>,
}

impl From<&Dosha> for DoshaInfo {
    fn from(d: &Dosha) -> Self {
        Self {
            name: d.name.to_string(),
            description: d.description.to_string(),
            severity: d.severity.name().to_string(),
            remedies: d.remedies.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthInfo {
    pub planet: String,
    pub strength: String,
    pub notes: Vec<String>,
}

impl From<PlanetStrength> for StrengthInfo {
    fn from(s: PlanetStrength) -> Self {
        Self {
            planet: s.body.name().to_string(),
            strength: s.tier.name().to_string(),
            notes: s.notes,
        }
    }
}
