//! Vedic and Western chart derivations built on the body longitude models.
//!
//! This crate provides:
//! - Lahiri ayanamsa and tropical → sidereal conversion
//! - Lagna (ascendant) from local sidereal time, with an explicit Unknown sentinel
//! - Rashi (sign), DMS formatting and nakshatra/pada lookup
//! - Whole-sign equal houses and retrograde detection
//! - Aspects, yogas, doshas and planetary strengths
//!
//! Everything here is a pure function of its inputs.

pub mod aspects;
pub mod ayanamsha;
pub mod bhava;
pub mod dosha;
pub mod graha_relationships;
pub mod lagna;
pub mod longitude;
pub mod motion;
pub mod nakshatra;
pub mod placement;
pub mod rashi;
pub mod strength;
pub mod system;
pub mod yoga;

pub use aspects::{
    ALL_ASPECT_KINDS, Aspect, AspectKind, AspectOrbs, angular_separation, aspect_between,
    find_aspects, match_aspect,
};
pub use ayanamsha::{
    LAHIRI_J2000_DEG, ayanamsha_at_jd, ayanamsha_for, lahiri_ayanamsha_deg, longitude_in_system,
    to_sidereal,
};
pub use bhava::{Bhava, equal_houses, house_from_signs, house_significations};
pub use dosha::{Dosha, MANGAL_DOSHA_HOUSES, Severity, detect_doshas};
pub use graha_relationships::{
    NaisargikaMaitri, debilitation_sign, exaltation_degree, exaltation_sign, naisargika_maitri,
    own_signs,
};
pub use lagna::{Ascendant, LagnaPosition, ascendant_tropical_deg, calculate_ascendant};
pub use longitude::{CelestialLongitude, Zodiac, celestial_longitude};
pub use motion::{DEFAULT_RETROGRADE_WINDOW_DAYS, is_retrograde, longitude_deltas};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use placement::Placement;
pub use rashi::{
    ALL_RASHIS, Dms, Element, Quality, Rashi, RashiInfo, deg_to_dms, dms_to_deg,
    rashi_from_longitude,
};
pub use strength::{PlanetStrength, StrengthTier, assess_strength, assess_strengths};
pub use system::{ChartSystem, UnknownChartSystem};
pub use yoga::{DEFAULT_YOGA_CONJUNCTION_ORB_DEG, KENDRA_HOUSES, Yoga, YogaStrength, detect_yogas};
