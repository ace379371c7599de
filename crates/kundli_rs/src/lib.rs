//! Birth-chart generation for the kundli pipeline.
//!
//! Takes a name, birth date, optional birth time and a free-text birth place,
//! and produces a [`BirthChart`]: ascendant, Sun and Moon signs, nine
//! planetary positions, twelve houses, aspects, yogas, doshas and planetary
//! strengths, in either the Vedic (sidereal, Lahiri) or Western (tropical)
//! zodiac.
//!
//! # Quick start
//!
//! ```rust
//! use kundli_rs::*;
//!
//! let input = BirthInput::new("Asha", "1990-06-15", "14:30", "Delhi, India", ChartSystem::Vedic);
//! let chart = generate_chart_default(&input).unwrap();
//! assert_eq!(chart.planets.len(), 9);
//! assert_eq!(chart.houses.len(), 12);
//! println!("{}", serde_json::to_string_pretty(&chart).unwrap());
//! ```
//!
//! Unknown places and missing birth times never fail: the chart is produced
//! with the best available data, flagged in [`ChartQuality`] and explained in
//! [`BirthChart::warnings`].

pub mod assemble;
pub mod chart;
pub mod config;
pub mod error;
pub mod input;

// Primary re-exports: callers should only need `use kundli_rs::*`
pub use assemble::{ascendant_sign, generate_chart, generate_chart_default, generate_chart_with_config};
pub use chart::{
    AscendantInfo, AspectInfo, BirthChart, ChartQuality, DoshaInfo, House, Location, MoonSignInfo,
    NakshatraPosition, PlanetPosition, SignInfo, StrengthInfo, UNKNOWN_SIGN, YogaInfo,
};
pub use config::{ChartConfig, ChartContext};
pub use error::ChartError;
pub use input::BirthInput;

// Re-export the lower layers so callers don't need to depend on them directly.
pub use kundli_bodies::{ALL_BODIES, Body, tropical_longitude};
pub use kundli_place::{Country, Gazetteer, GeoCoordinate, Place, Resolution};
pub use kundli_time::{TimeError, UtcInstant};
pub use kundli_vedic_base::{AspectOrbs, ChartSystem, Nakshatra, Rashi, Zodiac};
