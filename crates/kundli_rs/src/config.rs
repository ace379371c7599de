//! Chart generation settings and the injected lookup data.

use kundli_place::Gazetteer;
use kundli_time::parse_clock_time;
use kundli_vedic_base::{
    ALL_ASPECT_KINDS, AspectOrbs, DEFAULT_RETROGRADE_WINDOW_DAYS, DEFAULT_YOGA_CONJUNCTION_ORB_DEG,
};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Largest orb or sampling window accepted, in degrees or days.
const MAX_ORB_DEG: f64 = 30.0;
const MAX_RETROGRADE_WINDOW_DAYS: f64 = 30.0;

/// Tunable chart settings. Every field has a default, so a partial JSON
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Half-width of the retrograde sampling window in days.
    #[serde(default = "default_retrograde_window_days")]
    pub retrograde_window_days: f64,
    /// Local clock time assumed when the birth time is unknown.
    #[serde(default = "default_birth_time")]
    pub default_birth_time: String,
    #[serde(default)]
    pub aspect_orbs: AspectOrbs,
    /// Orb for the same-sign conjunction yogas.
    #[serde(default = "default_yoga_conjunction_orb_deg")]
    pub yoga_conjunction_orb_deg: f64,
}

fn default_retrograde_window_days() -> f64 {
    DEFAULT_RETROGRADE_WINDOW_DAYS
}

fn default_birth_time() -> String {
    "12:00".to_string()
}

fn default_yoga_conjunction_orb_deg() -> f64 {
    DEFAULT_YOGA_CONJUNCTION_ORB_DEG
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            retrograde_window_days: default_retrograde_window_days(),
            default_birth_time: default_birth_time(),
            aspect_orbs: AspectOrbs::default(),
            yoga_conjunction_orb_deg: default_yoga_conjunction_orb_deg(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ChartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setting is in range.
    pub fn validate(&self) -> Result<(), ChartError> {
        let w = self.retrograde_window_days;
        if !(w > 0.0 && w <= MAX_RETROGRADE_WINDOW_DAYS) {
            return Err(ChartError::Config(format!(
                "retrograde_window_days must be in (0, {MAX_RETROGRADE_WINDOW_DAYS}], got {w}"
            )));
        }
        for kind in ALL_ASPECT_KINDS {
            let orb = self.aspect_orbs.orb(kind);
            if !(0.0..=MAX_ORB_DEG).contains(&orb) {
                return Err(ChartError::Config(format!(
                    "{} orb must be in [0, {MAX_ORB_DEG}], got {orb}",
                    kind.name().to_lowercase()
                )));
            }
        }
        let y = self.yoga_conjunction_orb_deg;
        if !(0.0..=MAX_ORB_DEG).contains(&y) {
            return Err(ChartError::Config(format!(
                "yoga_conjunction_orb_deg must be in [0, {MAX_ORB_DEG}], got {y}"
            )));
        }
        parse_clock_time(&self.default_birth_time)
            .map_err(|e| ChartError::Config(format!("default_birth_time: {e}")))?;
        Ok(())
    }
}

/// Settings plus lookup tables for one or many chart generations.
#[derive(Debug, Clone, Default)]
pub struct ChartContext {
    pub config: ChartConfig,
    pub gazetteer: Gazetteer,
}

impl ChartContext {
    pub fn new(config: ChartConfig, gazetteer: Gazetteer) -> Self {
        Self { config, gazetteer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.retrograde_window_days, 3.0);
        assert_eq!(c.default_birth_time, "12:00");
        assert_eq!(c.aspect_orbs.square, 7.0);
        assert_eq!(c.yoga_conjunction_orb_deg, 10.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = ChartConfig::from_json(r#"{"aspect_orbs": {"trine": 5.0}}"#).unwrap();
        assert_eq!(c.aspect_orbs.trine, 5.0);
        assert_eq!(c.aspect_orbs.opposition, 8.0);
        assert_eq!(c.retrograde_window_days, 3.0);

        assert_eq!(ChartConfig::from_json("{}").unwrap(), ChartConfig::default());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            ChartConfig::from_json(r#"{"retrograde_window_days": 0}"#),
            Err(ChartError::Config(_))
        ));
        assert!(matches!(
            ChartConfig::from_json(r#"{"aspect_orbs": {"square": -1}}"#),
            Err(ChartError::Config(_))
        ));
        assert!(matches!(
            ChartConfig::from_json(r#"{"default_birth_time": "noon"}"#),
            Err(ChartError::Config(_))
        ));
        assert!(matches!(ChartConfig::from_json("not json"), Err(ChartError::Config(_))));
    }
}
