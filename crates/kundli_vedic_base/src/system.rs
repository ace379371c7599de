//! Zodiac reference system of a chart.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::longitude::Zodiac;

/// Vedic charts are sidereal (Lahiri ayanamsa); Western charts are tropical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSystem {
    #[default]
    Vedic,
    Western,
}

impl ChartSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vedic => "vedic",
            Self::Western => "western",
        }
    }

    /// Whether longitudes are reduced by the ayanamsa.
    pub const fn is_sidereal(self) -> bool {
        matches!(self, Self::Vedic)
    }

    /// Zodiac that chart longitudes are expressed in.
    pub const fn zodiac(self) -> Zodiac {
        match self {
            Self::Vedic => Zodiac::Sidereal,
            Self::Western => Zodiac::Tropical,
        }
    }
}

impl std::fmt::Display for ChartSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Name was neither "vedic" nor "western".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart system '{0}', expected vedic or western")]
pub struct UnknownChartSystem(pub String);

impl FromStr for ChartSystem {
    type Err = UnknownChartSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vedic" => Ok(Self::Vedic),
            "western" => Ok(Self::Western),
            _ => Err(UnknownChartSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("Vedic".parse::<ChartSystem>(), Ok(ChartSystem::Vedic));
        assert_eq!(" WESTERN ".parse::<ChartSystem>(), Ok(ChartSystem::Western));
        assert!("tropical".parse::<ChartSystem>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&ChartSystem::Western).unwrap(), r#""western""#);
        let s: ChartSystem = serde_json::from_str(r#""vedic""#).unwrap();
        assert_eq!(s, ChartSystem::Vedic);
    }
}
