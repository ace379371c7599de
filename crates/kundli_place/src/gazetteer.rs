//! Static place and country tables.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::builtin::{BUILTIN_COUNTRIES, BUILTIN_PLACES, DEFAULT_LOCATION};

/// Geographic coordinate in degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A known place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    /// Canonical name, matched case-insensitively.
    pub name: &'static str,
    pub coordinate: GeoCoordinate,
    pub timezone: Tz,
}

/// Country-level fallback entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    pub name: &'static str,
    /// Lowercase whole-word aliases searched for in the place string.
    pub aliases: &'static [&'static str],
    /// Representative coordinate (capital or population centre).
    pub coordinate: GeoCoordinate,
    pub timezone: Tz,
}

/// Immutable lookup tables used by resolution.
///
/// [`Gazetteer::builtin`] returns the tables compiled into the crate; tests
/// and embedders can supply their own.
#[derive(Debug, Clone, Copy)]
pub struct Gazetteer {
    pub places: &'static [Place],
    pub countries: &'static [Country],
    /// Used when nothing else matches.
    pub default: Country,
}

impl Gazetteer {
    pub const fn new(
        places: &'static [Place],
        countries: &'static [Country],
        default: Country,
    ) -> Self {
        Self {
            places,
            countries,
            default,
        }
    }

    /// The built-in tables.
    pub const fn builtin() -> Self {
        Self::new(&BUILTIN_PLACES, &BUILTIN_COUNTRIES, DEFAULT_LOCATION)
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_unique_and_lowercase_aliases() {
        let g = Gazetteer::builtin();
        let mut names: Vec<String> = g.places.iter().map(|p| p.name.to_lowercase()).collect();
        names.sort();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len(), "duplicate place names");

        for c in g.countries {
            for alias in c.aliases {
                assert_eq!(*alias, alias.to_lowercase(), "{} alias {alias}", c.name);
            }
        }
    }

    #[test]
    fn builtin_coordinates_valid() {
        let g = Gazetteer::builtin();
        let coords = g
            .places
            .iter()
            .map(|p| p.coordinate)
            .chain(g.countries.iter().map(|c| c.coordinate))
            .chain(std::iter::once(g.default.coordinate));
        for c in coords {
            assert!((-90.0..=90.0).contains(&c.latitude));
            assert!((-180.0..=180.0).contains(&c.longitude));
        }
    }

    #[test]
    fn coordinate_serializes_as_plain_numbers() {
        let json = serde_json::to_string(&GeoCoordinate::new(28.6139, 77.209)).unwrap();
        assert_eq!(json, r#"{"latitude":28.6139,"longitude":77.209}"#);
    }
}
