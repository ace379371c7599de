//! Place name → coordinate, timezone and UTC instant.

use chrono_tz::Tz;
use kundli_time::{TimeError, UtcInstant, civil_to_utc, parse_clock_time, parse_date};
use serde::{Deserialize, Serialize};

use crate::gazetteer::{Country, GeoCoordinate, Gazetteer, Place};

/// Minimum query length for the reverse substring direction (query inside a
/// known name). Shorter queries like "a" would match almost everything.
const MIN_REVERSE_QUERY_LEN: usize = 3;

/// Which step of the lookup chain produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Case-insensitive exact name match.
    Exact,
    /// Substring match in either direction.
    Partial,
    /// Country alias found in the place string.
    Country,
    /// Nothing matched; the built-in default location was used.
    Default,
}

impl Resolution {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::Country => "country",
            Self::Default => "default",
        }
    }

    /// Coordinates are no better than country level.
    pub const fn is_approximate(self) -> bool {
        matches!(self, Self::Country | Self::Default)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of resolving a place string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPlace {
    /// Name of the table entry that matched (place, country or default).
    pub matched_name: &'static str,
    pub coordinate: GeoCoordinate,
    pub timezone: Tz,
    pub resolution: Resolution,
}

impl ResolvedPlace {
    fn from_place(place: &Place, resolution: Resolution) -> Self {
        Self {
            matched_name: place.name,
            coordinate: place.coordinate,
            timezone: place.timezone,
            resolution,
        }
    }

    fn from_country(country: &Country, resolution: Resolution) -> Self {
        Self {
            matched_name: country.name,
            coordinate: country.coordinate,
            timezone: country.timezone,
            resolution,
        }
    }
}

/// A birth moment placed on the UTC time scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInstant {
    pub utc: UtcInstant,
    pub julian_day: f64,
    pub place: ResolvedPlace,
}

impl Gazetteer {
    /// Resolve a free-form place string. Never fails.
    pub fn resolve(&self, place: &str) -> ResolvedPlace {
        let query = normalize_query(place);

        if let Some(p) = self.exact_match(&query) {
            return ResolvedPlace::from_place(p, Resolution::Exact);
        }
        if let Some(p) = self.partial_match(&query) {
            tracing::debug!(query = %place, matched = p.name, "partial place match");
            return ResolvedPlace::from_place(p, Resolution::Partial);
        }
        if let Some(c) = self.country_match(&query) {
            tracing::debug!(query = %place, country = c.name, "country-level place match");
            return ResolvedPlace::from_country(c, Resolution::Country);
        }

        tracing::warn!(
            query = %place,
            default = self.default.name,
            "unknown place, using default location"
        );
        ResolvedPlace::from_country(&self.default, Resolution::Default)
    }

    pub fn resolve_coordinates(&self, place: &str) -> (GeoCoordinate, Resolution) {
        let r = self.resolve(place);
        (r.coordinate, r.resolution)
    }

    pub fn resolve_timezone(&self, place: &str) -> (Tz, Resolution) {
        let r = self.resolve(place);
        (r.timezone, r.resolution)
    }

    /// Convert a local birth date and clock time at `place` to UTC.
    ///
    /// `time` accepts `HH:MM` or `HH:MM:SS`; substituting a default for an
    /// unknown birth time is the caller's job. Fails on an empty place, an
    /// unparseable date or time, or a local time skipped by a DST change.
    pub fn resolve_utc_instant(
        &self,
        date: &str,
        time: &str,
        place: &str,
    ) -> Result<ResolvedInstant, TimeError> {
        if place.trim().is_empty() {
            return Err(TimeError::Missing("birth place"));
        }
        let date = parse_date(date)?;
        let time = parse_clock_time(time)?;
        let resolved = self.resolve(place);
        let utc = civil_to_utc(date, time, resolved.timezone)?;
        let julian_day = utc.to_julian_day();
        tracing::debug!(%utc, julian_day, zone = resolved.timezone.name(), "resolved birth instant");
        Ok(ResolvedInstant {
            utc,
            julian_day,
            place: resolved,
        })
    }

    fn exact_match(&self, query: &str) -> Option<&'static Place> {
        self.places
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(query))
    }

    /// Longest table name contained in the query, or containing it.
    fn partial_match(&self, query: &str) -> Option<&'static Place> {
        if query.is_empty() {
            return None;
        }
        let mut best: Option<&'static Place> = None;
        for p in self.places {
            let key = p.name.to_lowercase();
            let hit = query.contains(&key)
                || (query.len() >= MIN_REVERSE_QUERY_LEN && key.contains(query));
            if hit && best.is_none_or(|b| key.len() > b.name.len()) {
                best = Some(p);
            }
        }
        best
    }

    fn country_match(&self, query: &str) -> Option<&'static Country> {
        let padded = whole_word_haystack(query);
        self.countries.iter().find(|c| {
            c.aliases
                .iter()
                .any(|alias| padded.contains(&format!(" {alias} ")))
        })
    }
}

/// Lowercase, trimmed, inner whitespace collapsed to single spaces.
fn normalize_query(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Punctuation replaced by spaces and padded, so `" {word} "` finds whole
/// words only ("usa" does not match "jerusalem").
fn whole_word_haystack(query: &str) -> String {
    let words: Vec<&str> = query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    format!(" {} ", words.join(" "))
}
