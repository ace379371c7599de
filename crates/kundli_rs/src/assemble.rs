//! Chart assembly: birth input → [`BirthChart`].

use kundli_bodies::{ALL_BODIES, Body};
use kundli_place::{ResolvedInstant, Resolution};
use kundli_vedic_base::{
    Placement, Rashi, assess_strengths, ayanamsha_for, calculate_ascendant, celestial_longitude,
    detect_doshas, detect_yogas, equal_houses, find_aspects, is_retrograde,
    nakshatra_from_longitude, rashi_from_longitude,
};

use crate::chart::{
    AscendantInfo, AspectInfo, BirthChart, ChartQuality, DoshaInfo, House, Location, MoonSignInfo,
    NakshatraPosition, PlanetPosition, SignInfo, StrengthInfo, YogaInfo,
};
use crate::config::{ChartConfig, ChartContext};
use crate::error::ChartError;
use crate::input::BirthInput;

/// Generate a birth chart.
///
/// Fails only on invalid input: an out-of-range configuration, a missing
/// name, date or place, an unparseable date or time, or a local time skipped
/// by a DST change. An
/// unknown place, a missing birth time or an unavailable ascendant produce a
/// chart flagged in [`BirthChart::quality`] and explained in
/// [`BirthChart::warnings`].
#[tracing::instrument(skip_all, fields(system = %input.system))]
pub fn generate_chart(input: &BirthInput, ctx: &ChartContext) -> Result<BirthChart, ChartError> {
    let config = &ctx.config;
    config.validate()?;
    input.validate()?;
    let mut warnings = Vec::new();

    let time_known = input.known_time().is_some();
    let clock_time = input.known_time().unwrap_or(config.default_birth_time.as_str());
    if !time_known {
        tracing::warn!(assumed = %clock_time, "birth time unknown");
        warnings.push(format!(
            "Birth time not provided; {clock_time} local time assumed. Ascendant and houses are approximate."
        ));
    }

    let resolved = ctx
        .gazetteer
        .resolve_utc_instant(&input.birth_date, clock_time, &input.birth_place)?;
    if let Some(w) = place_warning(&input.birth_place, &resolved) {
        warnings.push(w);
    }

    let jd = resolved.julian_day;
    let system = input.system;
    let coord = resolved.place.coordinate;
    tracing::debug!(utc = %resolved.utc, jd, %system, "computing positions");

    let ascendant = calculate_ascendant(jd, coord.latitude, coord.longitude, system);
    let longitudes = ALL_BODIES.map(|b| celestial_longitude(b, jd, system));
    let moon_sign = rashi_from_longitude(longitudes[Body::Moon.index() as usize].degrees).rashi;

    let anchor = match ascendant.rashi() {
        Some(r) => {
            tracing::debug!(ascendant = r.name(), "ascendant computed");
            r
        }
        None => {
            tracing::warn!(latitude = coord.latitude, "ascendant unavailable, counting houses from the Moon");
            warnings.push(
                "Ascendant could not be computed for this location; houses are counted from the Moon sign."
                    .to_string(),
            );
            moon_sign
        }
    };

    let placements: Vec<Placement> = longitudes
        .into_iter()
        .map(|lon| {
            let retro = is_retrograde(lon.body, jd, system, config.retrograde_window_days);
            Placement::new(lon, anchor, retro)
        })
        .collect();

    let quality = ChartQuality::new(
        time_known,
        resolved.place.resolution,
        resolved.place.resolution,
        ascendant.is_known(),
    );

    Ok(BirthChart {
        name: input.name.trim().to_string(),
        system,
        utc_instant: resolved.utc.to_string(),
        julian_day: jd,
        location: Location {
            query: input.birth_place.trim().to_string(),
            matched_name: resolved.place.matched_name.to_string(),
            latitude: coord.latitude,
            longitude: coord.longitude,
            timezone: resolved.place.timezone.name().to_string(),
        },
        ayanamsa: ayanamsha_for(system, jd),
        ascendant: AscendantInfo::from(&ascendant),
        sun_sign: sign_of(&placements, Body::Sun),
        moon_sign: moon_info(&placements),
        planets: planet_positions(&placements),
        houses: equal_houses(anchor).iter().map(House::from).collect(),
        aspects: find_aspects(&placements, &config.aspect_orbs)
            .iter()
            .map(AspectInfo::from)
            .collect(),
        yogas: detect_yogas(&placements, config.yoga_conjunction_orb_deg)
            .iter()
            .map(YogaInfo::from)
            .collect(),
        doshas: detect_doshas(&placements).iter().map(DoshaInfo::from).collect(),
        strengths: assess_strengths(&placements)
            .into_iter()
            .map(StrengthInfo::from)
            .collect(),
        quality,
        warnings,
    })
}

/// Generate a chart with built-in data and default settings.
pub fn generate_chart_default(input: &BirthInput) -> Result<BirthChart, ChartError> {
    generate_chart(input, &ChartContext::default())
}

/// Generate a chart with built-in place data and custom settings.
pub fn generate_chart_with_config(
    input: &BirthInput,
    config: ChartConfig,
) -> Result<BirthChart, ChartError> {
    let ctx = ChartContext {
        config,
        ..ChartContext::default()
    };
    generate_chart(input, &ctx)
}

fn place_warning(query: &str, resolved: &ResolvedInstant) -> Option<String> {
    let place = &resolved.place;
    match place.resolution {
        Resolution::Exact | Resolution::Partial => None,
        Resolution::Country => Some(format!(
            "Birth place '{}' matched only at country level ({}); coordinates and timezone are approximate.",
            query.trim(),
            place.matched_name
        )),
        Resolution::Default => Some(format!(
            "Birth place '{}' was not recognised; {} was used instead. Results may be approximate.",
            query.trim(),
            place.matched_name
        )),
    }
}

fn sign_of(placements: &[Placement], body: Body) -> SignInfo {
    let sign = placements
        .iter()
        .find(|p| p.body == body)
        .map_or(Rashi::Mesha, Placement::sign);
    SignInfo::from(sign)
}

fn moon_info(placements: &[Placement]) -> MoonSignInfo {
    let lon = placements
        .iter()
        .find(|p| p.body == Body::Moon)
        .map_or(0.0, |p| p.longitude_deg);
    MoonSignInfo {
        sign: sign_of(placements, Body::Moon),
        nakshatra: NakshatraPosition::from(&nakshatra_from_longitude(lon)),
    }
}

fn planet_positions(placements: &[Placement]) -> Vec<PlanetPosition> {
    placements
        .iter()
        .map(|p| {
            let nakshatra = (p.body == Body::Moon).then(|| nakshatra_from_longitude(p.longitude_deg));
            PlanetPosition::new(p, nakshatra.as_ref())
        })
        .collect()
}

/// Sign of the ascendant, or `None` for the sentinel.
pub fn ascendant_sign(chart: &BirthChart) -> Option<&str> {
    (chart.ascendant.longitude.is_some()).then_some(chart.ascendant.sign.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_vedic_base::ChartSystem;

    fn delhi(system: ChartSystem) -> BirthInput {
        BirthInput::new("Test", "1990-06-15", "14:30", "Delhi, India", system)
    }

    #[test]
    fn missing_place_is_validation_error() {
        let mut input = delhi(ChartSystem::Vedic);
        input.birth_place = "  ".into();
        assert!(matches!(generate_chart_default(&input), Err(ChartError::Validation(_))));
    }

    #[test]
    fn bad_time_is_time_error() {
        let mut input = delhi(ChartSystem::Vedic);
        input.birth_time = "25:61".into();
        assert!(matches!(generate_chart_default(&input), Err(ChartError::Time(_))));
    }

    #[test]
    fn unknown_time_uses_configured_default() {
        let mut input = delhi(ChartSystem::Vedic);
        input.birth_time = String::new();
        let chart = generate_chart_default(&input).unwrap();
        // 12:00 IST = 06:30 UTC
        assert_eq!(chart.utc_instant, "1990-06-15T06:30:00Z");
        assert!(!chart.quality.time_known);
        assert!(chart.quality.approximate);
        assert!(chart.warnings.iter().any(|w| w.contains("Birth time not provided")));

        let config = ChartConfig {
            default_birth_time: "06:00".into(),
            ..ChartConfig::default()
        };
        let chart = generate_chart_with_config(&input, config).unwrap();
        assert_eq!(chart.utc_instant, "1990-06-15T00:30:00Z");
    }

    #[test]
    fn invalid_config_rejected_before_birth_data() {
        let noon = ChartConfig {
            default_birth_time: "noon".into(),
            ..ChartConfig::default()
        };
        let mut input = delhi(ChartSystem::Vedic);
        input.birth_time = String::new();
        assert!(matches!(generate_chart_with_config(&input, noon), Err(ChartError::Config(_))));

        let nan_window = ChartConfig {
            retrograde_window_days: f64::NAN,
            ..ChartConfig::default()
        };
        let err = generate_chart_with_config(&delhi(ChartSystem::Vedic), nan_window).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)), "{err:?}");
        assert!(err.to_string().starts_with("invalid configuration"));

        let ctx = ChartContext {
            config: ChartConfig {
                yoga_conjunction_orb_deg: -1.0,
                ..ChartConfig::default()
            },
            ..ChartContext::default()
        };
        assert!(matches!(generate_chart(&delhi(ChartSystem::Vedic), &ctx), Err(ChartError::Config(_))));
    }

    #[test]
    fn moon_only_has_nakshatra() {
        let chart = generate_chart_default(&delhi(ChartSystem::Vedic)).unwrap();
        for p in &chart.planets {
            assert_eq!(p.nakshatra.is_some(), p.planet == "Moon", "{}", p.planet);
        }
        assert_eq!(
            chart.planet("Moon").and_then(|m| m.nakshatra.as_ref()),
            Some(&chart.moon_sign.nakshatra)
        );
    }

    #[test]
    fn ascendant_sign_helper() {
        let chart = generate_chart_default(&delhi(ChartSystem::Western)).unwrap();
        assert_eq!(ascendant_sign(&chart), Some(chart.ascendant.sign.as_str()));
    }
}
