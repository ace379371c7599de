//! Resolution chain against the built-in tables and an injected fixture.

use chrono_tz::Tz;
use kundli_place::{Country, GeoCoordinate, Gazetteer, Place, Resolution};
use rstest::rstest;

static FIXTURE_PLACES: [Place; 2] = [
    Place {
        name: "Springfield",
        coordinate: GeoCoordinate::new(39.7817, -89.6501),
        timezone: chrono_tz::America::Chicago,
    },
    Place {
        name: "Shelbyville",
        coordinate: GeoCoordinate::new(39.4064, -88.7901),
        timezone: chrono_tz::America::Chicago,
    },
];

static FIXTURE_COUNTRIES: [Country; 1] = [Country {
    name: "Iceland",
    aliases: &["iceland"],
    coordinate: GeoCoordinate::new(64.1466, -21.9426),
    timezone: chrono_tz::Atlantic::Reykjavik,
}];

const FIXTURE_DEFAULT: Country = Country {
    name: "Greenwich",
    aliases: &[],
    coordinate: GeoCoordinate::new(51.4769, 0.0),
    timezone: chrono_tz::Europe::London,
};

fn fixture() -> Gazetteer {
    Gazetteer::new(&FIXTURE_PLACES, &FIXTURE_COUNTRIES, FIXTURE_DEFAULT)
}

#[rstest]
#[case("Delhi", Resolution::Exact, chrono_tz::Asia::Kolkata)]
#[case("Patna, Bihar", Resolution::Partial, chrono_tz::Asia::Kolkata)]
#[case("Kathmandu, Nepal", Resolution::Partial, chrono_tz::Asia::Kathmandu)]
#[case("Brooklyn, New York, USA", Resolution::Partial, chrono_tz::America::New_York)]
#[case("Perth, Australia", Resolution::Country, chrono_tz::Australia::Sydney)]
#[case("Leeds, United Kingdom", Resolution::Country, chrono_tz::Europe::London)]
#[case("Nowhere-in-particular", Resolution::Default, chrono_tz::Asia::Kolkata)]
fn builtin_chain(#[case] query: &str, #[case] resolution: Resolution, #[case] zone: Tz) {
    let r = Gazetteer::builtin().resolve(query);
    assert_eq!(r.resolution, resolution, "{query}");
    assert_eq!(r.timezone, zone, "{query}");
}

#[test]
fn coordinates_and_timezone_agree() {
    let g = Gazetteer::builtin();
    for query in ["Varanasi", "Sydney NSW", "Toronto, Canada", "Atlantis"] {
        let place = g.resolve(query);
        assert_eq!(g.resolve_coordinates(query), (place.coordinate, place.resolution));
        assert_eq!(g.resolve_timezone(query), (place.timezone, place.resolution));
    }
}

#[test]
fn injected_tables_replace_builtin() {
    let g = fixture();
    assert_eq!(g.resolve("springfield").resolution, Resolution::Exact);
    assert_eq!(g.resolve("Reykjavik, Iceland").matched_name, "Iceland");

    let fallback = g.resolve("Delhi");
    assert_eq!(fallback.resolution, Resolution::Default);
    assert_eq!(fallback.matched_name, "Greenwich");
}

#[test]
fn instant_uses_resolved_zone() {
    // Chicago is UTC-5 in January
    let r = fixture()
        .resolve_utc_instant("2000-01-01", "07:00", "Springfield, IL")
        .unwrap();
    assert_eq!(r.utc.hour, 12);
    assert!((r.julian_day - 2_451_545.0).abs() < 1e-9);
}
