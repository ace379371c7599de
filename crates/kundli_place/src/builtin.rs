//! Built-in gazetteer data.
//!
//! Coordinates are city centres rounded to four decimals. Every place carries
//! its own IANA zone so coordinate and timezone lookups always agree.

use chrono_tz::{America, Asia, Australia, Europe, Indian};

use crate::gazetteer::{Country, GeoCoordinate, Place};

/// Known places, matched by name.
pub static BUILTIN_PLACES: [Place; 57] = [
    place("Delhi", 28.6139, 77.209, Asia::Kolkata),
    place("New Delhi", 28.6139, 77.209, Asia::Kolkata),
    place("Mumbai", 19.076, 72.8777, Asia::Kolkata),
    place("Kolkata", 22.5726, 88.3639, Asia::Kolkata),
    place("Chennai", 13.0827, 80.2707, Asia::Kolkata),
    place("Bengaluru", 12.9716, 77.5946, Asia::Kolkata),
    place("Bangalore", 12.9716, 77.5946, Asia::Kolkata),
    place("Hyderabad", 17.385, 78.4867, Asia::Kolkata),
    place("Pune", 18.5204, 73.8567, Asia::Kolkata),
    place("Ahmedabad", 23.0225, 72.5714, Asia::Kolkata),
    place("Jaipur", 26.9124, 75.7873, Asia::Kolkata),
    place("Lucknow", 26.8467, 80.9462, Asia::Kolkata),
    place("Kanpur", 26.4499, 80.3319, Asia::Kolkata),
    place("Varanasi", 25.3176, 82.9739, Asia::Kolkata),
    place("Prayagraj", 25.4358, 81.8463, Asia::Kolkata),
    place("Ayodhya", 26.7922, 82.1998, Asia::Kolkata),
    place("Mathura", 27.4924, 77.6737, Asia::Kolkata),
    place("Vrindavan", 27.565, 77.6593, Asia::Kolkata),
    place("Haridwar", 29.9457, 78.1642, Asia::Kolkata),
    place("Dehradun", 30.3165, 78.0322, Asia::Kolkata),
    place("Chandigarh", 30.7333, 76.7794, Asia::Kolkata),
    place("Amritsar", 31.634, 74.8723, Asia::Kolkata),
    place("Patna", 25.5941, 85.1376, Asia::Kolkata),
    place("Madhubani", 26.3483, 86.0712, Asia::Kolkata),
    place("Darbhanga", 26.1542, 85.8918, Asia::Kolkata),
    place("Muzaffarpur", 26.1209, 85.3647, Asia::Kolkata),
    place("Sitamarhi", 26.5952, 85.4808, Asia::Kolkata),
    place("Gaya", 24.7914, 85.0002, Asia::Kolkata),
    place("Bhagalpur", 25.2425, 86.9842, Asia::Kolkata),
    place("Ranchi", 23.3441, 85.3096, Asia::Kolkata),
    place("Deoghar", 24.4852, 86.6948, Asia::Kolkata),
    place("Bhopal", 23.2599, 77.4126, Asia::Kolkata),
    place("Indore", 22.7196, 75.8577, Asia::Kolkata),
    place("Ujjain", 23.1765, 75.7885, Asia::Kolkata),
    place("Nagpur", 21.1458, 79.0882, Asia::Kolkata),
    place("Surat", 21.1702, 72.8311, Asia::Kolkata),
    place("Guwahati", 26.1445, 91.7362, Asia::Kolkata),
    place("Bhubaneswar", 20.2961, 85.8245, Asia::Kolkata),
    place("Puri", 19.8135, 85.8312, Asia::Kolkata),
    place("Visakhapatnam", 17.6868, 83.2185, Asia::Kolkata),
    place("Tirupati", 13.6288, 79.4192, Asia::Kolkata),
    place("Madurai", 9.9252, 78.1198, Asia::Kolkata),
    place("Coimbatore", 11.0168, 76.9558, Asia::Kolkata),
    place("Kochi", 9.9312, 76.2673, Asia::Kolkata),
    place("Thiruvananthapuram", 8.5241, 76.9366, Asia::Kolkata),
    place("Kathmandu", 27.7172, 85.324, Asia::Kathmandu),
    place("Janakpur", 26.7288, 85.9263, Asia::Kathmandu),
    place("Dhaka", 23.8103, 90.4125, Asia::Dhaka),
    place("Colombo", 6.9271, 79.8612, Asia::Colombo),
    place("Dubai", 25.2048, 55.2708, Asia::Dubai),
    place("Singapore", 1.3521, 103.8198, Asia::Singapore),
    place("London", 51.5074, -0.1278, Europe::London),
    place("New York", 40.7128, -74.006, America::New_York),
    place("Chicago", 41.8781, -87.6298, America::Chicago),
    place("Los Angeles", 34.0522, -118.2437, America::Los_Angeles),
    place("Toronto", 43.6532, -79.3832, America::Toronto),
    place("Sydney", -33.8688, 151.2093, Australia::Sydney),
];

/// Country fallbacks, searched when no place matches.
pub static BUILTIN_COUNTRIES: [Country; 11] = [
    Country {
        name: "India",
        aliases: &["india", "bharat"],
        coordinate: GeoCoordinate::new(28.6139, 77.209),
        timezone: Asia::Kolkata,
    },
    Country {
        name: "Nepal",
        aliases: &["nepal"],
        coordinate: GeoCoordinate::new(27.7172, 85.324),
        timezone: Asia::Kathmandu,
    },
    Country {
        name: "Bangladesh",
        aliases: &["bangladesh"],
        coordinate: GeoCoordinate::new(23.8103, 90.4125),
        timezone: Asia::Dhaka,
    },
    Country {
        name: "Sri Lanka",
        aliases: &["sri lanka"],
        coordinate: GeoCoordinate::new(6.9271, 79.8612),
        timezone: Asia::Colombo,
    },
    Country {
        name: "United Arab Emirates",
        aliases: &["uae", "united arab emirates"],
        coordinate: GeoCoordinate::new(25.2048, 55.2708),
        timezone: Asia::Dubai,
    },
    Country {
        name: "Singapore",
        aliases: &["singapore"],
        coordinate: GeoCoordinate::new(1.3521, 103.8198),
        timezone: Asia::Singapore,
    },
    Country {
        name: "United Kingdom",
        aliases: &["uk", "united kingdom", "england", "britain"],
        coordinate: GeoCoordinate::new(51.5074, -0.1278),
        timezone: Europe::London,
    },
    Country {
        name: "United States",
        aliases: &["usa", "united states", "america"],
        coordinate: GeoCoordinate::new(40.7128, -74.006),
        timezone: America::New_York,
    },
    Country {
        name: "Canada",
        aliases: &["canada"],
        coordinate: GeoCoordinate::new(43.6532, -79.3832),
        timezone: America::Toronto,
    },
    Country {
        name: "Australia",
        aliases: &["australia"],
        coordinate: GeoCoordinate::new(-33.8688, 151.2093),
        timezone: Australia::Sydney,
    },
    Country {
        name: "Mauritius",
        aliases: &["mauritius"],
        coordinate: GeoCoordinate::new(-20.1609, 57.5012),
        timezone: Indian::Mauritius,
    },
];

/// Final fallback: New Delhi, Indian Standard Time.
pub const DEFAULT_LOCATION: Country = Country {
    name: "New Delhi, India",
    aliases: &[],
    coordinate: GeoCoordinate::new(28.6139, 77.209),
    timezone: Asia::Kolkata,
};

const fn place(
    name: &'static str,
    latitude: f64,
    longitude: f64,
    timezone: chrono_tz::Tz,
) -> Place {
    Place {
        name,
        coordinate: GeoCoordinate::new(latitude, longitude),
        timezone,
    }
}
