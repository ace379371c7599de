//! The nine chart bodies.

use std::str::FromStr;

use thiserror::Error;

/// Sun, Moon, the five classical planets, and the two lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 bodies in chart order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

/// The 7 classical bodies, excluding the lunar nodes.
pub const CLASSICAL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// English name, as used in chart output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sanskrit (graha) name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mercury => "Buddh",
            Self::Venus => "Shukra",
            Self::Mars => "Mangal",
            Self::Jupiter => "Guru",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// All 9 bodies in chart order.
    pub const fn all() -> &'static [Body; 9] {
        &ALL_BODIES
    }
}

/// Name did not match any body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown body '{0}'")]
pub struct UnknownBody(pub String);

impl FromStr for Body {
    type Err = UnknownBody;

    /// Accepts English or Sanskrit names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| {
                b.name().eq_ignore_ascii_case(needle)
                    || b.sanskrit_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownBody(s.to_string()))
    }
}
