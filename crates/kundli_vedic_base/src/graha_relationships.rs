//! Sign dignity and natural friendship of the classical planets.
//!
//! Exaltation, debilitation and own-sign tables plus the natural
//! (naisargika) friendship table, from BPHS (Brihat Parashara Hora Shastra).
//! Rahu and Ketu have no dignity and are neutral to every planet.

use kundli_bodies::Body;

use crate::rashi::Rashi;

/// Exaltation degree (sidereal) for the seven classical planets.
///
/// BPHS: Sun 10 Ari=10, Moon 3 Tau=33, Mars 28 Cap=298,
/// Mercury 15 Vir=165, Jupiter 5 Can=95, Venus 27 Pis=357, Saturn 20 Lib=200.
pub const fn exaltation_degree(body: Body) -> Option<f64> {
    match body {
        Body::Sun => Some(10.0),
        Body::Moon => Some(33.0),
        Body::Mars => Some(298.0),
        Body::Mercury => Some(165.0),
        Body::Jupiter => Some(95.0),
        Body::Venus => Some(357.0),
        Body::Saturn => Some(200.0),
        Body::Rahu | Body::Ketu => None,
    }
}

/// Sign of exaltation.
pub const fn exaltation_sign(body: Body) -> Option<Rashi> {
    match exaltation_degree(body) {
        Some(deg) => Some(Rashi::from_index((deg / 30.0) as u8)),
        None => None,
    }
}

/// Sign of debilitation, the seventh from exaltation.
pub const fn debilitation_sign(body: Body) -> Option<Rashi> {
    match exaltation_sign(body) {
        Some(r) => Some(Rashi::from_index(r.index() + 6)),
        None => None,
    }
}

/// Signs ruled by `body`. Empty for Rahu/Ketu.
pub const fn own_signs(body: Body) -> &'static [Rashi] {
    match body {
        Body::Sun => &[Rashi::Simha],
        Body::Moon => &[Rashi::Karka],
        Body::Mars => &[Rashi::Mesha, Rashi::Vrischika],
        Body::Mercury => &[Rashi::Mithuna, Rashi::Kanya],
        Body::Jupiter => &[Rashi::Dhanu, Rashi::Meena],
        Body::Venus => &[Rashi::Vrishabha, Rashi::Tula],
        Body::Saturn => &[Rashi::Makara, Rashi::Kumbha],
        Body::Rahu | Body::Ketu => &[],
    }
}

/// Whether `rashi` is one of the signs ruled by `body`.
pub fn is_own_sign(body: Body, rashi: Rashi) -> bool {
    own_signs(body).contains(&rashi)
}

/// Natural relationship between two planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural (naisargika) friendship of `body` towards `other` (BPHS table).
///
/// The table is not symmetric: the Moon has no enemies, yet Mercury treats
/// the Moon as an enemy.
pub const fn naisargika_maitri(body: Body, other: Body) -> NaisargikaMaitri {
    use Body::*;
    use NaisargikaMaitri::*;

    match (body, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn
        (Sun, Moon | Mars | Jupiter) => Friend,
        (Sun, Venus | Saturn) => Enemy,

        // Moon: friends=Sun,Mercury; no enemies
        (Moon, Sun | Mercury) => Friend,

        // Mars: friends=Sun,Moon,Jupiter; enemies=Mercury
        (Mars, Sun | Moon | Jupiter) => Friend,
        (Mars, Mercury) => Enemy,

        // Mercury: friends=Sun,Venus; enemies=Moon
        (Mercury, Sun | Venus) => Friend,
        (Mercury, Moon) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Jupiter, Sun | Moon | Mars) => Friend,
        (Jupiter, Mercury | Venus) => Enemy,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Venus, Mercury | Saturn) => Friend,
        (Venus, Sun | Moon) => Enemy,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Saturn, Mercury | Venus) => Friend,
        (Saturn, Sun | Moon | Mars) => Enemy,

        _ => Neutral,
    }
}
