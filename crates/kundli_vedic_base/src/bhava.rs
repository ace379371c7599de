//! Bhava (house) assignment, whole-sign equal houses.
//!
//! House 1 is the whole sign holding the ascendant, house 2 the next sign,
//! and so on. The exact ascendant degree does not shift house boundaries:
//! every cusp is the start of its sign.

use crate::rashi::Rashi;

/// One of the 12 houses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bhava {
    /// House number, 1-12.
    pub number: u8,
    pub rashi: Rashi,
    /// Ecliptic longitude of the cusp (start of the sign), [0, 360).
    pub cusp_deg: f64,
    pub significations: &'static str,
}

/// House number (1-12) of a body in `planet_sign`, counted from `lagna_sign`.
pub const fn house_from_signs(planet_sign: Rashi, lagna_sign: Rashi) -> u8 {
    (planet_sign.index() + 12 - lagna_sign.index()) % 12 + 1
}

/// The 12 houses starting from the ascendant's sign.
pub fn equal_houses(lagna_sign: Rashi) -> [Bhava; 12] {
    std::array::from_fn(|i| {
        let rashi = Rashi::from_index(lagna_sign.index() + i as u8);
        Bhava {
            number: i as u8 + 1,
            rashi,
            cusp_deg: rashi.index() as f64 * 30.0,
            significations: house_significations(i as u8 + 1),
        }
    })
}

/// What a house governs. Out-of-range numbers give an empty string.
pub const fn house_significations(number: u8) -> &'static str {
    match number {
        1 => "Self, personality, physical body and overall vitality",
        2 => "Wealth, family, speech and accumulated resources",
        3 => "Courage, siblings, communication and short journeys",
        4 => "Home, mother, property, vehicles and inner peace",
        5 => "Children, intelligence, creativity and past merit",
        6 => "Health, enemies, debts, service and daily work",
        7 => "Marriage, partnerships and public dealings",
        8 => "Longevity, transformation, inheritance and hidden matters",
        9 => "Fortune, dharma, father, teachers and long journeys",
        10 => "Career, status, authority and public reputation",
        11 => "Gains, income, friendships and fulfilment of desires",
        12 => "Losses, expenses, foreign lands, liberation and sleep",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn same_sign_is_first_house() {
        for r in ALL_RASHIS {
            assert_eq!(house_from_signs(r, r), 1);
        }
    }

    #[test]
    fn house_wraps() {
        // Lagna Meena, planet Mesha → 2nd house
        assert_eq!(house_from_signs(Rashi::Mesha, Rashi::Meena), 2);
        // Lagna Mesha, planet Meena → 12th house
        assert_eq!(house_from_signs(Rashi::Meena, Rashi::Mesha), 12);
        assert_eq!(house_from_signs(Rashi::Tula, Rashi::Mesha), 7);
    }

    #[test]
    fn houses_in_cyclic_order_for_every_lagna() {
        for lagna in ALL_RASHIS {
            let houses = equal_houses(lagna);
            for (i, h) in houses.iter().enumerate() {
                assert_eq!(h.number as usize, i + 1);
                assert_eq!(h.rashi.index(), (lagna.index() + i as u8) % 12);
                assert_eq!(house_from_signs(h.rashi, lagna), h.number);
                assert!((h.cusp_deg - h.rashi.index() as f64 * 30.0).abs() < 1e-12);
                assert!(!h.significations.is_empty());
            }
        }
    }

    #[test]
    fn significations_out_of_range() {
        assert_eq!(house_significations(0), "");
        assert_eq!(house_significations(13), "");
    }
}
