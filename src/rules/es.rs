//! Spain: NIF/CIF.
//!
//! The first and last characters decide which scheme applies:
//!
//! | Shape | Holder | Check |
//! |-------|--------|-------|
//! | `[A-HJUV]` + 8 digits | national legal entity | digit |
//! | `[A-HJNP-SUVW]` + 7 digits + `[A-J]` | legal entity, letter form | letter |
//! | `[0-9YZ]` + 7 digits + letter | resident individual (DNI/NIE) | mod 23 letter |
//! | `[KLMX]` + 7 digits + letter | other individual | mod 23 letter |

use super::CountryRule;
use super::digits::{all_digits, digit, number};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::ES,
    "letter or digit, 7 digits, letter or digit (NIF/CIF layout)",
    structure,
    checksum,
);

const DNI_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scheme {
    Entity,
    EntityLetter,
    Resident,
    Individual,
}

fn scheme(body: &str) -> Option<Scheme> {
    let b = body.as_bytes();
    if b.len() != 9 || !body.is_ascii() || !all_digits(&body[1..8]) {
        return None;
    }
    let (first, last) = (b[0], b[8]);
    match first {
        b'A'..=b'H' | b'J' | b'U' | b'V' if last.is_ascii_digit() => Some(Scheme::Entity),
        b'A'..=b'H' | b'J' | b'N' | b'P'..=b'S' | b'U' | b'V' | b'W'
            if matches!(last, b'A'..=b'J') =>
        {
            Some(Scheme::EntityLetter)
        }
        b'0'..=b'9' | b'Y' | b'Z' if last.is_ascii_uppercase() => Some(Scheme::Resident),
        b'K' | b'L' | b'M' | b'X' if last.is_ascii_uppercase() => Some(Scheme::Individual),
        _ => None,
    }
}

fn structure(body: &str) -> bool {
    scheme(body).is_some()
}

fn checksum(body: &str) -> bool {
    let last = body.as_bytes()[8];
    match scheme(body) {
        Some(Scheme::Entity) => entity_check(body) % 10 == digit(last),
        // 1..=10 maps to A..=J
        Some(Scheme::EntityLetter) => b'A' + (entity_check(body) - 1) as u8 == last,
        Some(Scheme::Resident) => {
            let lead = match body.as_bytes()[0] {
                b'Y' => 1,
                b'Z' => 2,
                d => digit(d),
            };
            let n = lead * 10_000_000 + number(&body[1..8]);
            DNI_LETTERS[(n % 23) as usize] == last
        }
        Some(Scheme::Individual) => DNI_LETTERS[(number(&body[1..8]) % 23) as usize] == last,
        None => false,
    }
}

/// `10 - s mod 10`, in 1..=10, where `s` cross-sums doubled digits in odd positions.
fn entity_check(body: &str) -> u32 {
    let sum: u32 = body.as_bytes()[1..8]
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let d = digit(b);
            if i % 2 == 0 {
                let doubled = d * 2;
                doubled / 10 + doubled % 10
            } else {
                d
            }
        })
        .sum();
    10 - sum % 10
}
