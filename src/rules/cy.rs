//! Cyprus: 8 digits and a check letter.

use super::CountryRule;
use super::digits::{digit, matches_shape};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::CY,
    "8 digits followed by a letter, starting with 0, 1, 3, 4, 5 or 9",
    structure,
    checksum,
);

/// Replacement values for digits in even (0-based) positions.
const EVEN_POSITION_VALUES: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];

fn structure(body: &str) -> bool {
    matches_shape(body, "########@")
        && matches!(body.as_bytes()[0], b'0' | b'1' | b'3' | b'4' | b'5' | b'9')
        && !body.starts_with("12")
}

fn checksum(body: &str) -> bool {
    let bytes = body.as_bytes();
    let sum: u32 = bytes[..8]
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let d = digit(b);
            if i % 2 == 0 {
                EVEN_POSITION_VALUES[d as usize]
            } else {
                d
            }
        })
        .sum();
    // sum % 26 < 26, always a letter
    let letter = b'A' + (sum % 26) as u8;
    letter == bytes[8]
}
