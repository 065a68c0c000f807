//! Austria: `U` followed by 8 digits, the last one a check digit.

use super::CountryRule;
use super::digits::{digit, matches_shape};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::AT, "'U' followed by 8 digits", structure, checksum);

const WEIGHTS: [u32; 7] = [1, 2, 1, 2, 1, 2, 1];

fn structure(body: &str) -> bool {
    matches_shape(body, "U########")
}

fn checksum(body: &str) -> bool {
    let digits = &body.as_bytes()[1..];
    // Two-digit products contribute their cross sum
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&b, w)| {
            let p = digit(b) * w;
            p / 10 + p % 10
        })
        .sum();
    let check = (10 - (sum + 4) % 10) % 10;
    check == digit(digits[7])
}
