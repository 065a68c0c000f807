//! Slovenia: 8 digits, weights 8..2 mod 11.

use super::CountryRule;
use super::digits::{all_digits, digit, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::SI,
    "8 digits, not starting with 0",
    structure,
    checksum,
);

const WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

fn structure(body: &str) -> bool {
    body.len() == 8 && all_digits(body) && !body.starts_with('0')
}

fn checksum(body: &str) -> bool {
    let check = match 11 - weighted_sum(body, &WEIGHTS) % 11 {
        11 => return false,
        10 => 0,
        c => c,
    };
    check == digit(body.as_bytes()[7])
}
