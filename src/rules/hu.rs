//! Hungary: 8 digits, weights 9,7,3,1 mod 10.

use super::CountryRule;
use super::digits::{all_digits, digit, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::HU, "8 digits", structure, checksum);

const WEIGHTS: [u32; 7] = [9, 7, 3, 1, 9, 7, 3];

fn structure(body: &str) -> bool {
    body.len() == 8 && all_digits(body)
}

fn checksum(body: &str) -> bool {
    (10 - weighted_sum(body, &WEIGHTS) % 10) % 10 == digit(body.as_bytes()[7])
}
