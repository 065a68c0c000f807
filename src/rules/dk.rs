//! Denmark: CVR number, weighted sum divisible by 11.

use super::CountryRule;
use super::digits::{all_digits, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::DK,
    "8 digits, not starting with 0",
    structure,
    checksum,
);

const WEIGHTS: [u32; 8] = [2, 7, 6, 5, 4, 3, 2, 1];

fn structure(body: &str) -> bool {
    body.len() == 8 && all_digits(body) && !body.starts_with('0')
}

fn checksum(body: &str) -> bool {
    weighted_sum(body, &WEIGHTS) % 11 == 0
}
