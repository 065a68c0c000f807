//! Greece: AFM, 9 digits with powers of two as weights.

use super::CountryRule;
use super::digits::{all_digits, digit, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::EL, "9 digits", structure, checksum);

const WEIGHTS: [u32; 8] = [256, 128, 64, 32, 16, 8, 4, 2];

fn structure(body: &str) -> bool {
    body.len() == 9 && all_digits(body)
}

fn checksum(body: &str) -> bool {
    weighted_sum(body, &WEIGHTS) % 11 % 10 == digit(body.as_bytes()[8])
}
