//! Portugal: NIF.

use super::CountryRule;
use super::digits::{all_digits, digit, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::PT,
    "9 digits, not starting with 0",
    structure,
    checksum,
);

const WEIGHTS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

fn structure(body: &str) -> bool {
    body.len() == 9 && all_digits(body) && !body.starts_with('0')
}

fn checksum(body: &str) -> bool {
    let mut check = 11 - weighted_sum(body, &WEIGHTS) % 11;
    if check > 9 {
        check = 0;
    }
    check == digit(body.as_bytes()[8])
}
