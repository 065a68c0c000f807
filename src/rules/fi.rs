//! Finland: Y-tunnus.

use super::CountryRule;
use super::digits::{all_digits, digit, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::FI, "8 digits", structure, checksum);

const WEIGHTS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];

fn structure(body: &str) -> bool {
    body.len() == 8 && all_digits(body)
}

fn checksum(body: &str) -> bool {
    let check = match 11 - weighted_sum(body, &WEIGHTS) % 11 {
        11 => 0,
        10 => return false,
        c => c,
    };
    check == digit(body.as_bytes()[7])
}
