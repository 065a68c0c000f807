//! Poland: NIP.

use super::CountryRule;
use super::digits::{all_digits, digit, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::PL, "10 digits", structure, checksum);

const WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

fn structure(body: &str) -> bool {
    body.len() == 10 && all_digits(body)
}

fn checksum(body: &str) -> bool {
    // A remainder of 10 is never issued
    let check = weighted_sum(body, &WEIGHTS) % 11;
    check != 10 && check == digit(body.as_bytes()[9])
}
