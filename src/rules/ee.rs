//! Estonia: KMKR number, 9 digits starting with `10`.

use super::CountryRule;
use super::digits::{all_digits, digit, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::EE, "9 digits starting with 10", structure, checksum);

const WEIGHTS: [u32; 8] = [3, 7, 1, 3, 7, 1, 3, 7];

fn structure(body: &str) -> bool {
    body.len() == 9 && all_digits(body) && body.starts_with("10")
}

fn checksum(body: &str) -> bool {
    let check = (10 - weighted_sum(body, &WEIGHTS) % 10) % 10;
    check == digit(body.as_bytes()[8])
}
