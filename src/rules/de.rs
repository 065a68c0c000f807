//! Germany: 9 digits, ISO 7064 MOD 11,10 check digit.

use super::CountryRule;
use super::digits::{all_digits, digit, iso7064_mod11_10};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::DE,
    "9 digits, not starting with 0",
    structure,
    checksum,
);

fn structure(body: &str) -> bool {
    body.len() == 9 && all_digits(body) && !body.starts_with('0')
}

fn checksum(body: &str) -> bool {
    iso7064_mod11_10(&body[..8]) == digit(body.as_bytes()[8])
}
