//! Italy: partita IVA.
//!
//! Digits 8-10 are the issuing province office; the last digit is a Luhn
//! check over the first ten.

use super::CountryRule;
use super::digits::{all_digits, luhn_valid, number};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::IT, "11 digits", structure, checksum);

fn structure(body: &str) -> bool {
    body.len() == 11 && all_digits(body)
}

fn checksum(body: &str) -> bool {
    if number(&body[..7]) == 0 {
        return false;
    }
    let office = number(&body[7..10]);
    if !matches!(office, 1..=100 | 120 | 121 | 888 | 999) {
        return false;
    }
    luhn_valid(body)
}
