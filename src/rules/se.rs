//! Sweden: 10-digit organisation number (Luhn) followed by `01`.

use super::CountryRule;
use super::digits::{all_digits, luhn_valid};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::SE, "10 digits followed by 01", structure, checksum);

fn structure(body: &str) -> bool {
    body.len() == 12 && all_digits(body) && body.ends_with("01")
}

fn checksum(body: &str) -> bool {
    luhn_valid(&body[..10])
}
