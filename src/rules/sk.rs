//! Slovakia: IČ DPH, a 10-digit number divisible by 11.

use super::CountryRule;
use super::digits::{all_digits, rem};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::SK,
    "10 digits, not starting with 0, third digit 2, 3, 4, 7, 8 or 9",
    structure,
    checksum,
);

fn structure(body: &str) -> bool {
    body.len() == 10
        && all_digits(body)
        && !body.starts_with('0')
        && matches!(body.as_bytes()[2], b'2' | b'3' | b'4' | b'7' | b'8' | b'9')
}

fn checksum(body: &str) -> bool {
    rem(body, 11) == 0
}
