//! France: two-character key followed by the 9-digit SIREN.
//!
//! A numeric key is `(12 + 3 * (SIREN mod 97)) mod 97`. Keys containing
//! letters (issued when numeric keys ran out) have no published check and
//! are accepted on structure alone.

use super::CountryRule;
use super::digits::{all_digits, number, rem};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::FR,
    "2-character key (digits or letters except I and O) followed by 9 digits",
    structure,
    checksum,
);

fn is_key_char(b: u8) -> bool {
    b.is_ascii_digit() || (b.is_ascii_uppercase() && b != b'I' && b != b'O')
}

fn structure(body: &str) -> bool {
    body.len() == 11 && body.bytes().take(2).all(is_key_char) && all_digits(&body[2..])
}

fn checksum(body: &str) -> bool {
    let key = &body[..2];
    if !all_digits(key) {
        return true;
    }
    let expected = (12 + 3 * rem(&body[2..], 97)) % 97;
    expected == u64::from(number(key))
}
