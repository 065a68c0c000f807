//! Lithuania: 9 digits for legal entities, 12 for temporarily registered
//! taxpayers. The second-to-last digit is always `1`.

use super::CountryRule;
use super::digits::{all_digits, digit};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::LT,
    "9 or 12 digits with 1 as the second-to-last digit",
    structure,
    checksum,
);

fn structure(body: &str) -> bool {
    (body.len() == 9 || body.len() == 12)
        && all_digits(body)
        && body.as_bytes()[body.len() - 2] == b'1'
}

/// Weights cycle through 1..=9, starting at `1 + offset`.
fn cyclic_sum(digits: &[u8], offset: usize) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, &b)| digit(b) * (1 + (i + offset) % 9) as u32)
        .sum()
}

fn checksum(body: &str) -> bool {
    let (payload, check) = body.as_bytes().split_at(body.len() - 1);
    let mut expected = cyclic_sum(payload, 0) % 11;
    if expected == 10 {
        expected = cyclic_sum(payload, 2) % 11;
        if expected == 10 {
            expected = 0;
        }
    }
    expected == digit(check[0])
}
