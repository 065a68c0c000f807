//! Romania: CIF, 2 to 10 digits.
//!
//! Numbers are written without padding; leading zeros in the input are
//! ignored before the length check.

use super::CountryRule;
use super::digits::{all_digits, digit, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::RO,
    "2 to 10 digits (leading zeros ignored)",
    structure,
    checksum,
);

const WEIGHTS: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];

fn significant(body: &str) -> &str {
    body.trim_start_matches('0')
}

fn structure(body: &str) -> bool {
    all_digits(body) && (2..=10).contains(&significant(body).len())
}

fn checksum(body: &str) -> bool {
    let padded = format!("{:0>10}", significant(body));
    let mut check = weighted_sum(&padded, &WEIGHTS) * 10 % 11;
    if check == 10 {
        check = 0;
    }
    check == digit(padded.as_bytes()[9])
}
