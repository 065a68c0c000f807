//! Netherlands: 9 digits, a literal `B`, and a 2-digit sub-number.
//!
//! Two official check schemes are in use and a number is valid if either
//! accepts it:
//!
//! * **Legacy** (numbers issued before 2020): the first eight digits
//!   weighted 9..2, mod 11, with 10 read as 0, give the ninth digit.
//! * **Mod 97** (sole-proprietor numbers issued since 2020): replace `B`
//!   with `11`, prefix `2321` (the numeral for "NL"), and the resulting
//!   17-digit integer must be 1 mod 97.
//!
//! Which scheme applies is not derivable from the number itself, so both
//! are tried.

use super::CountryRule;
use super::digits::{digit, matches_shape, rem, to_numeral, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::NL,
    "9 digits, 'B', 2 digits",
    structure,
    checksum,
);

const WEIGHTS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

/// Numeral of the "NL" prefix under the letter-to-numeral convention (N=23, L=21).
const COUNTRY_NUMERAL: &str = "2321";

fn structure(body: &str) -> bool {
    matches_shape(body, "#########B##")
}

fn checksum(body: &str) -> bool {
    legacy_mod11(body) || mod97(body)
}

fn legacy_mod11(body: &str) -> bool {
    let mut check = weighted_sum(body, &WEIGHTS) % 11;
    if check > 9 {
        check = 0;
    }
    check == digit(body.as_bytes()[8])
}

fn mod97(body: &str) -> bool {
    let numeral = format!("{COUNTRY_NUMERAL}{}", to_numeral(body));
    rem(&numeral, 97) == 1
}
