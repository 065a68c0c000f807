//! Arithmetic shared by several national checksum schemes.
//!
//! All helpers expect input that already passed the country's structural
//! check: positions they read as digits are ASCII digits.

use chrono::NaiveDate;

/// Numeric value of an ASCII digit byte.
pub(crate) fn digit(b: u8) -> u32 {
    u32::from(b.wrapping_sub(b'0'))
}

/// Whether `s` is non-empty and all ASCII digits.
pub(crate) fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Match `s` against a fixed-length shape.
///
/// In `shape`, `#` is any ASCII digit, `@` any ASCII uppercase letter, and
/// every other character must appear literally.
pub(crate) fn matches_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'#' => c.is_ascii_digit(),
            b'@' => c.is_ascii_uppercase(),
            lit => c == lit,
        })
}

/// Parse a short run of ASCII digits.
pub(crate) fn number(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + digit(b))
}

/// Sum of `digit * weight`, pairing digits and weights from the left.
///
/// Stops at whichever runs out first.
pub(crate) fn weighted_sum(s: &str, weights: &[u32]) -> u32 {
    s.bytes().zip(weights).map(|(b, w)| digit(b) * w).sum()
}

/// Remainder of a decimal numeral of any length modulo `m`.
///
/// Equivalent to parsing `numeral` as an integer and reducing it, without
/// the width limit.
pub(crate) fn rem(numeral: &str, m: u64) -> u64 {
    numeral
        .bytes()
        .fold(0, |acc, b| (acc * 10 + u64::from(digit(b))) % m)
}

/// Letter-to-numeral convention: `A` = 10 ... `Z` = 35.
pub(crate) fn letter_value(c: u8) -> Option<u32> {
    c.is_ascii_uppercase().then(|| u32::from(c - b'A') + 10)
}

/// Replace every letter in `s` with its two-digit numeral; digits are kept.
pub(crate) fn to_numeral(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match letter_value(b) {
            Some(v) => out.push_str(&v.to_string()),
            None => out.push(char::from(b)),
        }
    }
    out
}

/// ISO 7064 MOD 11,10 check digit over `s`.
pub(crate) fn iso7064_mod11_10(s: &str) -> u32 {
    let mut product = 10;
    for b in s.bytes() {
        let mut sum = (digit(b) + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (2 * sum) % 11;
    }
    let check = 11 - product;
    if check == 10 { 0 } else { check }
}

/// Luhn (mod 10) check over `s`, with the check digit as the last character.
pub(crate) fn luhn_valid(s: &str) -> bool {
    let sum: u32 = s
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = digit(b);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Whether the calendar date exists.
pub(crate) fn is_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}
