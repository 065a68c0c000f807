//! Czechia: DIČ.
//!
//! * 8 digits: legal entity, weighted mod 11.
//! * 9 digits starting with `6`: "special" individual number.
//! * other 9 digits: birth number issued before 1954 (no check digit).
//! * 10 digits: birth number, divisible by 11.

use super::CountryRule;
use super::digits::{all_digits, digit, is_date, number, rem, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::CZ, "8, 9 or 10 digits", structure, checksum);

const WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];
const SPECIAL_CHECK: [u32; 11] = [8, 7, 6, 5, 4, 3, 2, 1, 0, 9, 8];

fn structure(body: &str) -> bool {
    (8..=10).contains(&body.len()) && all_digits(body)
}

fn checksum(body: &str) -> bool {
    match body.len() {
        8 => legal_entity(body),
        9 if body.starts_with('6') => special(body),
        9 => old_birth_number(body),
        _ => birth_number(body),
    }
}

fn legal_entity(body: &str) -> bool {
    if body.starts_with('9') {
        return false;
    }
    let check = match 11 - weighted_sum(body, &WEIGHTS) % 11 {
        10 => 0,
        11 => 1,
        c => c,
    };
    check == digit(body.as_bytes()[7])
}

fn special(body: &str) -> bool {
    let a = 11 - weighted_sum(&body[1..], &WEIGHTS) % 11;
    SPECIAL_CHECK[(a - 1) as usize] == digit(body.as_bytes()[8])
}

fn old_birth_number(body: &str) -> bool {
    let yy = number(&body[..2]) as i32;
    let mut month = number(&body[2..4]);
    if month > 50 {
        month -= 50;
    }
    yy < 54 && is_date(1900 + yy, month, number(&body[4..6]))
}

fn birth_number(body: &str) -> bool {
    let yy = number(&body[..2]) as i32;
    let year = if yy < 54 { 2000 + yy } else { 1900 + yy };
    // +50 for women, +20 (men) and +70 (women) when a day ran out of serials
    let month = match number(&body[2..4]) {
        m @ 71..=82 => m - 70,
        m @ 51..=62 => m - 50,
        m @ 21..=32 => m - 20,
        m => m,
    };
    if !is_date(year, month, number(&body[4..6])) {
        return false;
    }
    // Before 1985 a remainder of 10 was written as check digit 0
    rem(body, 11) == 0 || (year < 1985 && rem(&body[..9], 11) == 10 && body.ends_with('0'))
}
