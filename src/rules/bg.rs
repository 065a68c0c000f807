//! Bulgaria: 9-digit legal entity numbers (BULSTAT) and 10-digit numbers
//! that may belong to a citizen (EGN), a foreigner (LNC) or another
//! taxable person. A 10-digit number is valid if any of the three schemes
//! accepts it.

use super::CountryRule;
use super::digits::{all_digits, digit, is_date, number, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::BG, "9 or 10 digits", structure, checksum);

const PHYSICAL_WEIGHTS: [u32; 9] = [2, 4, 8, 5, 10, 9, 7, 3, 6];
const FOREIGNER_WEIGHTS: [u32; 9] = [21, 19, 17, 13, 11, 9, 7, 3, 1];
const OTHER_WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

fn structure(body: &str) -> bool {
    (body.len() == 9 || body.len() == 10) && all_digits(body)
}

fn checksum(body: &str) -> bool {
    if body.len() == 9 {
        legal_entity(body)
    } else {
        physical_person(body) || foreigner(body) || other(body)
    }
}

fn legal_entity(body: &str) -> bool {
    let mut check = weighted_sum(body, &[1, 2, 3, 4, 5, 6, 7, 8]) % 11;
    if check == 10 {
        check = weighted_sum(body, &[3, 4, 5, 6, 7, 8, 9, 10]) % 11;
        if check == 10 {
            check = 0;
        }
    }
    check == digit(body.as_bytes()[8])
}

fn physical_person(body: &str) -> bool {
    let mut check = weighted_sum(body, &PHYSICAL_WEIGHTS) % 11;
    if check == 10 {
        check = 0;
    }
    if check != digit(body.as_bytes()[9]) {
        return false;
    }

    // YYMMDD; the month carries the century: +20 for the 1800s, +40 for the 2000s
    let yy = number(&body[..2]) as i32;
    let (year, month) = match number(&body[2..4]) {
        m @ 41..=52 => (2000 + yy, m - 40),
        m @ 21..=32 => (1800 + yy, m - 20),
        m => (1900 + yy, m),
    };
    is_date(year, month, number(&body[4..6]))
}

fn foreigner(body: &str) -> bool {
    weighted_sum(body, &FOREIGNER_WEIGHTS) % 10 == digit(body.as_bytes()[9])
}

fn other(body: &str) -> bool {
    let check = match 11 - weighted_sum(body, &OTHER_WEIGHTS) % 11 {
        11 => 0,
        10 => return false,
        c => c,
    };
    check == digit(body.as_bytes()[9])
}
