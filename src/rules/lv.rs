//! Latvia: PVN number.
//!
//! Legal entities start with a digit above 3. Natural persons carry their
//! birth date (DDMMYY plus a century digit), except personal codes issued
//! since 2017, which start with `32` and carry no date or check digit.

use super::CountryRule;
use super::digits::{all_digits, digit, is_date, number, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::LV, "11 digits", structure, checksum);

const LEGAL_WEIGHTS: [u32; 11] = [9, 1, 4, 8, 3, 10, 2, 5, 7, 6, 1];
const PERSONAL_WEIGHTS: [u32; 10] = [10, 5, 8, 4, 2, 1, 6, 3, 7, 9];

fn structure(body: &str) -> bool {
    body.len() == 11 && all_digits(body)
}

fn checksum(body: &str) -> bool {
    let bytes = body.as_bytes();
    if bytes[0] > b'3' {
        return weighted_sum(body, &LEGAL_WEIGHTS) % 11 == 3;
    }
    if body.starts_with("32") {
        return true;
    }

    let century = digit(bytes[6]);
    if century > 2 {
        return false;
    }
    let year = 1800 + 100 * century as i32 + number(&body[4..6]) as i32;
    if !is_date(year, number(&body[2..4]), number(&body[..2])) {
        return false;
    }
    (1 + weighted_sum(body, &PERSONAL_WEIGHTS)) % 11 % 10 == digit(bytes[10])
}

#[cfg(test)]
mod tests {
    use crate::core::{CountryCode, ValidationOutcome, VatError};
    use crate::rules::check;

    #[test]
    fn valid_legal_entity() {
        assert!(check(CountryCode::LV, "40003521600").is_valid());
    }

    #[test]
    fn valid_natural_person() {
        assert!(check(CountryCode::LV, "16117519997").is_valid());
    }

    #[test]
    fn new_personal_code_has_no_check_digit() {
        assert!(check(CountryCode::LV, "32579461005").is_valid());
    }

    #[test]
    fn invalid() {
        assert_eq!(
            check(CountryCode::LV, "40003521601"),
            ValidationOutcome::Invalid(VatError::ChecksumMismatch {
                country: CountryCode::LV
            })
        );
        // 31 November does not exist
        assert!(!check(CountryCode::LV, "31117519997").is_valid());
        assert!(!check(CountryCode::LV, "1234567890").is_valid());
    }
}
