//! Belgium: enterprise number, 97 minus the first eight digits mod 97.
//!
//! Current numbers have 10 digits and start with `0`. The 9-digit form
//! issued before 2005 is accepted and left-padded with a zero.

use super::CountryRule;
use super::digits::{all_digits, number};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::BE,
    "10 digits starting with 0, or 9 digits",
    structure,
    checksum,
);

fn structure(body: &str) -> bool {
    all_digits(body) && (body.len() == 9 || (body.len() == 10 && body.starts_with('0')))
}

fn checksum(body: &str) -> bool {
    let padded = if body.len() == 9 {
        format!("0{body}")
    } else {
        body.to_string()
    };
    97 - number(&padded[..8]) % 97 == number(&padded[8..])
}

#[cfg(test)]
mod tests {
    use crate::core::{CountryCode, ValidationOutcome, VatError};
    use crate::rules::check;

    #[test]
    fn valid() {
        assert!(check(CountryCode::BE, "0403170701").is_valid());
        assert!(check(CountryCode::BE, "0202239951").is_valid());
        // 97 - (2003 mod 97) = 34
        assert!(check(CountryCode::BE, "0000200334").is_valid());
    }

    #[test]
    fn nine_digit_legacy_form_is_padded() {
        assert!(check(CountryCode::BE, "403170701").is_valid());
        assert!(!check(CountryCode::BE, "897221791").is_valid());
    }

    #[test]
    fn wrong_check_digits() {
        for body in ["0897221791", "0603601206", "0000200335", "0123456789"] {
            assert_eq!(
                check(CountryCode::BE, body),
                ValidationOutcome::Invalid(VatError::ChecksumMismatch {
                    country: CountryCode::BE
                }),
                "{body}"
            );
        }
    }

    #[test]
    fn ten_digits_must_start_with_zero() {
        for body in ["1897221789", "1400521335", "9897222581", "60260262", "897222680A"] {
            assert!(matches!(
                check(CountryCode::BE, body),
                ValidationOutcome::Invalid(VatError::StructuralMismatch { .. })
            ));
        }
    }
}
