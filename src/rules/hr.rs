//! Croatia: OIB, ISO 7064 MOD 11,10 like Germany.

use super::CountryRule;
use super::digits::{all_digits, digit, iso7064_mod11_10};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::HR, "11 digits", structure, checksum);

fn structure(body: &str) -> bool {
    body.len() == 11 && all_digits(body)
}

fn checksum(body: &str) -> bool {
    iso7064_mod11_10(&body[..10]) == digit(body.as_bytes()[10])
}

#[cfg(test)]
mod tests {
    use crate::core::{CountryCode, ValidationOutcome, VatError};
    use crate::rules::check;

    #[test]
    fn valid() {
        assert!(check(CountryCode::HR, "33392005961").is_valid());
    }

    #[test]
    fn invalid() {
        assert_eq!(
            check(CountryCode::HR, "33392005962"),
            ValidationOutcome::Invalid(VatError::ChecksumMismatch {
                country: CountryCode::HR
            })
        );
        assert!(!check(CountryCode::HR, "1234567890").is_valid());
    }
}
