//! Luxembourg: first six digits mod 89 give the last two.

use super::CountryRule;
use super::digits::{all_digits, number};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule =
    CountryRule::new(CountryCode::LU, "8 digits", structure, checksum);

fn structure(body: &str) -> bool {
    body.len() == 8 && all_digits(body)
}

fn checksum(body: &str) -> bool {
    number(&body[..6]) % 89 == number(&body[6..])
}

#[cfg(test)]
mod tests {
    use crate::core::CountryCode;
    use crate::rules::check;

    #[test]
    fn valid() {
        assert!(check(CountryCode::LU, "15027442").is_valid());
        assert!(check(CountryCode::LU, "10000356").is_valid());
    }

    #[test]
    fn invalid() {
        assert!(!check(CountryCode::LU, "10000350").is_valid());
        assert!(!check(CountryCode::LU, "1234567").is_valid());
    }
}
