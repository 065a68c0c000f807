//! Malta: last two digits are `37 - (weighted sum mod 37)`.

use super::CountryRule;
use super::digits::{all_digits, number, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::MT,
    "8 digits, not starting with 0",
    structure,
    checksum,
);

const WEIGHTS: [u32; 6] = [3, 4, 6, 7, 8, 9];

fn structure(body: &str) -> bool {
    body.len() == 8 && all_digits(body) && !body.starts_with('0')
}

fn checksum(body: &str) -> bool {
    37 - weighted_sum(body, &WEIGHTS) % 37 == number(&body[6..])
}

#[cfg(test)]
mod tests {
    use crate::core::CountryCode;
    use crate::rules::check;

    #[test]
    fn valid() {
        assert!(check(CountryCode::MT, "11679112").is_valid());
    }

    #[test]
    fn invalid() {
        assert!(!check(CountryCode::MT, "11679113").is_valid());
        assert!(!check(CountryCode::MT, "1234567").is_valid());
        assert!(!check(CountryCode::MT, "01679112").is_valid());
    }
}
