//! Ireland.
//!
//! Current numbers are 7 digits, a check letter, and since 2013 an optional
//! second letter (`A`, `H`, or `W` for none). Numbers issued before 2013
//! have a letter, `+` or `*` in the second position; they are rearranged
//! into the current layout before the check letter is computed.

use super::CountryRule;
use super::digits::{all_digits, weighted_sum};
use crate::core::CountryCode;

pub(super) static RULE: CountryRule = CountryRule::new(
    CountryCode::IE,
    "7 digits and a letter (plus optional A, H or W), or the pre-2013 form",
    structure,
    checksum,
);

const WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];
const CHECK_LETTERS: &[u8; 23] = b"WABCDEFGHIJKLMNOPQRSTUV";

fn is_check_letter(b: u8) -> bool {
    (b'A'..=b'W').contains(&b)
}

fn is_current(body: &str) -> bool {
    let b = body.as_bytes();
    (b.len() == 8 || b.len() == 9)
        && body.is_ascii()
        && all_digits(&body[..7])
        && is_check_letter(b[7])
        && b.get(8).is_none_or(|s| matches!(s, b'A' | b'H' | b'W'))
}

fn is_legacy(body: &str) -> bool {
    let b = body.as_bytes();
    b.len() == 8
        && body.is_ascii()
        && b[0].is_ascii_digit()
        && (b[1].is_ascii_uppercase() || b[1] == b'+' || b[1] == b'*')
        && all_digits(&body[2..7])
        && is_check_letter(b[7])
}

fn structure(body: &str) -> bool {
    is_current(body) || is_legacy(body)
}

fn checksum(body: &str) -> bool {
    let normalized = if is_current(body) {
        body.to_string()
    } else {
        // 8+12345A -> 0123458A
        format!("0{}{}{}", &body[2..7], &body[..1], &body[7..])
    };
    let b = normalized.as_bytes();
    let mut sum = weighted_sum(&normalized[..7], &WEIGHTS);
    if let Some(&second) = b.get(8) {
        sum += 9 * match second {
            b'A' => 1,
            b'H' => 8,
            _ => 0,
        };
    }
    CHECK_LETTERS[(sum % 23) as usize] == b[7]
}

#[cfg(test)]
mod tests {
    use crate::core::{CountryCode, ValidationOutcome, VatError};
    use crate::rules::check;

    #[test]
    fn valid_current() {
        assert!(check(CountryCode::IE, "6433435F").is_valid());
        assert!(check(CountryCode::IE, "6433435OA").is_valid());
        assert!(check(CountryCode::IE, "1234567TW").is_valid());
    }

    #[test]
    fn valid_legacy() {
        assert!(check(CountryCode::IE, "8D79739I").is_valid());
    }

    #[test]
    fn multibyte_input_is_rejected_not_sliced() {
        assert!(!check(CountryCode::IE, "12345Ä7").is_valid());
        assert!(!check(CountryCode::IE, "1Ä34567A").is_valid());
    }

    #[test]
    fn invalid() {
        assert_eq!(
            check(CountryCode::IE, "6433435G"),
            ValidationOutcome::Invalid(VatError::ChecksumMismatch {
                country: CountryCode::IE
            })
        );
        assert!(!check(CountryCode::IE, "6433435FA").is_valid());
        assert!(matches!(
            check(CountryCode::IE, "123456X"),
            ValidationOutcome::Invalid(VatError::StructuralMismatch { .. })
        ));
        assert!(!check(CountryCode::IE, "123").is_valid());
    }
}
