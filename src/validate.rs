//! Entry points: raw input in, [`ValidationOutcome`] out.

use tracing::trace;

use crate::core::{ValidationOutcome, VatError, VatNumber, resolve, sanitize};
use crate::rules::rule_for;

/// Validate a free-form VAT number (no network call).
///
/// The input must include the country prefix; separators, spaces and case
/// do not matter (`" be 0403.170.701"` is fine). Never panics.
///
/// ```
/// use eurovat::validate;
///
/// assert!(validate("NL123456789B13").is_valid());
/// assert!(!validate("XX123456789").is_valid());
/// ```
pub fn validate(raw: &str) -> ValidationOutcome {
    match sanitize(raw).and_then(|s| resolve(&s)) {
        Ok(number) => validate_number(&number),
        Err(err) => {
            trace!(error = %err, "VAT number rejected before country dispatch");
            ValidationOutcome::Invalid(err)
        }
    }
}

/// Validate an already split VAT number against its country's rule.
pub fn validate_number(number: &VatNumber) -> ValidationOutcome {
    let outcome = rule_for(number.country).validate(&number.body);
    trace!(
        country = %number.country,
        valid = outcome.is_valid(),
        reason = outcome.reason().as_deref().unwrap_or(""),
        "VAT number checked"
    );
    outcome
}

/// Parse and fully validate a free-form VAT number.
///
/// Returns the canonical form on success, so callers can store
/// `EL094259216` rather than whatever the user typed.
///
/// # Errors
///
/// Any [`VatError`]; see [`validate`].
pub fn parse(raw: &str) -> Result<VatNumber, VatError> {
    let number = resolve(&sanitize(raw)?)?;
    validate_number(&number).into_result()?;
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CountryCode;

    #[test]
    fn parse_returns_canonical_form() {
        let n = parse(" gr 094-259-216 ").unwrap();
        assert_eq!(n.country, CountryCode::EL);
        assert_eq!(n.to_string(), "EL094259216");
    }

    #[test]
    fn parse_propagates_the_failing_phase() {
        assert_eq!(parse(""), Err(VatError::EmptyInput));
        assert!(matches!(
            parse("XX123"),
            Err(VatError::UnknownCountry { .. })
        ));
        assert!(matches!(
            parse("DE12345678"),
            Err(VatError::StructuralMismatch { .. })
        ));
        assert!(matches!(
            parse("DE123456789"),
            Err(VatError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn validate_number_skips_sanitizing() {
        let n = VatNumber::new(CountryCode::DE, "136 695 976");
        assert!(!validate_number(&n).is_valid());
        let n = VatNumber::new(CountryCode::DE, "136695976");
        assert!(validate_number(&n).is_valid());
    }
}
