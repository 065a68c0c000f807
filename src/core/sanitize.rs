//! Lexical normalization of free-form VAT number input.

use super::VatError;

/// Characters people put between groups of digits.
///
/// `+` and `*` are not separators: legacy Irish numbers carry them in
/// the second position.
const SEPARATORS: &[char] = &[
    '-', '.', ',', '/', '\\', '_', ':', ';', '\'', '"', '(', ')', '\u{b7}',
];

/// Normalize raw input into the canonical `{country}{body}` form.
///
/// Removes all whitespace (including non-breaking spaces pasted from web
/// pages) and common separator punctuation, then uppercases ASCII letters.
/// Nothing is interpreted here; `"at-U-12345678 "` becomes `"ATU12345678"`.
///
/// # Errors
///
/// Returns [`VatError::EmptyInput`] if nothing is left.
pub fn sanitize(raw: &str) -> Result<String, VatError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !SEPARATORS.contains(c))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if cleaned.is_empty() {
        return Err(VatError::EmptyInput);
    }
    Ok(cleaned)
}
