use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CountryCode, VatError};

/// A sanitized VAT number split into country and body.
///
/// Constructing one does not validate the body; see
/// [`validate_number`](crate::validate_number) or [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VatNumber {
    /// Issuing member state.
    pub country: CountryCode,
    /// Everything after the country prefix (e.g. "123456789B13" for NL).
    pub body: String,
}

impl VatNumber {
    /// Pair a country with an already sanitized body.
    pub fn new(country: CountryCode, body: impl Into<String>) -> Self {
        Self {
            country,
            body: body.into(),
        }
    }
}

impl fmt::Display for VatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.country, self.body)
    }
}

/// Split a sanitized string into its country and body.
///
/// The first two characters are the prefix (`GR` resolves to
/// [`CountryCode::EL`]); the rest is the body, which may be empty.
///
/// # Errors
///
/// [`VatError::TooShort`] for fewer than two characters,
/// [`VatError::UnknownCountry`] if the prefix is not a member state.
pub fn resolve(sanitized: &str) -> Result<VatNumber, VatError> {
    let split = match sanitized.char_indices().nth(2) {
        Some((idx, _)) => idx,
        None if sanitized.chars().count() == 2 => sanitized.len(),
        None => {
            return Err(VatError::TooShort {
                input: sanitized.into(),
            });
        }
    };
    let (prefix, body) = sanitized.split_at(split);

    let country = CountryCode::from_prefix(prefix).ok_or_else(|| VatError::UnknownCountry {
        prefix: prefix.into(),
    })?;
    Ok(VatNumber::new(country, body))
}
