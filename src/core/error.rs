use thiserror::Error;

use super::CountryCode;

/// Why a VAT number was rejected by local validation.
///
/// Every variant is a deterministic function of the input, so none of them
/// is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatError {
    /// Nothing was left after stripping whitespace and separators.
    #[error("empty input: no characters left after sanitizing")]
    EmptyInput,

    /// Fewer than two characters, so there is no country prefix.
    #[error("too short: '{input}' has no two-letter country prefix")]
    TooShort {
        /// The sanitized input.
        input: String,
    },

    /// The two-letter prefix is not an EU member state VAT prefix.
    #[error("unknown country code '{prefix}'")]
    UnknownCountry {
        /// The unrecognized prefix.
        prefix: String,
    },

    /// The body does not have the length or character shape the country issues.
    #[error("invalid format for country {country}: expected {expected}")]
    StructuralMismatch {
        /// Issuing country.
        country: CountryCode,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },

    /// The body is well-shaped but its check digits do not verify.
    #[error("checksum mismatch for country {country}")]
    ChecksumMismatch {
        /// Issuing country.
        country: CountryCode,
    },
}

/// Fieldless classification of a [`VatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`VatError::EmptyInput`].
    EmptyInput,
    /// See [`VatError::TooShort`].
    TooShort,
    /// See [`VatError::UnknownCountry`].
    UnknownCountry,
    /// See [`VatError::StructuralMismatch`].
    StructuralMismatch,
    /// See [`VatError::ChecksumMismatch`].
    ChecksumMismatch,
}

impl VatError {
    /// Classify this error without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::TooShort { .. } => ErrorKind::TooShort,
            Self::UnknownCountry { .. } => ErrorKind::UnknownCountry,
            Self::StructuralMismatch { .. } => ErrorKind::StructuralMismatch,
            Self::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
        }
    }

    /// The country the failure relates to, if resolution got that far.
    pub fn country(&self) -> Option<CountryCode> {
        match self {
            Self::StructuralMismatch { country, .. } | Self::ChecksumMismatch { country } => {
                Some(*country)
            }
            _ => None,
        }
    }
}
