use thiserror::Error;

use crate::core::VatError;

/// VIES error codes that mean "try again later" rather than "no".
const TRANSIENT_CODES: &[&str] = &[
    "MS_UNAVAILABLE",
    "MS_MAX_CONCURRENT_REQ",
    "GLOBAL_MAX_CONCURRENT_REQ",
    "SERVICE_UNAVAILABLE",
    "TIMEOUT",
];

/// Error from the VIES API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ViesError {
    /// Connection or transport failure.
    #[error("VIES network error: {0}")]
    Network(String),

    /// No response within the configured timeout.
    #[error("VIES request timed out")]
    Timeout,

    /// Non-success HTTP status without a structured VIES error body.
    #[error("VIES HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// VIES answered with an error code (e.g. member state unavailable).
    #[error("VIES API error {code}: {message}")]
    ApiError {
        /// VIES error code such as `MS_UNAVAILABLE` or `INVALID_INPUT`.
        code: String,
        /// Human-readable message, if VIES sent one.
        message: String,
    },

    /// The response body was not what VIES documents.
    #[error("VIES parse error: {0}")]
    ParseError(String),
}

impl ViesError {
    /// Whether retrying the same request later may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            Self::ApiError { code, .. } => TRANSIENT_CODES.contains(&code.as_str()),
            Self::ParseError(_) => false,
        }
    }
}

/// Error from [`check_active`](super::check_active).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ActiveCheckError {
    /// The number failed local validation; VIES was not contacted.
    #[error(transparent)]
    Invalid(#[from] VatError),

    /// The registry lookup failed.
    #[error(transparent)]
    Registry(#[from] ViesError),
}
