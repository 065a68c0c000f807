use super::VatError;

/// Result of validating one VAT number locally.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ValidationOutcome {
    /// Structure and checksum both verified.
    Valid,
    /// Rejected; the error says which phase failed and why.
    Invalid(VatError),
}

impl ValidationOutcome {
    /// Whether the number passed every check.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The rejection, if any.
    pub fn error(&self) -> Option<&VatError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    /// Human-readable rejection reason, for diagnostics only.
    pub fn reason(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Convert into a `Result` for call sites that propagate with `?`.
    pub fn into_result(self) -> Result<(), VatError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(e) => Err(e),
        }
    }
}

impl From<VatError> for ValidationOutcome {
    fn from(err: VatError) -> Self {
        Self::Invalid(err)
    }
}

impl From<Result<(), VatError>> for ValidationOutcome {
    fn from(result: Result<(), VatError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(e) => Self::Invalid(e),
        }
    }
}
