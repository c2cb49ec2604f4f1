use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Format validation failed.
    #[error("format validation failed: {0}")]
    Validation(#[from] rutkit_canonical::ValidationError),
    /// Check digit computation failed.
    #[error("check digit computation failed: {0}")]
    CheckDigit(#[from] crate::check_digit::CheckDigitError),
    /// The supplied check character does not match the computed one.
    #[error("check digit mismatch for '{value}'")]
    CheckDigitMismatch {
        /// Offending identifier text.
        value: String,
    },
}
