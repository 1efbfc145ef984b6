//! Error type for caller misuse.
//!
//! "No data matched" is never an error: it is an empty vector or `None`.
//! Errors are reserved for input that cannot be interpreted at all.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias for fallible window operations.
pub type Result<T> = std::result::Result<T, WindowError>;

/// Errors reported to the caller.
#[derive(Debug, Error)]
pub enum WindowError {
    /// A date-like value could not be normalized to a calendar date.
    #[error("malformed date '{value}': {source}")]
    MalformedDate {
        /// The rejected input.
        value: String,
        /// Parser failure for the canonical `YYYY-MM-DD` shape.
        #[source]
        source: chrono::ParseError,
    },
    /// Strict-mode precondition checks failed.
    #[error("invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = WindowError::Validation(vec![
            ValidationError {
                kind: ValidationErrorKind::InvalidDuration,
                message: "min_days must be at least 1".into(),
            },
            ValidationError {
                kind: ValidationErrorKind::NonFiniteScore,
                message: "score on 2024-01-01 AM is NaN".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: min_days must be at least 1; score on 2024-01-01 AM is NaN"
        );
    }
}
