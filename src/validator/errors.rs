//! Validation error types

use thiserror::Error;

use crate::error::ErrorKind;

/// A candidate value rejected by a validator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Identifier fails the character/length rule
    #[error("invalid id '{id}': {reason}")]
    InvalidFormat { id: String, reason: &'static str },

    /// Value outside its allowed bound
    #[error("{field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    pub(crate) fn invalid_format(id: &str, reason: &'static str) -> Self {
        Self::InvalidFormat {
            id: id.to_string(),
            reason,
        }
    }

    pub(crate) fn out_of_range(
        field: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
            expected,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            ValidationError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
