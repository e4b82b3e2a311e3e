//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures raised by entities and value
/// objects (validation, invariants, identifiers). Storage and transport
/// concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value failed validation.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: msg.into(),
        }
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Name of the offending field, for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_carries_field_and_message() {
        let err = DomainError::validation("name", "must not be empty");
        assert_eq!(err.field(), Some("name"));
        assert_eq!(err.to_string(), "invalid name: must not be empty");
    }

    #[test]
    fn non_validation_errors_have_no_field() {
        assert_eq!(DomainError::invariant("x").field(), None);
        assert_eq!(DomainError::invalid_id("x").field(), None);
    }
}
