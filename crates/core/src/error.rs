//! Domain error model.

use thiserror::Error;

use crate::validation::{ValidationErrors, Violation};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant displays its message verbatim: callers match on the text
/// (and, for validation failures, parse it back into a violation list), so no
/// prefixes are added here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value had the wrong runtime type for the operation.
    #[error("{0}")]
    Type(String),

    /// An argument was missing or not of an accepted shape.
    #[error("{0}")]
    InvalidArgument(String),

    /// A candidate record failed schema validation.
    ///
    /// Displays as the JSON-serialized violation list.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Authorization failure at the domain boundary.
    #[error("{0}")]
    Unauthorized(String),
}

impl DomainError {
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Violations carried by a validation error, if any.
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            DomainError::Validation(errors) => Some(errors.violations()),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}
