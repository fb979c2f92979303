//! Validation error types

use thiserror::Error;

use crate::field::FieldId;

/// Error information for a specific field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: FieldId,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field validation error.
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A rule table that doesn't cover the form it is used with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("duplicate rule for field `{0}`")]
    DuplicateRule(FieldId),
    #[error("no rule configured for field `{0}`")]
    MissingRule(FieldId),
}
