//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating a volunteer application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent, empty, or only whitespace.
    MissingField(&'static str),
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Required field is blank: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}
