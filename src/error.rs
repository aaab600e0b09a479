//! Error types for the SavePaws volunteer server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ProgramId, UserId, ValidationError};
use thiserror::Error;

/// Errors that can occur in the volunteer services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VolunteerError {
    /// Registration application is incomplete
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No program has the requested identifier
    #[error("Program not found: {0}")]
    ProgramNotFound(ProgramId),

    /// The program was already marked as registered
    #[error("Program already registered: {0}")]
    AlreadyRegistered(ProgramId),

    /// The user has never submitted an application
    #[error("No registration found for user: {0}")]
    RegistrationNotFound(UserId),

    /// Confirmation could not be delivered
    #[error("Notification failed: {0}")]
    Notification(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VolunteerError {
    /// Short machine-readable reason, used by the tool surface.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::ProgramNotFound(_) | Self::RegistrationNotFound(_) => "not_found",
            Self::AlreadyRegistered(_) => "already_registered",
            Self::Notification(_) => "notification_failed",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A .env file exists but could not be read
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with VolunteerError
pub type VolunteerResult<T> = Result<T, VolunteerError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
