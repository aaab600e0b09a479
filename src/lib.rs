//! SavePaws Volunteer - an MCP server for volunteer event coordination.
//!
//! Volunteers browse available programs, join them, submit an application to
//! become a volunteer, and review the hours they have contributed. All data
//! lives in process-local stores seeded at startup.
//!
//! # Architecture
//!
//! - **domain**: Identifier value objects and validation errors
//! - **models**: Programs, contributions, applications, and summaries
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Storage traits and in-memory implementations
//! - **services**: Participation tracking, contribution retrieval, registration
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{ProgramId, UserId, ValidationError};
pub use error::{ConfigError, VolunteerError, VolunteerResult};
pub use models::{
    ContributionSummary, Notification, RegistrationStatus, VolunteerContribution, VolunteerEvent,
    VolunteerRegistration,
};
pub use server::VolunteerMcpServer;
