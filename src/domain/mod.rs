//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the identifiers that flow
//! through the volunteer services, and the field-level validation error
//! reported when a registration application is incomplete.

pub mod ids;
pub mod errors;

pub use errors::ValidationError;
pub use ids::{ProgramId, UserId};
