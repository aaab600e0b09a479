//! Data models for SavePaws volunteer entities.
//!
//! This module contains the data structures representing volunteer programs,
//! contribution records, volunteer applications, and the views built from them.

pub mod contribution;
pub mod event;
pub mod notification;
pub mod registration;
pub mod summary;

pub use contribution::VolunteerContribution;
pub use event::VolunteerEvent;
pub use notification::Notification;
pub use registration::{RegistrationStatus, VolunteerRegistration};
pub use summary::ContributionSummary;
