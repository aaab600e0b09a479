//! Volunteer application model.

use crate::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review state of a volunteer application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Submitted and awaiting review
    #[default]
    Pending,
    /// Accepted by an administrator
    Approved,
    /// Declined by an administrator
    Rejected,
}

/// An application to become a volunteer.
///
/// Text fields are optional so an incomplete form can be represented and
/// rejected by validation rather than by deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct VolunteerRegistration {
    pub user_id: UserId,
    pub user_name: Option<String>,
    pub address: Option<String>,
    pub experience: Option<String>,
    pub capability: Option<String>,
    pub status: RegistrationStatus,

    /// Set when the application is accepted for review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,

    /// Set when an administrator approves or rejects the application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl VolunteerRegistration {
    /// Create a new pending application with all four fields present.
    pub fn new(
        user_id: UserId,
        user_name: impl Into<String>,
        address: impl Into<String>,
        experience: impl Into<String>,
        capability: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            user_name: Some(user_name.into()),
            address: Some(address.into()),
            experience: Some(experience.into()),
            capability: Some(capability.into()),
            status: RegistrationStatus::Pending,
            submitted_at: None,
            reviewed_at: None,
            rejection_reason: None,
        }
    }
}
