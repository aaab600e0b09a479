//! Contribution model: hours a volunteer spent on an event.

use crate::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A historical record of volunteer work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolunteerContribution {
    /// Title of the event worked on (free text, not a program reference)
    pub event_title: String,

    /// Hours spent
    pub hours_spent: u32,

    /// When the work was completed
    pub completion_date: DateTime<Utc>,

    /// Free-text status (e.g., "Completed", "Ongoing")
    pub status: String,

    /// Volunteer who owns this record
    pub user_id: UserId,
}

impl VolunteerContribution {
    /// Create a new contribution record.
    pub fn new(
        event_title: impl Into<String>,
        hours_spent: u32,
        completion_date: DateTime<Utc>,
        status: impl Into<String>,
        user_id: UserId,
    ) -> Self {
        Self {
            event_title: event_title.into(),
            hours_spent,
            completion_date,
            status: status.into(),
            user_id,
        }
    }
}
