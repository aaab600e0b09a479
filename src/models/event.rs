//! Volunteer program (event) model.

use crate::domain::ProgramId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A volunteer program a user can register for.
///
/// The registration flag only ever moves from `false` to `true`; it is
/// private so the transition goes through [`VolunteerEvent::mark_registered`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolunteerEvent {
    /// Unique identifier within the program list
    pub id: ProgramId,

    /// Short display title
    pub title: String,

    /// What volunteers will be doing
    pub description: String,

    /// Where the program takes place
    pub location: String,

    /// When the program starts
    pub start_date: DateTime<Utc>,

    /// When the program ends
    pub end_date: DateTime<Utc>,

    #[serde(rename = "is_registered")]
    registered: bool,
}

impl VolunteerEvent {
    /// Create a new, unregistered program.
    pub fn new(
        id: ProgramId,
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            location: location.into(),
            start_date,
            end_date,
            registered: false,
        }
    }

    /// Builder-style helper for seeding programs that start out registered.
    pub fn with_registered(mut self, registered: bool) -> Self {
        self.registered = registered;
        self
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Mark the program as registered.
    ///
    /// Returns `false` without changing anything if it already was.
    pub fn mark_registered(&mut self) -> bool {
        if self.registered {
            return false;
        }
        self.registered = true;
        true
    }
}
