//! Contribution page summary.

use super::{VolunteerContribution, VolunteerEvent};
use serde::{Deserialize, Serialize};

/// A user's contributions paired with a small snippet of featured programs.
///
/// Built fresh per request from owned copies; changing it never touches
/// the underlying stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContributionSummary {
    pub contributions: Vec<VolunteerContribution>,
    pub featured_events: Vec<VolunteerEvent>,
    pub total_hours: u64,
}

impl ContributionSummary {
    pub fn new(
        contributions: Vec<VolunteerContribution>,
        featured_events: Vec<VolunteerEvent>,
    ) -> Self {
        let total_hours = contributions.iter().map(|c| u64::from(c.hours_spent)).sum();
        Self {
            contributions,
            featured_events,
            total_hours,
        }
    }
}
