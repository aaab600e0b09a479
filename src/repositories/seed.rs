//! Fixed demo data loaded at startup.

use crate::domain::{ProgramId, UserId};
use crate::models::{VolunteerContribution, VolunteerEvent};
use chrono::{DateTime, Duration, Utc};

/// Demo programs: 101 open for registration, 102 already registered.
pub fn demo_programs(now: DateTime<Utc>) -> Vec<VolunteerEvent> {
    let beach_start = now + Duration::days(3);
    let trees_start = now + Duration::days(10);

    vec![
        VolunteerEvent::new(
            ProgramId::new(101),
            "Beach Cleanup",
            "Clear plastics and debris.",
            "Coastal Reserve",
            beach_start,
            beach_start + Duration::hours(4),
        ),
        VolunteerEvent::new(
            ProgramId::new(102),
            "Tree Planting",
            "Help reforestation effort.",
            "City Park",
            trees_start,
            trees_start + Duration::hours(3),
        )
        .with_registered(true),
    ]
}

/// Demo contributions, both owned by user 1.
pub fn demo_contributions(now: DateTime<Utc>) -> Vec<VolunteerContribution> {
    let user = UserId::new(1);
    vec![
        VolunteerContribution::new("Past Event A", 8, now - Duration::days(30), "Completed", user),
        VolunteerContribution::new("Ongoing Project B", 4, now, "Ongoing", user),
    ]
}
