use crate::domain::{ProgramId, UserId};
use crate::error::VolunteerResult;
use crate::models::*;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository for volunteer programs.
///
/// Implementations own an ordered program list and hand out copies; a
/// caller can never mutate stored programs through a returned value.
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// All programs in insertion order.
    async fn list(&self) -> VolunteerResult<Vec<VolunteerEvent>>;

    /// The first `limit` programs in insertion order.
    async fn list_first(&self, limit: usize) -> VolunteerResult<Vec<VolunteerEvent>>;

    /// Retrieve a single program by ID.
    async fn get(&self, id: ProgramId) -> VolunteerResult<VolunteerEvent>;

    /// Flip a program's registration flag from false to true.
    ///
    /// The check and the update happen under one exclusive access, so two
    /// concurrent callers cannot both succeed for the same program.
    async fn mark_registered(&self, id: ProgramId) -> VolunteerResult<VolunteerEvent>;
}

/// Repository for contribution records.
#[async_trait]
pub trait ContributionRepository: Send + Sync {
    /// Contributions owned by a user, in insertion order.
    async fn list_for_user(&self, user_id: UserId) -> VolunteerResult<Vec<VolunteerContribution>>;
}

/// Repository for volunteer applications, keyed by user.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Store an application, replacing any earlier one from the same user.
    async fn save(&self, registration: &VolunteerRegistration) -> VolunteerResult<()>;

    /// The stored application for a user, if any.
    async fn get_for_user(&self, user_id: UserId)
        -> VolunteerResult<Option<VolunteerRegistration>>;

    /// Record an administrator's decision on a user's application.
    ///
    /// Fails with `RegistrationNotFound` when the user never applied.
    async fn review(
        &self,
        user_id: UserId,
        status: RegistrationStatus,
        rejection_reason: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> VolunteerResult<VolunteerRegistration>;
}
