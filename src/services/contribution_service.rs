//! Contribution retrieval service.
//!
//! Filters contribution history by user and builds the contribution page
//! summary, pulling the featured-event snippet from participation tracking.

use crate::config::DEFAULT_FEATURED_EVENT_LIMIT;
use crate::domain::UserId;
use crate::error::VolunteerResult;
use crate::models::{ContributionSummary, VolunteerContribution};
use crate::repositories::ContributionRepository;
use crate::services::ParticipationService;
use async_trait::async_trait;
use std::sync::Arc;

/// Contribution retrieval trait for business operations.
#[async_trait]
pub trait ContributionService: Send + Sync {
    /// Contributions owned by `user_id`, in original order.
    ///
    /// An unknown user yields an empty list, not an error.
    async fn get_contributions_by_user_id(
        &self,
        user_id: UserId,
    ) -> VolunteerResult<Vec<VolunteerContribution>>;

    /// A user's contributions plus the featured-event snippet.
    async fn get_contribution_page_summary(
        &self,
        user_id: UserId,
    ) -> VolunteerResult<ContributionSummary>;
}

/// Default implementation of ContributionService.
pub struct ContributionServiceImpl {
    contribution_repo: Arc<dyn ContributionRepository>,
    participation: Arc<dyn ParticipationService>,
    featured_event_limit: usize,
}

impl ContributionServiceImpl {
    /// Create a new contribution service with the default snippet size.
    pub fn new(
        contribution_repo: Arc<dyn ContributionRepository>,
        participation: Arc<dyn ParticipationService>,
    ) -> Self {
        Self::with_featured_limit(contribution_repo, participation, DEFAULT_FEATURED_EVENT_LIMIT)
    }

    /// Create a new contribution service with a custom snippet size.
    pub fn with_featured_limit(
        contribution_repo: Arc<dyn ContributionRepository>,
        participation: Arc<dyn ParticipationService>,
        featured_event_limit: usize,
    ) -> Self {
        Self {
            contribution_repo,
            participation,
            featured_event_limit,
        }
    }
}

#[async_trait]
impl ContributionService for ContributionServiceImpl {
    async fn get_contributions_by_user_id(
        &self,
        user_id: UserId,
    ) -> VolunteerResult<Vec<VolunteerContribution>> {
        let contributions = self.contribution_repo.list_for_user(user_id).await?;
        tracing::debug!(
            user_id = %user_id,
            count = contributions.len(),
            "Retrieved contributions"
        );
        Ok(contributions)
    }

    async fn get_contribution_page_summary(
        &self,
        user_id: UserId,
    ) -> VolunteerResult<ContributionSummary> {
        let (contributions, featured_events) = futures::try_join!(
            self.get_contributions_by_user_id(user_id),
            self.participation
                .get_recent_available_programs(self.featured_event_limit),
        )?;

        let summary = ContributionSummary::new(contributions, featured_events);
        tracing::debug!(
            user_id = %user_id,
            contributions = summary.contributions.len(),
            featured = summary.featured_events.len(),
            total_hours = summary.total_hours,
            "Built contribution summary"
        );
        Ok(summary)
    }
}
