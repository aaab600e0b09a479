use crate::domain::UserId;
use crate::error::VolunteerResult;
use crate::models::VolunteerContribution;
use crate::repositories::traits::ContributionRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Contribution repository backed by a process-local list.
///
/// Records are immutable once stored; there is no write path after construction.
pub struct InMemoryContributionRepository {
    contributions: RwLock<Vec<VolunteerContribution>>,
}

impl InMemoryContributionRepository {
    pub fn new(contributions: Vec<VolunteerContribution>) -> Self {
        Self {
            contributions: RwLock::new(contributions),
        }
    }
}

#[async_trait]
impl ContributionRepository for InMemoryContributionRepository {
    async fn list_for_user(&self, user_id: UserId) -> VolunteerResult<Vec<VolunteerContribution>> {
        let contributions = self.contributions.read().await;
        Ok(contributions
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }
}
