use crate::domain::UserId;
use crate::error::{VolunteerError, VolunteerResult};
use crate::models::{RegistrationStatus, VolunteerRegistration};
use crate::repositories::traits::RegistrationRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Registration repository keeping one application per user in memory.
#[derive(Default)]
pub struct InMemoryRegistrationRepository {
    registrations: RwLock<HashMap<UserId, VolunteerRegistration>>,
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn save(&self, registration: &VolunteerRegistration) -> VolunteerResult<()> {
        self.registrations
            .write()
            .await
            .insert(registration.user_id, registration.clone());
        Ok(())
    }

    async fn get_for_user(
        &self,
        user_id: UserId,
    ) -> VolunteerResult<Option<VolunteerRegistration>> {
        Ok(self.registrations.read().await.get(&user_id).cloned())
    }

    async fn review(
        &self,
        user_id: UserId,
        status: RegistrationStatus,
        rejection_reason: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> VolunteerResult<VolunteerRegistration> {
        let mut registrations = self.registrations.write().await;
        let registration = registrations
            .get_mut(&user_id)
            .ok_or(VolunteerError::RegistrationNotFound(user_id))?;

        registration.status = status;
        registration.rejection_reason = rejection_reason;
        registration.reviewed_at = Some(reviewed_at);
        Ok(registration.clone())
    }
}
