//! Registration service layer.
//!
//! Validates and records volunteer applications and their review by an
//! administrator. Status is tracked per user: a user counts as registered
//! once one of their applications passed validation, whatever its review
//! outcome.

use crate::domain::UserId;
use crate::error::VolunteerResult;
use crate::models::{RegistrationStatus, VolunteerRegistration};
use crate::repositories::RegistrationRepository;
use crate::services::validation;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Registration service trait for business operations.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Validate and record an application.
    ///
    /// On validation failure nothing is stored and the user's status is
    /// unchanged. Returns the stored (pending) application on success.
    async fn submit_registration(
        &self,
        application: VolunteerRegistration,
    ) -> VolunteerResult<VolunteerRegistration>;

    /// Whether `user_id` has a recorded application.
    async fn get_registration_status(&self, user_id: UserId) -> VolunteerResult<bool>;

    /// The user's stored application, or `None` if they never applied.
    async fn get_registration_details(
        &self,
        user_id: UserId,
    ) -> VolunteerResult<Option<VolunteerRegistration>>;

    /// Mark the user's application as approved.
    async fn approve_registration(&self, user_id: UserId) -> VolunteerResult<VolunteerRegistration>;

    /// Mark the user's application as rejected, keeping the optional reason.
    async fn reject_registration(
        &self,
        user_id: UserId,
        reason: Option<String>,
    ) -> VolunteerResult<VolunteerRegistration>;
}

/// Default implementation of RegistrationService.
pub struct RegistrationServiceImpl {
    registration_repo: Arc<dyn RegistrationRepository>,
}

impl RegistrationServiceImpl {
    /// Create a new registration service.
    pub fn new(registration_repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { registration_repo }
    }
}

#[async_trait]
impl RegistrationService for RegistrationServiceImpl {
    async fn submit_registration(
        &self,
        application: VolunteerRegistration,
    ) -> VolunteerResult<VolunteerRegistration> {
        if let Err(e) = validation::validate_application(&application) {
            tracing::warn!(
                user_id = %application.user_id,
                field = e.field(),
                "Registration rejected: input data is incomplete"
            );
            return Err(e.into());
        }

        let record = VolunteerRegistration {
            status: RegistrationStatus::Pending,
            submitted_at: Some(Utc::now()),
            reviewed_at: None,
            rejection_reason: None,
            ..application
        };

        self.registration_repo.save(&record).await?;
        tracing::info!(
            user_id = %record.user_id,
            user_name = record.user_name.as_deref().unwrap_or_default(),
            "Application submitted"
        );
        Ok(record)
    }

    async fn get_registration_status(&self, user_id: UserId) -> VolunteerResult<bool> {
        let registered = self
            .registration_repo
            .get_for_user(user_id)
            .await?
            .is_some();
        tracing::debug!(user_id = %user_id, registered, "Checked registration status");
        Ok(registered)
    }

    async fn get_registration_details(
        &self,
        user_id: UserId,
    ) -> VolunteerResult<Option<VolunteerRegistration>> {
        self.registration_repo.get_for_user(user_id).await
    }

    async fn approve_registration(&self, user_id: UserId) -> VolunteerResult<VolunteerRegistration> {
        let record = self
            .registration_repo
            .review(user_id, RegistrationStatus::Approved, None, Utc::now())
            .await?;
        tracing::info!(user_id = %user_id, "Application approved");
        Ok(record)
    }

    async fn reject_registration(
        &self,
        user_id: UserId,
        reason: Option<String>,
    ) -> VolunteerResult<VolunteerRegistration> {
        let reason = reason.filter(|r| !r.trim().is_empty());
        let record = self
            .registration_repo
            .review(user_id, RegistrationStatus::Rejected, reason, Utc::now())
            .await?;
        tracing::info!(
            user_id = %user_id,
            reason = record.rejection_reason.as_deref().unwrap_or_default(),
            "Application rejected"
        );
        Ok(record)
    }
}
