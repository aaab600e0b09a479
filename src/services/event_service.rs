//! Event service layer.
//!
//! Orchestrates joining a program: mark it registered, then confirm to the
//! user. A failed confirmation is logged but does not undo the join.

use crate::config::DEFAULT_CONFIRMATION_MESSAGE;
use crate::domain::{ProgramId, UserId};
use crate::error::VolunteerResult;
use crate::models::VolunteerEvent;
use crate::services::{NotificationService, ParticipationService};
use async_trait::async_trait;
use std::sync::Arc;

/// Event service trait for business operations.
#[async_trait]
pub trait EventService: Send + Sync {
    /// All programs, for the event list page.
    async fn get_available_programs(&self) -> VolunteerResult<Vec<VolunteerEvent>>;

    /// A single program, for the event details page.
    async fn get_program(&self, program_id: ProgramId) -> VolunteerResult<VolunteerEvent>;

    /// Register `user_id` for a program and send a confirmation.
    async fn join_program(
        &self,
        user_id: UserId,
        program_id: ProgramId,
    ) -> VolunteerResult<VolunteerEvent>;
}

/// Default implementation of EventService.
pub struct EventServiceImpl {
    participation: Arc<dyn ParticipationService>,
    notifier: Arc<dyn NotificationService>,
    confirmation_message: String,
}

impl EventServiceImpl {
    /// Create a new event service with the default confirmation text.
    pub fn new(
        participation: Arc<dyn ParticipationService>,
        notifier: Arc<dyn NotificationService>,
    ) -> Self {
        Self::with_confirmation_message(participation, notifier, DEFAULT_CONFIRMATION_MESSAGE)
    }

    /// Create a new event service with custom confirmation text.
    pub fn with_confirmation_message(
        participation: Arc<dyn ParticipationService>,
        notifier: Arc<dyn NotificationService>,
        confirmation_message: impl Into<String>,
    ) -> Self {
        Self {
            participation,
            notifier,
            confirmation_message: confirmation_message.into(),
        }
    }
}

#[async_trait]
impl EventService for EventServiceImpl {
    async fn get_available_programs(&self) -> VolunteerResult<Vec<VolunteerEvent>> {
        self.participation.get_available_programs().await
    }

    async fn get_program(&self, program_id: ProgramId) -> VolunteerResult<VolunteerEvent> {
        self.participation.get_program(program_id).await
    }

    async fn join_program(
        &self,
        user_id: UserId,
        program_id: ProgramId,
    ) -> VolunteerResult<VolunteerEvent> {
        let program = self.participation.register_for_program(program_id).await?;

        if let Err(e) = self
            .notifier
            .send_notification(user_id, &self.confirmation_message)
            .await
        {
            tracing::warn!(
                user_id = %user_id,
                program_id = %program_id,
                error = %e,
                "Joined program but confirmation was not delivered"
            );
        }

        tracing::info!(user_id = %user_id, program_id = %program_id, "User joined program");
        Ok(program)
    }
}
