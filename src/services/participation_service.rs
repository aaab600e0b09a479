//! Participation tracking service.
//!
//! Owns the program list: listing, the bounded "recent" snippet, and
//! marking a program as registered.

use crate::domain::ProgramId;
use crate::error::VolunteerResult;
use crate::models::VolunteerEvent;
use crate::repositories::ProgramRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Participation tracking trait for business operations.
#[async_trait]
pub trait ParticipationService: Send + Sync {
    /// All programs in insertion order, registered ones included.
    async fn get_available_programs(&self) -> VolunteerResult<Vec<VolunteerEvent>>;

    /// The first `limit` programs in insertion order.
    ///
    /// Returns `min(limit, total)` programs, always as an owned copy.
    async fn get_recent_available_programs(
        &self,
        limit: usize,
    ) -> VolunteerResult<Vec<VolunteerEvent>>;

    /// Look up a single program.
    async fn get_program(&self, program_id: ProgramId) -> VolunteerResult<VolunteerEvent>;

    /// Programs whose registration flag is set, in insertion order.
    async fn get_registered_programs(&self) -> VolunteerResult<Vec<VolunteerEvent>>;

    /// Mark a program as registered.
    ///
    /// Fails with `ProgramNotFound` for an unknown ID and `AlreadyRegistered`
    /// when the flag is already set. Neither failure mutates anything.
    async fn register_for_program(&self, program_id: ProgramId)
        -> VolunteerResult<VolunteerEvent>;
}

/// Default implementation of ParticipationService.
pub struct ParticipationServiceImpl {
    program_repo: Arc<dyn ProgramRepository>,
}

impl ParticipationServiceImpl {
    /// Create a new participation service.
    pub fn new(program_repo: Arc<dyn ProgramRepository>) -> Self {
        Self { program_repo }
    }
}

#[async_trait]
impl ParticipationService for ParticipationServiceImpl {
    async fn get_available_programs(&self) -> VolunteerResult<Vec<VolunteerEvent>> {
        let programs = self.program_repo.list().await?;
        tracing::debug!(count = programs.len(), "Listed available programs");
        Ok(programs)
    }

    async fn get_recent_available_programs(
        &self,
        limit: usize,
    ) -> VolunteerResult<Vec<VolunteerEvent>> {
        self.program_repo.list_first(limit).await
    }

    async fn get_program(&self, program_id: ProgramId) -> VolunteerResult<VolunteerEvent> {
        self.program_repo.get(program_id).await
    }

    async fn get_registered_programs(&self) -> VolunteerResult<Vec<VolunteerEvent>> {
        let programs = self.program_repo.list().await?;
        Ok(programs.into_iter().filter(|p| p.is_registered()).collect())
    }

    async fn register_for_program(
        &self,
        program_id: ProgramId,
    ) -> VolunteerResult<VolunteerEvent> {
        match self.program_repo.mark_registered(program_id).await {
            Ok(program) => {
                tracing::info!(program_id = %program_id, "Program marked as registered");
                Ok(program)
            }
            Err(e) => {
                tracing::debug!(program_id = %program_id, error = %e, "Program registration refused");
                Err(e)
            }
        }
    }
}
