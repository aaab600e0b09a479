use crate::domain::ProgramId;
use crate::error::{VolunteerError, VolunteerResult};
use crate::models::VolunteerEvent;
use crate::repositories::traits::ProgramRepository;
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// Program repository backed by a process-local list.
pub struct InMemoryProgramRepository {
    programs: RwLock<Vec<VolunteerEvent>>,
}

impl InMemoryProgramRepository {
    /// Create a repository holding `programs` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `VolunteerError::Internal` if two programs share an ID.
    pub fn new(programs: Vec<VolunteerEvent>) -> VolunteerResult<Self> {
        let mut seen = HashSet::with_capacity(programs.len());
        for program in &programs {
            if !seen.insert(program.id) {
                return Err(VolunteerError::Internal(format!(
                    "Duplicate program id: {}",
                    program.id
                )));
            }
        }

        Ok(Self {
            programs: RwLock::new(programs),
        })
    }

    pub fn empty() -> Self {
        Self {
            programs: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProgramRepository for InMemoryProgramRepository {
    async fn list(&self) -> VolunteerResult<Vec<VolunteerEvent>> {
        Ok(self.programs.read().await.clone())
    }

    async fn list_first(&self, limit: usize) -> VolunteerResult<Vec<VolunteerEvent>> {
        let programs = self.programs.read().await;
        Ok(programs.iter().take(limit).cloned().collect())
    }

    async fn get(&self, id: ProgramId) -> VolunteerResult<VolunteerEvent> {
        self.programs
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(VolunteerError::ProgramNotFound(id))
    }

    async fn mark_registered(&self, id: ProgramId) -> VolunteerResult<VolunteerEvent> {
        let mut programs = self.programs.write().await;
        let program = programs
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(VolunteerError::ProgramNotFound(id))?;

        if !program.mark_registered() {
            return Err(VolunteerError::AlreadyRegistered(id));
        }

        Ok(program.clone())
    }
}
