use async_trait::async_trait;
use savepaws_volunteer::error::{VolunteerError, VolunteerResult};
use savepaws_volunteer::models::VolunteerEvent;
use savepaws_volunteer::repositories::ProgramRepository;
use savepaws_volunteer::ProgramId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock program repository for testing.
///
/// Keeps programs in insertion order, tracks method calls for verification,
/// and can be told to fail every call with an internal error.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockProgramRepository {
    programs: Arc<Mutex<Vec<VolunteerEvent>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failure: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockProgramRepository {
    /// Create a new empty MockProgramRepository.
    pub fn new() -> Self {
        Self {
            programs: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a program to the end of the list.
    pub fn add_program(&self, program: VolunteerEvent) {
        self.programs.lock().unwrap().push(program);
    }

    /// Add multiple programs in order.
    pub fn add_programs(&self, programs: Vec<VolunteerEvent>) {
        self.programs.lock().unwrap().extend(programs);
    }

    /// Make every subsequent call fail with `VolunteerError::Internal`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Snapshot of stored programs, bypassing call tracking.
    pub fn snapshot(&self) -> Vec<VolunteerEvent> {
        self.programs.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> VolunteerResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(VolunteerError::Internal(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockProgramRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgramRepository for MockProgramRepository {
    async fn list(&self) -> VolunteerResult<Vec<VolunteerEvent>> {
        self.track_call("list")?;
        Ok(self.programs.lock().unwrap().clone())
    }

    async fn list_first(&self, limit: usize) -> VolunteerResult<Vec<VolunteerEvent>> {
        self.track_call("list_first")?;
        let programs = self.programs.lock().unwrap();
        Ok(programs.iter().take(limit).cloned().collect())
    }

    async fn get(&self, id: ProgramId) -> VolunteerResult<VolunteerEvent> {
        self.track_call("get")?;
        self.programs
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(VolunteerError::ProgramNotFound(id))
    }

    async fn mark_registered(&self, id: ProgramId) -> VolunteerResult<VolunteerEvent> {
        self.track_call("mark_registered")?;
        let mut programs = self.programs.lock().unwrap();
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
