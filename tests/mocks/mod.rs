//! Hand-written test doubles for repositories and notifiers.

pub mod mock_notification_service;
pub mod mock_program_repository;

#[allow(unused_imports)]
pub use mock_notification_service::MockNotificationService;
#[allow(unused_imports)]
pub use mock_program_repository::MockProgramRepository;
