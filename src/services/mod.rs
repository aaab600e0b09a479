//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! repositories. They provide a clean boundary between the MCP handlers
//! and the data access layer.

mod contribution_service;
mod event_service;
mod notification_service;
mod participation_service;
mod registration_service;
pub mod validation;

pub use contribution_service::{ContributionService, ContributionServiceImpl};
pub use event_service::{EventService, EventServiceImpl};
pub use notification_service::{NotificationService, OutboxNotificationService};
pub use participation_service::{ParticipationService, ParticipationServiceImpl};
pub use registration_service::{RegistrationService, RegistrationServiceImpl};
pub use validation::{is_valid_application, validate_application};
