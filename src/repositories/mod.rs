mod in_memory_contribution_repository;
mod in_memory_program_repository;
mod in_memory_registration_repository;
pub mod seed;
mod traits;

pub use in_memory_contribution_repository::InMemoryContributionRepository;
pub use in_memory_program_repository::InMemoryProgramRepository;
pub use in_memory_registration_repository::InMemoryRegistrationRepository;
pub use traits::{ContributionRepository, ProgramRepository, RegistrationRepository};
