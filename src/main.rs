//! SavePaws Volunteer Server - Main entry point
//!
//! This is the main executable for the volunteer server, which provides a Model
//! Context Protocol (MCP) interface to volunteer programs and contributions.

use anyhow::Result;
use chrono::Utc;
use savepaws_volunteer::repositories::{
    seed, ContributionRepository, InMemoryContributionRepository, InMemoryProgramRepository,
    InMemoryRegistrationRepository, ProgramRepository, RegistrationRepository,
};
use savepaws_volunteer::services::{NotificationService, OutboxNotificationService};
use savepaws_volunteer::{Config, VolunteerMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize repositories
    let now = Utc::now();
    let (program_repo, contribution_repo) = if config.seed_demo_data {
        (
            InMemoryProgramRepository::new(seed::demo_programs(now))?,
            InMemoryContributionRepository::new(seed::demo_contributions(now)),
        )
    } else {
        (
            InMemoryProgramRepository::empty(),
            InMemoryContributionRepository::new(Vec::new()),
        )
    };

    let program_repo = Arc::new(program_repo) as Arc<dyn ProgramRepository>;
    let contribution_repo = Arc::new(contribution_repo) as Arc<dyn ContributionRepository>;
    let registration_repo =
        Arc::new(InMemoryRegistrationRepository::new()) as Arc<dyn RegistrationRepository>;
    let notifier = Arc::new(OutboxNotificationService::new()) as Arc<dyn NotificationService>;

    let server = VolunteerMcpServer::new(
        program_repo,
        contribution_repo,
        registration_repo,
        notifier,
        &config,
    );

    info!(
        "Volunteer server initialized (seed data: {}, featured events: {})",
        config.seed_demo_data, config.featured_event_limit
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    savepaws_volunteer::server::run_server(server).await?;

    info!("Volunteer server shutdown complete");
    Ok(())
}
