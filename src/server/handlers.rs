//! MCP tool handlers for the volunteer server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Expected refusals (unknown program, already registered, incomplete form) are
//! reported as a `false` outcome with a reason; anything else becomes an MCP error.

use crate::config::Config;
use crate::domain::{ProgramId, UserId};
use crate::error::{VolunteerError, VolunteerResult};
use crate::models::{VolunteerEvent, VolunteerRegistration};
use crate::repositories::{ContributionRepository, ProgramRepository, RegistrationRepository};
use crate::services::{
    ContributionService, ContributionServiceImpl, EventService, EventServiceImpl,
    NotificationService, ParticipationService, ParticipationServiceImpl, RegistrationService,
    RegistrationServiceImpl,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes volunteer program tools.
#[derive(Clone)]
pub struct VolunteerMcpServer {
    event_service: Arc<dyn EventService>,
    contribution_service: Arc<dyn ContributionService>,
    registration_service: Arc<dyn RegistrationService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for VolunteerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "savepaws-volunteer".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for SavePaws volunteers - browse programs, join them, submit and review volunteer applications, and check contribution history.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ProgramIdParams {
    program_id: i32,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UserIdParams {
    user_id: i32,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct JoinProgramParams {
    user_id: i32,
    program_id: i32,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SubmitRegistrationParams {
    user_id: i32,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    experience: Option<String>,
    #[serde(default)]
    capability: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RejectRegistrationParams {
    user_id: i32,
    #[serde(default)]
    reason: Option<String>,
}

impl From<SubmitRegistrationParams> for VolunteerRegistration {
    fn from(params: SubmitRegistrationParams) -> Self {
        VolunteerRegistration {
            user_id: UserId::new(params.user_id),
            user_name: params.user_name,
            address: params.address,
            experience: params.experience,
            capability: params.capability,
            ..Default::default()
        }
    }
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

/// Shape a join attempt into the tool response.
fn join_response(
    program_id: ProgramId,
    result: VolunteerResult<VolunteerEvent>,
) -> VolunteerResult<Value> {
    match result {
        Ok(program) => Ok(json!({
            "joined": true,
            "program": program,
        })),
        Err(e @ (VolunteerError::ProgramNotFound(_) | VolunteerError::AlreadyRegistered(_))) => {
            Ok(json!({
                "joined": false,
                "program_id": program_id,
                "reason": e.reason(),
                "message": e.to_string(),
            }))
        }
        Err(e) => Err(e),
    }
}

/// Shape a registration attempt into the tool response.
fn submit_response(
    user_id: UserId,
    result: VolunteerResult<VolunteerRegistration>,
) -> VolunteerResult<Value> {
    match result {
        Ok(record) => Ok(json!({
            "submitted": true,
            "user_id": user_id,
            "status": record.status,
        })),
        Err(e @ VolunteerError::Validation(_)) => Ok(json!({
            "submitted": false,
            "user_id": user_id,
            "reason": e.reason(),
            "message": e.to_string(),
        })),
        Err(e) => Err(e),
    }
}

/// Shape an administrator review into the tool response.
fn review_response(
    user_id: UserId,
    result: VolunteerResult<VolunteerRegistration>,
) -> VolunteerResult<Value> {
    match result {
        Ok(record) => Ok(json!({
            "reviewed": true,
            "registration": record,
        })),
        Err(e @ VolunteerError::RegistrationNotFound(_)) => Ok(json!({
            "reviewed": false,
            "user_id": user_id,
            "reason": e.reason(),
            "message": e.to_string(),
        })),
        Err(e) => Err(e),
    }
}

// Tool router implementation
#[tool_router]
impl VolunteerMcpServer {
    /// Create a new volunteer MCP server.
    pub fn new(
        program_repo: Arc<dyn ProgramRepository>,
        contribution_repo: Arc<dyn ContributionRepository>,
        registration_repo: Arc<dyn RegistrationRepository>,
        notifier: Arc<dyn NotificationService>,
        config: &Config,
    ) -> Self {
        let participation = Arc::new(ParticipationServiceImpl::new(program_repo))
            as Arc<dyn ParticipationService>;

        let event_service = Arc::new(EventServiceImpl::with_confirmation_message(
            participation.clone(),
            notifier,
            config.confirmation_message.clone(),
        )) as Arc<dyn EventService>;

        let contribution_service = Arc::new(ContributionServiceImpl::with_featured_limit(
            contribution_repo,
            participation,
            config.featured_event_limit,
        )) as Arc<dyn ContributionService>;

        let registration_service = Arc::new(RegistrationServiceImpl::new(registration_repo))
            as Arc<dyn RegistrationService>;

        Self {
            event_service,
            contribution_service,
            registration_service,
            tool_router: Self::tool_router(),
        }
    }

    /// List every volunteer program.
    #[tool(
        description = "List all volunteer programs in listing order, including ones already registered (see is_registered)"
    )]
    async fn list_programs(&self) -> Result<CallToolResult, McpError> {
        let programs = self
            .event_service
            .get_available_programs()
            .await
            .map_err(|e| {
                tracing::error!("Error retrieving program list: {}", e);
                to_mcp_error(e)
            })?;

        json_result(&json!(programs))
    }

    /// Get one volunteer program by ID.
    #[tool(description = "Get full details for a single volunteer program by ID")]
    async fn get_program(
        &self,
        params: Parameters<ProgramIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let program_id = ProgramId::new(params.0.program_id);

        let program = self
            .event_service
            .get_program(program_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&json!(program))
    }

    /// Get a user's contribution records.
    #[tool(description = "Get a volunteer's contribution records (empty when the user has none)")]
    async fn get_contributions(
        &self,
        params: Parameters<UserIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let user_id = UserId::new(params.0.user_id);

        let contributions = self
            .contribution_service
            .get_contributions_by_user_id(user_id)
            .await
            .map_err(|e| {
                tracing::error!("Error retrieving contributions: {}", e);
                to_mcp_error(e)
            })?;

        json_result(&json!(contributions))
    }

    /// Get the contribution page summary for a user.
    #[tool(
        description = "Get a volunteer's contributions together with a short list of featured programs and total hours"
    )]
    async fn get_contribution_summary(
        &self,
        params: Parameters<UserIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let user_id = UserId::new(params.0.user_id);

        let summary = self
            .contribution_service
            .get_contribution_page_summary(user_id)
            .await
            .map_err(|e| {
                tracing::error!("Error retrieving contribution summary: {}", e);
                to_mcp_error(e)
            })?;

        json_result(&json!(summary))
    }

    /// Join a volunteer program.
    #[tool(
        description = "Register a volunteer for a program and send a confirmation. Returns joined=false with a reason if the program is unknown or already registered."
    )]
    async fn join_program(
        &self,
        params: Parameters<JoinProgramParams>,
    ) -> Result<CallToolResult, McpError> {
        let user_id = UserId::new(params.0.user_id);
        let program_id = ProgramId::new(params.0.program_id);

        tracing::info!("MCP Handler: join_program called");
        tracing::debug!("Parameters: user_id={}, program_id={}", user_id, program_id);

        let result = self.event_service.join_program(user_id, program_id).await;
        let response = join_response(program_id, result).map_err(|e| {
            tracing::error!("Failed to join program: {:?}", e);
            to_mcp_error(e)
        })?;

        json_result(&response)
    }

    /// Submit a volunteer application.
    #[tool(
        description = "Submit an application to become a volunteer. user_name, address, experience, and capability must all be non-blank."
    )]
    async fn submit_registration(
        &self,
        params: Parameters<SubmitRegistrationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let user_id = UserId::new(params.user_id);

        tracing::info!("MCP Handler: submit_registration called");

        let result = self
            .registration_service
            .submit_registration(params.into())
            .await;
        let response = submit_response(user_id, result).map_err(|e| {
            tracing::error!("Failed to submit registration: {:?}", e);
            to_mcp_error(e)
        })?;

        json_result(&response)
    }

    /// Check whether a user is a registered volunteer.
    #[tool(description = "Check whether a user has submitted a volunteer application")]
    async fn get_registration_status(
        &self,
        params: Parameters<UserIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let user_id = UserId::new(params.0.user_id);

        let registered = self
            .registration_service
            .get_registration_status(user_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&json!({
            "user_id": user_id,
            "registered": registered,
        }))
    }

    /// Show a user's submitted application.
    #[tool(
        description = "Get the volunteer application a user submitted, including its review status (registration is null if none)"
    )]
    async fn get_registration_details(
        &self,
        params: Parameters<UserIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let user_id = UserId::new(params.0.user_id);

        let registration = self
            .registration_service
            .get_registration_details(user_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&json!({
            "user_id": user_id,
            "registration": registration,
        }))
    }

    /// Approve a pending volunteer application.
    #[tool(description = "Approve a user's volunteer application (administrator action)")]
    async fn approve_registration(
        &self,
        params: Parameters<UserIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let user_id = UserId::new(params.0.user_id);

        tracing::info!("MCP Handler: approve_registration called");

        let result = self.registration_service.approve_registration(user_id).await;
        let response = review_response(user_id, result).map_err(|e| {
            tracing::error!("Failed to approve registration: {:?}", e);
            to_mcp_error(e)
        })?;

        json_result(&response)
    }

    /// Reject a volunteer application.
    #[tool(
        description = "Reject a user's volunteer application with an optional reason (administrator action)"
    )]
    async fn reject_registration(
        &self,
        params: Parameters<RejectRegistrationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let user_id = UserId::new(params.user_id);

        tracing::info!("MCP Handler: reject_registration called");

        let result = self
            .registration_service
            .reject_registration(user_id, params.reason)
            .await;
        let response = review_response(user_id, result).map_err(|e| {
            tracing::error!("Failed to reject registration: {:?}", e);
            to_mcp_error(e)
        })?;

        json_result(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::models::RegistrationStatus;
    use crate::repositories::{
        seed, InMemoryContributionRepository, InMemoryProgramRepository,
        InMemoryRegistrationRepository,
    };
    use crate::services::OutboxNotificationService;
    use chrono::Utc;

    fn seeded_server() -> VolunteerMcpServer {
        let now = Utc::now();
        let program_repo = Arc::new(
            InMemoryProgramRepository::new(seed::demo_programs(now)).unwrap(),
        ) as Arc<dyn ProgramRepository>;
        let contribution_repo = Arc::new(InMemoryContributionRepository::new(
            seed::demo_contributions(now),
        )) as Arc<dyn ContributionRepository>;
        let registration_repo =
            Arc::new(InMemoryRegistrationRepository::new()) as Arc<dyn RegistrationRepository>;
        let notifier = Arc::new(OutboxNotificationService::new()) as Arc<dyn NotificationService>;

        VolunteerMcpServer::new(
            program_repo,
            contribution_repo,
            registration_repo,
            notifier,
            &Config::default(),
        )
    }

    // Parse the JSON text a tool returned
    fn tool_json(result: Result<CallToolResult, McpError>) -> Value {
        let result = result.unwrap();
        let text = &result.content[0].as_text().unwrap().text;
        serde_json::from_str(text).unwrap()
    }

    fn submit_params(user_id: i32) -> Parameters<SubmitRegistrationParams> {
        Parameters(SubmitRegistrationParams {
            user_id,
            user_name: Some("Ana Lim".to_string()),
            address: Some("12 Jalan Skudai".to_string()),
            experience: Some("Shelter volunteer".to_string()),
            capability: Some("Dog walking".to_string()),
        })
    }

    #[test]
    fn test_server_creation() {
        let server = seeded_server();
        assert_eq!(server.get_info().server_info.name, "savepaws-volunteer");
    }

    #[tokio::test]
    async fn test_list_programs_includes_registered() {
        let server = seeded_server();

        let programs = tool_json(server.list_programs().await);
        let programs = programs.as_array().unwrap();
        assert_eq!(programs.len(), 2);
        assert_eq!(programs[0]["id"], 101);
        assert_eq!(programs[0]["is_registered"], false);
        assert_eq!(programs[1]["id"], 102);
        assert_eq!(programs[1]["is_registered"], true);
    }

    #[tokio::test]
    async fn test_get_program_unknown_is_error() {
        let server = seeded_server();

        let program = tool_json(
            server
                .get_program(Parameters(ProgramIdParams { program_id: 101 }))
                .await,
        );
        assert_eq!(program["title"], "Beach Cleanup");

        let missing = server
            .get_program(Parameters(ProgramIdParams { program_id: -5 }))
            .await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_get_contributions_negative_user_is_empty() {
        let params: UserIdParams = serde_json::from_str(r#"{"user_id": -1}"#).unwrap();
        assert_eq!(params.user_id, -1);

        let server = seeded_server();
        let contributions = tool_json(server.get_contributions(Parameters(params)).await);
        assert_eq!(contributions, json!([]));
    }

    #[tokio::test]
    async fn test_contribution_summary_shape() {
        let server = seeded_server();

        let summary = tool_json(
            server
                .get_contribution_summary(Parameters(UserIdParams { user_id: 1 }))
                .await,
        );
        assert_eq!(summary["contributions"].as_array().unwrap().len(), 2);
        assert_eq!(summary["featured_events"].as_array().unwrap().len(), 2);
        assert_eq!(summary["total_hours"], 12);
    }

    #[tokio::test]
    async fn test_join_program_then_refusal() {
        let server = seeded_server();

        let joined = tool_json(
            server
                .join_program(Parameters(JoinProgramParams {
                    user_id: 1,
                    program_id: 101,
                }))
                .await,
        );
        assert_eq!(joined["joined"], true);
        assert_eq!(joined["program"]["is_registered"], true);

        let refused = tool_json(
            server
                .join_program(Parameters(JoinProgramParams {
                    user_id: 1,
                    program_id: 102,
                }))
                .await,
        );
        assert_eq!(refused["joined"], false);
        assert_eq!(refused["reason"], "already_registered");

        let unknown = tool_json(
            server
                .join_program(Parameters(JoinProgramParams {
                    user_id: -1,
                    program_id: -1,
                }))
                .await,
        );
        assert_eq!(unknown["joined"], false);
        assert_eq!(unknown["reason"], "not_found");
    }

    #[tokio::test]
    async fn test_registration_tools_round_trip() {
        let server = seeded_server();
        let user = || Parameters(UserIdParams { user_id: 7 });

        let status = tool_json(server.get_registration_status(user()).await);
        assert_eq!(status, json!({ "user_id": 7, "registered": false }));

        let details = tool_json(server.get_registration_details(user()).await);
        assert!(details["registration"].is_null());

        let submitted = tool_json(server.submit_registration(submit_params(7)).await);
        assert_eq!(submitted["submitted"], true);
        assert_eq!(submitted["status"], "pending");

        let status = tool_json(server.get_registration_status(user()).await);
        assert_eq!(status, json!({ "user_id": 7, "registered": true }));

        let approved = tool_json(server.approve_registration(user()).await);
        assert_eq!(approved["reviewed"], true);
        assert_eq!(approved["registration"]["status"], "approved");

        let details = tool_json(server.get_registration_details(user()).await);
        assert_eq!(details["registration"]["user_name"], "Ana Lim");
        assert_eq!(details["registration"]["status"], "approved");
    }

    #[tokio::test]
    async fn test_incomplete_submission_names_the_field() {
        let server = seeded_server();

        let mut params = submit_params(3);
        params.0.experience = Some(" ".to_string());

        let response = tool_json(server.submit_registration(params).await);
        assert_eq!(response["submitted"], false);
        assert_eq!(response["reason"], "validation_failed");
        assert!(response["message"].as_str().unwrap().contains("experience"));
    }

    #[tokio::test]
    async fn test_reject_registration_tool() {
        let server = seeded_server();

        let missing = tool_json(
            server
                .reject_registration(Parameters(RejectRegistrationParams {
                    user_id: 4,
                    reason: None,
                }))
                .await,
        );
        assert_eq!(missing["reviewed"], false);
        assert_eq!(missing["reason"], "not_found");

        tool_json(server.submit_registration(submit_params(4)).await);
        let rejected = tool_json(
            server
                .reject_registration(Parameters(RejectRegistrationParams {
                    user_id: 4,
                    reason: Some("Outside service area".to_string()),
                }))
                .await,
        );
        assert_eq!(rejected["reviewed"], true);
        assert_eq!(rejected["registration"]["status"], "rejected");
        assert_eq!(
            rejected["registration"]["rejection_reason"],
            "Outside service area"
        );
    }

    #[test]
    fn test_join_response_refusals_are_not_errors() {
        let id = ProgramId::new(102);

        let value = join_response(id, Err(VolunteerError::AlreadyRegistered(id))).unwrap();
        assert_eq!(value["joined"], false);
        assert_eq!(value["reason"], "already_registered");
        assert_eq!(value["program_id"], 102);

        let value = join_response(id, Err(VolunteerError::ProgramNotFound(id))).unwrap();
        assert_eq!(value["reason"], "not_found");
    }

    #[test]
    fn test_join_response_internal_error_propagates() {
        let id = ProgramId::new(101);
        let result = join_response(id, Err(VolunteerError::Internal("boom".to_string())));
        assert!(matches!(result, Err(VolunteerError::Internal(_))));
    }

    #[test]
    fn test_submit_response() {
        let user = UserId::new(4);
        let record = VolunteerRegistration::new(user, "Ana", "Skudai", "None", "Driving");

        let value = submit_response(user, Ok(record)).unwrap();
        assert_eq!(value["submitted"], true);
        assert_eq!(value["status"], "pending");

        let value = submit_response(
            user,
            Err(ValidationError::MissingField("address").into()),
        )
        .unwrap();
        assert_eq!(value["submitted"], false);
        assert_eq!(value["reason"], "validation_failed");
    }

    #[test]
    fn test_submit_params_into_registration() {
        let params: SubmitRegistrationParams =
            serde_json::from_str(r#"{"user_id": 9, "user_name": "Ana"}"#).unwrap();
        let registration = VolunteerRegistration::from(params);
        assert_eq!(registration.user_id, UserId::new(9));
        assert_eq!(registration.user_name.as_deref(), Some("Ana"));
        assert!(registration.capability.is_none());
        assert_eq!(registration.status, RegistrationStatus::Pending);
    }
}
