//! MCP server implementation for SavePaws volunteer coordination.
//!
//! This module provides the MCP protocol server that exposes program
//! listing, contribution history, and registration to MCP clients.

pub mod handlers;

pub use handlers::VolunteerMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the volunteer MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: VolunteerMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
