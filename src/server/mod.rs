//! MCP server for the contact form.
//!
//! This module exposes contact form validation and submission to AI
//! assistants and tooling through the Model Context Protocol.

pub mod handlers;

pub use handlers::{ContactFormMcpServer, ContactFormParams};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact form MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: ContactFormMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
