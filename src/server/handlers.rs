//! MCP tool handlers for the contact form server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::models::ContactSubmission;
use crate::services::ContactFormService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// MCP server exposing the contact form tools.
#[derive(Clone)]
pub struct ContactFormMcpServer {
    contact_form_service: Arc<dyn ContactFormService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactFormMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "eventpro-contact".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact form service for the EventPro website - validates contact submissions and delivers valid ones to the configured endpoint.".into()),
        }
    }
}

/// Contact form fields. Any field may be omitted; omitted fields are treated as empty.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ContactFormParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ContactFormParams> for ContactSubmission {
    fn from(params: ContactFormParams) -> Self {
        ContactSubmission::from_optional(params.name, params.email, params.phone, params.message)
    }
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

#[tool_router]
impl ContactFormMcpServer {
    /// Create a new contact form MCP server.
    pub fn new(contact_form_service: Arc<dyn ContactFormService>) -> Self {
        Self {
            contact_form_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Validate a contact form submission without sending it.
    #[tool(
        description = "Validate a contact form submission (name, email, phone, message). Returns isValid and a fieldErrors map with one message per failing field."
    )]
    pub async fn validate_contact_form(
        &self,
        params: Parameters<ContactFormParams>,
    ) -> Result<CallToolResult, McpError> {
        let submission = ContactSubmission::from(params.0);

        let outcome = self.contact_form_service.validate(&submission);

        let json_response = serde_json::to_string_pretty(&outcome).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Validate a contact form submission and deliver it if valid.
    #[tool(
        description = "Validate a contact form submission and, if valid, send it to the EventPro team. Invalid submissions are never sent. A delivery failure is reported under fieldErrors.submit."
    )]
    pub async fn submit_contact_form(
        &self,
        params: Parameters<ContactFormParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_contact_form called");
        let submission = ContactSubmission::from(params.0);

        let response = self.contact_form_service.submit(submission).await;

        let json_response = serde_json::to_string_pretty(&response).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
