//! EventPro contact service - Main entry point
//!
//! Runs the contact form MCP server over stdio.

use anyhow::Result;
use eventpro_contact::client::{AsyncSubmissionClient, AsyncSubmissionClientImpl};
use eventpro_contact::{
    Config, ContactFormMcpServer, ContactFormService, ContactFormServiceImpl, Metrics,
    SubmissionClient,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Reads .env, which may set LOG_LEVEL
    let loaded = Config::from_env();
    let level = loaded
        .as_ref()
        .map(|cfg| cfg.log_level.as_str())
        .unwrap_or("error");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    // stderr only, stdout carries MCP traffic
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();

    let client = SubmissionClient::from_config(&config, metrics.clone()).map(|sync_client| {
        info!("Submissions will be delivered to {}", sync_client.endpoint());
        Arc::new(AsyncSubmissionClientImpl::new(sync_client)) as Arc<dyn AsyncSubmissionClient>
    });
    if client.is_none() {
        warn!("CONTACT_SUBMIT_URL not set; submit_contact_form will report delivery failures");
    }

    let service = Arc::new(ContactFormServiceImpl::new(
        client,
        config.submit_error_message.clone(),
        metrics.clone(),
    )) as Arc<dyn ContactFormService>;

    let server = ContactFormMcpServer::new(service);

    info!("Starting MCP server with stdio transport");
    eventpro_contact::server::run_server(server).await?;

    match serde_json::to_string(&metrics.summary()) {
        Ok(summary) => info!("Contact service shutdown complete: {}", summary),
        Err(e) => warn!("Failed to serialize metrics summary: {}", e),
    }
    Ok(())
}
