//! HTTP transport for delivering validated contact submissions.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and maps
//! endpoint failures onto [`SubmissionError`].

mod async_wrapper;
pub use async_wrapper::{AsyncSubmissionClient, AsyncSubmissionClientImpl};

use crate::config::Config;
use crate::error::{SubmissionError, SubmissionResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::ValidatedSubmission;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// JSON body posted to the submission endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionPayload<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
    submitted_at: String,
}

impl<'a> SubmissionPayload<'a> {
    fn new(submission: &'a ValidatedSubmission) -> Self {
        Self {
            name: submission.name(),
            email: submission.email().as_str(),
            phone: submission.phone().as_str(),
            message: submission.message(),
            submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Acknowledgement returned by the endpoint for a delivered submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// HTTP status of the accepting response
    pub status: u16,

    /// Identifier assigned by the endpoint, when it returns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SubmissionReceipt {
    /// Build a receipt from a 2xx response body.
    ///
    /// The body may be empty, non-JSON, or JSON without an `id`; none of these
    /// make the delivery a failure.
    fn from_body(status: u16, body: &str) -> Self {
        let id = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| match value.get("id") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                Some(serde_json::Value::Number(n)) => Some(n.to_string()),
                _ => None,
            });

        Self { status, id }
    }
}

/// HTTP client that posts validated submissions to a configured endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct SubmissionClient {
    /// Endpoint receiving submissions
    endpoint: String,

    /// Bearer token, if the endpoint requires one
    api_key: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl SubmissionClient {
    /// Create a client from configuration.
    ///
    /// Returns `None` when no submission endpoint is configured.
    pub fn from_config(config: &Config, metrics: Metrics) -> Option<Self> {
        let endpoint = config.submit_url.clone()?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Some(Self {
            endpoint,
            api_key: config.submit_api_key.clone(),
            agent: Arc::new(agent),
            metrics,
        })
    }

    /// Create a client for an explicit endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint: String, api_key: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            endpoint,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Deliver a validated submission.
    pub fn submit(&self, submission: &ValidatedSubmission) -> SubmissionResult<SubmissionReceipt> {
        let payload = SubmissionPayload::new(submission);
        let body = serde_json::to_value(&payload)?;

        tracing::debug!("POST {}", self.endpoint);

        let mut request = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json");
        if let Some(key) = &self.api_key {
            request = request.set("Authorization", &format!("Bearer {}", key));
        }

        let timer = HttpTimer::new(self.metrics.clone());
        let response = match request.send_json(body) {
            Ok(response) => {
                timer.complete();
                response
            }
            Err(e) => {
                timer.complete_with_error();
                let err = self.map_error(e);
                tracing::error!("POST {} - Error: {:?}", self.endpoint, err);
                return Err(err);
            }
        };

        let status = response.status();
        tracing::debug!("POST {} - Success (status: {})", self.endpoint, status);

        let body = response
            .into_string()
            .map_err(|e| SubmissionError::HttpError(e.to_string()))?;

        Ok(SubmissionReceipt::from_body(status, &body))
    }

    /// Map a ureq error to a SubmissionError.
    fn map_error(&self, error: ureq::Error) -> SubmissionError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    429 => SubmissionError::RateLimitExceeded,
                    _ => SubmissionError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SubmissionError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SubmissionError::Timeout
                } else {
                    SubmissionError::HttpError(transport.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_without_endpoint() {
        let config = Config::default();
        assert!(SubmissionClient::from_config(&config, Metrics::new()).is_none());
    }

    #[test]
    fn test_from_config_with_endpoint() {
        let config = Config {
            submit_url: Some("https://forms.example.com/contact".to_string()),
            ..Config::default()
        };
        let client = SubmissionClient::from_config(&config, Metrics::new()).unwrap();
        assert_eq!(client.endpoint(), "https://forms.example.com/contact");
    }

    #[test]
    fn test_receipt_from_json_body() {
        let receipt = SubmissionReceipt::from_body(201, r#"{"id": "sub_42"}"#);
        assert_eq!(receipt.status, 201);
        assert_eq!(receipt.id.as_deref(), Some("sub_42"));

        let receipt = SubmissionReceipt::from_body(200, r#"{"id": 7}"#);
        assert_eq!(receipt.id.as_deref(), Some("7"));
    }

    #[test]
    fn test_receipt_from_unusual_bodies() {
        assert_eq!(SubmissionReceipt::from_body(204, "").id, None);
        assert_eq!(SubmissionReceipt::from_body(200, "OK").id, None);
        assert_eq!(SubmissionReceipt::from_body(200, r#"{"ok": true}"#).id, None);
    }
}
