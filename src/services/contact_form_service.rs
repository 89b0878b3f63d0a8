//! Contact form service.
//!
//! Validates submissions and, for valid ones, hands them to the submission
//! transport.

use crate::client::{AsyncSubmissionClient, SubmissionReceipt};
use crate::error::{SubmissionError, SubmissionResult};
use crate::metrics::Metrics;
use crate::models::{ContactSubmission, ValidatedSubmission, ValidationOutcome};
use crate::validation::validate;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitResponse {
    /// Validation verdict, with `submit` set if delivery failed
    pub outcome: ValidationOutcome,

    /// Whether the transport accepted the submission
    pub delivered: bool,

    /// Endpoint acknowledgement for a delivered submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<SubmissionReceipt>,
}

/// Contact form operations exposed to front ends.
#[async_trait]
pub trait ContactFormService: Send + Sync {
    /// Validate a submission without delivering it.
    fn validate(&self, submission: &ContactSubmission) -> ValidationOutcome;

    /// Validate a submission and deliver it if valid.
    ///
    /// Never delivers an invalid submission. A delivery failure is reported
    /// under the outcome's `submit` key.
    async fn submit(&self, submission: ContactSubmission) -> SubmitResponse;
}

/// Default implementation of ContactFormService.
pub struct ContactFormServiceImpl {
    client: Option<Arc<dyn AsyncSubmissionClient>>,
    submit_error_message: String,
    metrics: Metrics,
}

impl ContactFormServiceImpl {
    /// Create a new contact form service.
    ///
    /// `client` is `None` when no submission endpoint is configured; submit
    /// attempts then fail with `submit_error_message`.
    pub fn new(
        client: Option<Arc<dyn AsyncSubmissionClient>>,
        submit_error_message: impl Into<String>,
        metrics: Metrics,
    ) -> Self {
        Self {
            client,
            submit_error_message: submit_error_message.into(),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    async fn deliver(
        &self,
        submission: &ValidatedSubmission,
    ) -> SubmissionResult<SubmissionReceipt> {
        let client = self.client.as_ref().ok_or(SubmissionError::NotConfigured)?;
        client.submit(submission).await
    }
}

#[async_trait]
impl ContactFormService for ContactFormServiceImpl {
    fn validate(&self, submission: &ContactSubmission) -> ValidationOutcome {
        let outcome = validate(submission);
        self.metrics.record_validation(outcome.is_valid());
        outcome
    }

    async fn submit(&self, submission: ContactSubmission) -> SubmitResponse {
        let validated = match ValidatedSubmission::try_from(submission) {
            Ok(validated) => validated,
            Err(outcome) => {
                self.metrics.record_validation(false);
                tracing::info!(
                    "Contact submission rejected with {} field error(s)",
                    outcome.error_count()
                );
                return SubmitResponse {
                    outcome,
                    delivered: false,
                    receipt: None,
                };
            }
        };
        self.metrics.record_validation(true);

        let mut outcome = ValidationOutcome::new();
        match self.deliver(&validated).await {
            Ok(receipt) => {
                self.metrics.record_delivered();
                tracing::info!("Contact submission delivered (status: {})", receipt.status);
                SubmitResponse {
                    outcome,
                    delivered: true,
                    receipt: Some(receipt),
                }
            }
            Err(e) => {
                self.metrics.record_delivery_failed();
                tracing::error!("Failed to deliver contact submission: {}", e);
                outcome.record_submit_error(self.submit_error_message.clone());
                SubmitResponse {
                    outcome,
                    delivered: false,
                    receipt: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SUBMIT_ERROR_MESSAGE;
    use crate::models::ErrorKey;

    #[test]
    fn test_validate_records_metrics() {
        let service =
            ContactFormServiceImpl::new(None, DEFAULT_SUBMIT_ERROR_MESSAGE, Metrics::new());

        let outcome = service.validate(&ContactSubmission::default());
        assert!(!outcome.is_valid());

        let outcome = service.validate(&ContactSubmission::new(
            "Jo",
            "a@b.co",
            "1234567890",
            "Hello there!",
        ));
        assert!(outcome.is_valid());

        assert_eq!(service.metrics().submissions_validated_total(), 2);
        assert_eq!(service.metrics().submissions_rejected_total(), 1);
    }

    #[tokio::test]
    async fn test_submit_without_transport_reports_submit_error() {
        let service = ContactFormServiceImpl::new(None, "Could not send.", Metrics::new());

        let response = service
            .submit(ContactSubmission::new(
                "Jo",
                "a@b.co",
                "1234567890",
                "Hello there!",
            ))
            .await;

        assert!(!response.delivered);
        assert!(!response.outcome.is_valid());
        assert_eq!(response.outcome.error(ErrorKey::Submit), Some("Could not send."));
        assert_eq!(response.outcome.failing_fields().count(), 0);
        assert_eq!(service.metrics().submissions_failed_total(), 1);
    }
}
