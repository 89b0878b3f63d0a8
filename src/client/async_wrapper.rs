//! Async wrapper around the synchronous SubmissionClient.
//!
//! This module provides an async interface to the synchronous SubmissionClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use super::{SubmissionClient, SubmissionReceipt};
use crate::error::{SubmissionError, SubmissionResult};
use crate::models::ValidatedSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// Async delivery of validated submissions.
///
/// Implemented by [`AsyncSubmissionClientImpl`] for real HTTP delivery and by
/// test doubles.
#[async_trait]
pub trait AsyncSubmissionClient: Send + Sync {
    async fn submit(
        &self,
        submission: &ValidatedSubmission,
    ) -> SubmissionResult<SubmissionReceipt>;
}

/// Async wrapper around synchronous SubmissionClient.
#[derive(Clone)]
pub struct AsyncSubmissionClientImpl {
    client: Arc<SubmissionClient>,
}

impl AsyncSubmissionClientImpl {
    pub fn new(client: SubmissionClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncSubmissionClient for AsyncSubmissionClientImpl {
    async fn submit(
        &self,
        submission: &ValidatedSubmission,
    ) -> SubmissionResult<SubmissionReceipt> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.submit(&submission))
            .await
            .map_err(|e| SubmissionError::HttpError(format!("Task join error: {}", e)))?
    }
}
