use async_trait::async_trait;
use eventpro_contact::client::{AsyncSubmissionClient, SubmissionReceipt};
use eventpro_contact::error::{SubmissionError, SubmissionResult};
use eventpro_contact::models::ValidatedSubmission;
use std::sync::{Arc, Mutex};

/// Outcome the mock returns for every call.
#[allow(dead_code)]
#[derive(Clone)]
enum Behavior {
    Accept { status: u16, id: Option<String> },
    Fail { status: u16, message: String },
    RateLimited,
}

/// Mock submission transport that records what it was asked to deliver.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubmissionClient {
    behavior: Arc<Mutex<Behavior>>,
    delivered: Arc<Mutex<Vec<ValidatedSubmission>>>,
}

#[allow(dead_code)]
impl MockSubmissionClient {
    /// A transport that accepts everything with status 201.
    pub fn accepting() -> Self {
        Self::with_behavior(Behavior::Accept {
            status: 201,
            id: Some("sub_1".to_string()),
        })
    }

    /// A transport that answers every call with an HTTP error.
    pub fn failing(status: u16, message: &str) -> Self {
        Self::with_behavior(Behavior::Fail {
            status,
            message: message.to_string(),
        })
    }

    pub fn rate_limited() -> Self {
        Self::with_behavior(Behavior::RateLimited)
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }

    pub fn received(&self) -> Vec<ValidatedSubmission> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl AsyncSubmissionClient for MockSubmissionClient {
    async fn submit(
        &self,
        submission: &ValidatedSubmission,
    ) -> SubmissionResult<SubmissionReceipt> {
        self.delivered.lock().unwrap().push(submission.clone());

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            Behavior::Accept { status, id } => Ok(SubmissionReceipt { status, id }),
            Behavior::Fail { status, message } => {
                Err(SubmissionError::ApiError { status, message })
            }
            Behavior::RateLimited => Err(SubmissionError::RateLimitExceeded),
        }
    }
}
