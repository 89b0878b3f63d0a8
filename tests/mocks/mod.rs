//! Test doubles shared by the integration tests.

pub mod mock_submission_client;

pub use mock_submission_client::MockSubmissionClient;
