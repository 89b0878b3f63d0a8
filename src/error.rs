//! Error types for the EventPro contact service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures are not errors: they are reported through
//! [`ValidationOutcome`](crate::models::ValidationOutcome).

use thiserror::Error;

/// Errors that can occur while delivering a validated submission.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Endpoint returned an error status code
    #[error("Submission endpoint error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to encode or decode JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// No submission endpoint has been configured
    #[error("Submission endpoint not configured")]
    NotConfigured,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A .env file exists but could not be parsed
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
