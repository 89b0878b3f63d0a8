//! EventPro contact form service.
//!
//! This library validates submissions from the contact form of the EventPro
//! event-management website and, for valid submissions, delivers them to a
//! configured endpoint. The validator itself is a pure function; everything
//! else is the caller side around it.
//!
//! # Architecture
//!
//! - **domain**: Field predicates and the email/phone value objects
//! - **models**: Submission and validation outcome types
//! - **validation**: The rule table and the validator
//! - **client**: HTTP transport for validated submissions
//! - **services**: Validate-then-deliver orchestration
//! - **server**: MCP protocol server exposing the contact form tools
//! - **config**, **error**, **metrics**: Ambient configuration, error types and counters
//!
//! # Example
//!
//! ```
//! use eventpro_contact::{validate, ContactSubmission, FormField};
//!
//! let outcome = validate(&ContactSubmission::new("J", "a@b.co", "1234567890", "Hello there!"));
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.error(FormField::Name), Some("Name must be at least 2 characters"));
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod validation;

pub use client::{AsyncSubmissionClient, SubmissionClient, SubmissionReceipt};
pub use config::Config;
pub use error::{ConfigError, SubmissionError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactSubmission, ErrorKey, FormField, ValidatedSubmission, ValidationOutcome};
pub use server::ContactFormMcpServer;
pub use services::{ContactFormService, ContactFormServiceImpl, SubmitResponse};
pub use validation::validate;
