//! Data models for contact form submissions.
//!
//! This module contains the structures exchanged with the presentation layer:
//! the raw submission, the validated submission handed to the transport, and
//! the validation outcome.

pub mod outcome;
pub mod submission;

pub use outcome::{ErrorKey, ValidationOutcome};
pub use submission::{ContactSubmission, FormField, ValidatedSubmission};
