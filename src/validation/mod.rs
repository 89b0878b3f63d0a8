//! Contact form validation.
//!
//! The validator is a pure, synchronous pass over a [`ContactSubmission`]:
//! each field runs its own ordered rule list, the first failing rule supplies
//! that field's message, and the outcome is valid when no field failed.
//!
//! [`ContactSubmission`]: crate::models::ContactSubmission

pub mod rules;
pub mod validator;

pub use rules::{rules_for, Check, FieldRule, MESSAGE_MIN_LENGTH, NAME_MIN_LENGTH};
pub use validator::{validate, validate_field};
