//! The contact form validator.

use super::rules::rules_for;
use crate::domain::{EmailAddress, PhoneNumber};
use crate::models::{ContactSubmission, FormField, ValidatedSubmission, ValidationOutcome};

/// Validate a single field value, returning the message of the first failing rule.
pub fn validate_field(field: FormField, value: &str) -> Option<&'static str> {
    rules_for(field)
        .iter()
        .find(|rule| !rule.check.passes(value))
        .map(|rule| rule.message)
}

/// Validate a contact form submission.
///
/// Every field is checked, even after an earlier field fails. The result
/// depends only on `submission`; calling this twice yields equal outcomes.
pub fn validate(submission: &ContactSubmission) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::new();

    for field in FormField::ALL {
        if let Some(message) = validate_field(field, submission.value(field)) {
            outcome.record_field_error(field, message);
        }
    }

    if !outcome.is_valid() {
        // Field names only, never the values a visitor typed
        let failing: Vec<&str> = outcome.failing_fields().map(|f| f.as_str()).collect();
        tracing::debug!(?failing, "Contact submission failed validation");
    }

    outcome
}

impl TryFrom<ContactSubmission> for ValidatedSubmission {
    type Error = ValidationOutcome;

    /// Validate `submission` and, if it passes, wrap its fields in value objects.
    fn try_from(submission: ContactSubmission) -> Result<Self, Self::Error> {
        let mut outcome = validate(&submission);
        if !outcome.is_valid() {
            return Err(outcome);
        }

        let ContactSubmission {
            name,
            email,
            phone,
            message,
        } = submission;

        // The email and phone rules share predicates with the value objects,
        // so these conversions only fail if the two drift apart.
        let email = match EmailAddress::new(email) {
            Ok(email) => email,
            Err(_) => {
                outcome.record_field_error(
                    FormField::Email,
                    rules_for(FormField::Email)[1].message,
                );
                return Err(outcome);
            }
        };
        let phone = match PhoneNumber::new(phone) {
            Ok(phone) => phone,
            Err(_) => {
                outcome.record_field_error(
                    FormField::Phone,
                    rules_for(FormField::Phone)[1].message,
                );
                return Err(outcome);
            }
        };

        Ok(ValidatedSubmission::from_parts(name, email, phone, message))
    }
}
