//! Validation outcome returned to the presentation layer.

use super::submission::FormField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key of an entry in [`ValidationOutcome::field_errors`].
///
/// The four form fields are set by the validator. `Submit` is reserved for
/// the caller to report a delivery failure after validation passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKey {
    Name,
    Email,
    Phone,
    Message,
    Submit,
}

impl ErrorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKey::Name => "name",
            ErrorKey::Email => "email",
            ErrorKey::Phone => "phone",
            ErrorKey::Message => "message",
            ErrorKey::Submit => "submit",
        }
    }
}

impl From<FormField> for ErrorKey {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Name => ErrorKey::Name,
            FormField::Email => ErrorKey::Email,
            FormField::Phone => ErrorKey::Phone,
            FormField::Message => ErrorKey::Message,
        }
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one submission attempt.
///
/// `is_valid` is true exactly when `field_errors` is empty. Entries can only be
/// added through methods that keep the two in step.
///
/// Serializes as `{"isValid": bool, "fieldErrors": {"name": "...", ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    is_valid: bool,
    field_errors: BTreeMap<ErrorKey, String>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationOutcome {
    /// An outcome with no errors.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            field_errors: BTreeMap::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// All error entries, ordered name, email, phone, message, submit.
    pub fn field_errors(&self) -> &BTreeMap<ErrorKey, String> {
        &self.field_errors
    }

    /// The message recorded for `key`, if any.
    pub fn error(&self, key: impl Into<ErrorKey>) -> Option<&str> {
        self.field_errors.get(&key.into()).map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len()
    }

    /// Form fields that failed validation (never includes `submit`).
    pub fn failing_fields(&self) -> impl Iterator<Item = FormField> + '_ {
        FormField::ALL
            .into_iter()
            .filter(|field| self.field_errors.contains_key(&ErrorKey::from(*field)))
    }

    /// Record a delivery failure under the reserved `submit` key.
    ///
    /// The validator never calls this; the caller does, after its transport
    /// failed. The outcome becomes invalid.
    pub fn record_submit_error(&mut self, message: impl Into<String>) {
        self.insert(ErrorKey::Submit, message.into());
    }

    pub(crate) fn record_field_error(&mut self, field: FormField, message: impl Into<String>) {
        self.insert(field.into(), message.into());
    }

    fn insert(&mut self, key: ErrorKey, message: String) {
        self.field_errors.insert(key, message);
        self.is_valid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_outcome_is_valid() {
        let outcome = ValidationOutcome::new();
        assert!(outcome.is_valid());
        assert_eq!(outcome.error_count(), 0);
        assert_eq!(outcome, ValidationOutcome::default());
    }

    #[test]
    fn test_field_error_invalidates() {
        let mut outcome = ValidationOutcome::new();
        outcome.record_field_error(FormField::Email, "Email is required");

        assert!(!outcome.is_valid());
        assert_eq!(outcome.error(FormField::Email), Some("Email is required"));
        assert_eq!(outcome.error(FormField::Name), None);
        assert_eq!(outcome.failing_fields().collect::<Vec<_>>(), vec![FormField::Email]);
    }

    #[test]
    fn test_submit_error_invalidates_without_field_failures() {
        let mut outcome = ValidationOutcome::new();
        outcome.record_submit_error("Failed to send message. Please try again later.");

        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.error(ErrorKey::Submit),
            Some("Failed to send message. Please try again later.")
        );
        assert_eq!(outcome.failing_fields().count(), 0);
    }

    #[test]
    fn test_serialized_shape() {
        let mut outcome = ValidationOutcome::new();
        outcome.record_field_error(FormField::Message, "Message is required");
        outcome.record_field_error(FormField::Name, "Name is required");

        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"isValid":false,"fieldErrors":{"name":"Name is required","message":"Message is required"}}"#
        );
    }

    #[test]
    fn test_serialized_valid_shape() {
        let json = serde_json::to_value(ValidationOutcome::new()).unwrap();
        assert_eq!(json, serde_json::json!({"isValid": true, "fieldErrors": {}}));
    }
}
