//! EmailAddress value object.

use super::errors::ValidationError;
use super::predicates::is_valid_email;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An email address that passed the contact form's shape check.
///
/// # Example
///
/// ```
/// use eventpro_contact::domain::EmailAddress;
///
/// let email = EmailAddress::new("guest@example.com").unwrap();
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the value does not match
    /// `local@domain.tld` with no whitespace and a single '@'.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        // Constructed values always contain exactly one '@'
        self.0
            .split_once('@')
            .expect("email validated to contain '@'")
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("planner@eventpro.example").unwrap();
        assert_eq!(email.as_str(), "planner@eventpro.example");
    }

    #[test]
    fn test_email_rejects_what_the_form_rejects() {
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("first last@example.com").is_err());
    }

    #[test]
    fn test_email_error_carries_input() {
        let err = EmailAddress::new("nope").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("nope".to_string()));
    }

    #[test]
    fn test_email_parts() {
        let email = EmailAddress::new("user@mail.example.com").unwrap();
        assert_eq!(email.local_part(), "user");
        assert_eq!(email.domain(), "mail.example.com");
    }

    #[test]
    fn test_email_serde() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"user@example.com\"");

        let back: EmailAddress = serde_json::from_str("\"user@example.com\"").unwrap();
        assert_eq!(back, email);

        let bad: Result<EmailAddress, _> = serde_json::from_str("\"invalid\"");
        assert!(bad.is_err());
    }
}
