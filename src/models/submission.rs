//! Contact form submission models.

use crate::domain::{EmailAddress, PhoneNumber};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One of the four fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    /// All fields, in the order they are validated and displayed.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    /// The field's key as used by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat a missing, `null`, or non-string value as the empty string.
///
/// The form widget may hand over partially filled or loosely typed data; an
/// absent value is reported by the "is required" rule instead of failing to parse.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        _ => String::new(),
    })
}

/// A single attempt to submit the contact form.
///
/// Constructed fresh per attempt and owned by the caller. Validation borrows it
/// and never keeps a reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub phone: String,

    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// Build a submission from possibly absent values, normalizing `None` to "".
    pub fn from_optional(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            message: message.unwrap_or_default(),
        }
    }

    /// The raw value entered for `field`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }
}

/// A submission that passed every contact form rule.
///
/// Only produced by converting a [`ContactSubmission`] with `TryFrom`, so the
/// transport never sees unchecked input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedSubmission {
    name: String,
    email: EmailAddress,
    phone: PhoneNumber,
    message: String,
}

impl ValidatedSubmission {
    pub(crate) fn from_parts(
        name: String,
        email: EmailAddress,
        phone: PhoneNumber,
        message: String,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
