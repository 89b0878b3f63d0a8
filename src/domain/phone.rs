//! PhoneNumber value object.

use super::errors::ValidationError;
use super::predicates::{ascii_digits, is_valid_phone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number holding 10 to 15 decimal digits.
///
/// The original formatting is preserved; [`PhoneNumber::digits_only`] gives
/// the bare digits.
///
/// # Example
///
/// ```
/// use eventpro_contact::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (234) 567-8901").unwrap();
/// assert_eq!(phone.digits_only(), "12345678901");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the digit count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number holds fewer than
    /// 10 or more than 15 digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        ascii_digits(&self.0).collect()
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
