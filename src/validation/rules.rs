//! Rule table for the contact form.

use crate::domain::{has_min_length, is_not_empty, is_valid_email, is_valid_phone};
use crate::models::FormField;

/// Minimum characters in the name field.
pub const NAME_MIN_LENGTH: usize = 2;

/// Minimum characters in the message field.
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// A predicate applied to a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    NotEmpty,
    MinLength(usize),
    Email,
    Phone,
}

impl Check {
    pub fn passes(&self, value: &str) -> bool {
        match self {
            Check::NotEmpty => is_not_empty(value),
            Check::MinLength(min) => has_min_length(value, *min),
            Check::Email => is_valid_email(value),
            Check::Phone => is_valid_phone(value),
        }
    }
}

/// A check paired with the message shown when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    const fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

const NAME_RULES: &[FieldRule] = &[
    FieldRule::new(Check::NotEmpty, "Name is required"),
    FieldRule::new(
        Check::MinLength(NAME_MIN_LENGTH),
        "Name must be at least 2 characters",
    ),
];

const EMAIL_RULES: &[FieldRule] = &[
    FieldRule::new(Check::NotEmpty, "Email is required"),
    FieldRule::new(Check::Email, "Please enter a valid email address"),
];

const PHONE_RULES: &[FieldRule] = &[
    FieldRule::new(Check::NotEmpty, "Phone number is required"),
    FieldRule::new(Check::Phone, "Please enter a valid phone number"),
];

const MESSAGE_RULES: &[FieldRule] = &[
    FieldRule::new(Check::NotEmpty, "Message is required"),
    FieldRule::new(
        Check::MinLength(MESSAGE_MIN_LENGTH),
        "Message must be at least 10 characters",
    ),
];

/// Ordered rules for `field`. Earlier rules take precedence.
pub fn rules_for(field: FormField) -> &'static [FieldRule] {
    match field {
        FormField::Name => NAME_RULES,
        FormField::Email => EMAIL_RULES,
        FormField::Phone => PHONE_RULES,
        FormField::Message => MESSAGE_RULES,
    }
}
