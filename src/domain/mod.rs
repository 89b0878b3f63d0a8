//! Domain predicates and value objects.
//!
//! The predicates are the building blocks of the contact form rules. The
//! value objects wrap fields that have passed those predicates so that a
//! delivered submission cannot carry an unchecked email or phone number.

pub mod email;
pub mod errors;
pub mod phone;
pub mod predicates;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use predicates::{has_min_length, is_not_empty, is_valid_email, is_valid_phone};
