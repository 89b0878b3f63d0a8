//! Application service layer.
//!
//! Services contain the caller-side logic around the validator: they decide
//! whether a submission may be delivered and fold delivery failures back into
//! the outcome shown to the visitor.

mod contact_form_service;

pub use contact_form_service::{ContactFormService, ContactFormServiceImpl, SubmitResponse};
