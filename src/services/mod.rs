//! Application service layer.
//!
//! Services contain the validation rules and orchestrate calls into the
//! numbering plan. They provide a clean boundary between the HTTP handlers
//! and the numbering-plan backend.

mod validation_service;

pub use validation_service::{PhoneNumberService, PhoneValidator};
