//! Phone Validator API - validates phone numbers and normalizes them to E.164.
//!
//! The service accepts a raw phone number plus an optional ISO 3166-1 alpha-2
//! region hint and answers with the E.164 form, the owning region, and a
//! fixed three-digit area-code/local-number split.
//!
//! # Architecture
//!
//! - **domain**: Value objects for raw input, region codes and result components
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **numbering**: Numbering-plan backend (libphonenumber metadata)
//! - **services**: Validation rules layered over the numbering plan
//! - **server**: axum routes, handlers and middleware

pub mod config;
pub mod domain;
pub mod error;
pub mod numbering;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{PhoneComponents, RawPhoneNumber, RegionCode};
pub use error::{ApiError, ConfigError, PlanError, ValidationError};
pub use numbering::{LibPhoneNumberPlan, NumberingPlan};
pub use server::build_router;
pub use services::{PhoneNumberService, PhoneValidator};
