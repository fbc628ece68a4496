//! Error types for the Phone Validator API.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` strings of [`ValidationError`] are part of the public HTTP contract
//! and must not change.

use thiserror::Error;

/// Errors produced while validating a phone number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Spacing/character pre-check failed
    #[error("invalid space or character usage in phone number")]
    InvalidFormat,

    /// Region hint is not two uppercase ASCII letters
    #[error("invalid country code format, must be ISO 3166-1 alpha-2")]
    InvalidRegionFormat,

    /// Parsing failed even after retrying with the region hint
    #[error("error parsing phone number with country code")]
    ParseErrorWithRegion,

    /// Parsing failed and there was no region hint to fall back on
    #[error("error parsing phone number and no country code provided")]
    ParseErrorNoRegion,

    /// Parsed, but the numbering plan rejects the digit sequence
    #[error("invalid phone number, required value is missing")]
    InvalidNumber,
}

/// Errors reported by a numbering-plan backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The backend could not parse the input
    #[error("parse failed: {0}")]
    Parse(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the HTTP adapters.
///
/// Conversion into an HTTP response lives in [`crate::server::responses`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Query endpoint called without a usable `phoneNumber`
    #[error("phoneNumber parameter is required")]
    MissingParameter,

    /// Body endpoint received a malformed body or no `phoneNumber`
    #[error("Invalid input")]
    InvalidInput,

    /// Validation rejected the number; the raw input is echoed back
    #[error("{source}")]
    Validation {
        phone_number: String,
        #[source]
        source: ValidationError,
    },
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with PlanError
pub type PlanResult<T> = Result<T, PlanError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
