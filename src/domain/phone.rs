//! RawPhoneNumber value object.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Optional `+`, then up to three digit groups separated by single spaces.
static SPACING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]+ ?[0-9]+ ?[0-9]+$").expect("spacing pattern is valid")
});

/// A phone number exactly as the client sent it, after the spacing check.
///
/// Only ASCII digits, an optional leading `+` and at most two single spaces
/// between digit groups are accepted. Anything else (punctuation, letters,
/// tabs, repeated spaces) is rejected as [`ValidationError::InvalidFormat`].
///
/// # Example
///
/// ```
/// use phone_validator_api::domain::RawPhoneNumber;
///
/// let phone = RawPhoneNumber::new("+34 915872200").unwrap();
/// assert_eq!(phone.cleaned(), "+34915872200");
/// assert!(RawPhoneNumber::new("+34 915 872 200").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Create a new RawPhoneNumber, checking spacing and characters.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the input does not match the
    /// allowed digit-group pattern.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !SPACING_PATTERN.is_match(&phone) {
            return Err(ValidationError::InvalidFormat);
        }

        Ok(Self(phone))
    }

    /// The input as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The input with every space removed.
    pub fn cleaned(&self) -> String {
        self.0.replace(' ', "")
    }
}

impl fmt::Display for RawPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
