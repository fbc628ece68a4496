//! RegionCode value object.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static ISO_ALPHA2_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}$").expect("region pattern is valid"));

/// An ISO 3166-1 alpha-2 region code such as `ES` or `US`.
///
/// Only the shape is checked (two uppercase ASCII letters); whether the
/// region exists is up to the numbering plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    /// Create a new RegionCode.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRegionFormat` unless the input is
    /// exactly two uppercase ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();

        if !ISO_ALPHA2_PATTERN.is_match(&code) {
            return Err(ValidationError::InvalidRegionFormat);
        }

        Ok(Self(code))
    }

    /// Get the region code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_valid() {
        assert_eq!(RegionCode::new("ES").unwrap().as_str(), "ES");
        assert!(RegionCode::new("US").is_ok());
        // Shape only, not existence.
        assert!(RegionCode::new("QQ").is_ok());
    }

    #[test]
    fn test_region_invalid() {
        assert_eq!(
            RegionCode::new("USS"),
            Err(ValidationError::InvalidRegionFormat)
        );
        assert!(RegionCode::new("es").is_err());
        assert!(RegionCode::new("E").is_err());
        assert!(RegionCode::new("").is_err());
        assert!(RegionCode::new("E1").is_err());
        assert!(RegionCode::new("INVALID").is_err());
    }
}
