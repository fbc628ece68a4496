//! Display components of a validated phone number.

use serde::Serialize;

/// Number of leading national digits reported as the area code.
///
/// This is a fixed split, not a per-region rule: many numbering plans use
/// area codes of other lengths (or none at all).
pub const AREA_CODE_DIGITS: usize = 3;

/// The parts of a validated number returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneComponents {
    /// Number in E.164 form, e.g. `+34915872200`
    #[serde(rename = "phoneNumber")]
    pub e164: String,

    /// ISO 3166-1 alpha-2 region owning the number
    #[serde(rename = "countryCode")]
    pub region_code: String,

    /// First [`AREA_CODE_DIGITS`] digits of the national significant number
    pub area_code: String,

    /// Remaining national digits
    #[serde(rename = "localPhoneNumber")]
    pub local_number: String,
}

impl PhoneComponents {
    /// Build components by splitting `national_number` after the area code.
    ///
    /// A national number shorter than the area code yields an empty local part.
    pub fn from_parts(
        e164: impl Into<String>,
        region_code: impl Into<String>,
        national_number: &str,
    ) -> Self {
        let split = national_number.len().min(AREA_CODE_DIGITS);
        let (area_code, local_number) = national_number.split_at(split);

        Self {
            e164: e164.into(),
            region_code: region_code.into(),
            area_code: area_code.to_string(),
            local_number: local_number.to_string(),
        }
    }

    /// Area code and local number joined back together.
    pub fn national_number(&self) -> String {
        format!("{}{}", self.area_code, self.local_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_after_three_digits() {
        let components = PhoneComponents::from_parts("+34915872200", "ES", "915872200");
        assert_eq!(components.area_code, "915");
        assert_eq!(components.local_number, "872200");
        assert_eq!(components.national_number(), "915872200");
    }

    #[test]
    fn test_short_national_number() {
        let components = PhoneComponents::from_parts("+8812", "ZZ", "12");
        assert_eq!(components.area_code, "12");
        assert_eq!(components.local_number, "");
    }

    #[test]
    fn test_serialization_field_names() {
        let components = PhoneComponents::from_parts("+12125690123", "US", "2125690123");
        let json = serde_json::to_value(&components).unwrap();

        assert_eq!(json["phoneNumber"], "+12125690123");
        assert_eq!(json["countryCode"], "US");
        assert_eq!(json["areaCode"], "212");
        assert_eq!(json["localPhoneNumber"], "5690123");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
