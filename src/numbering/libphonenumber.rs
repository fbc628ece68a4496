use crate::error::{PlanError, PlanResult};
use crate::numbering::traits::NumberingPlan;
use phonenumber::country::Id;
use phonenumber::metadata::DATABASE;
use phonenumber::{Mode, PhoneNumber};

/// Region reported for numbers that belong to no single region.
pub const UNKNOWN_REGION: &str = "ZZ";

/// Numbering plan backed by the `phonenumber` crate's libphonenumber metadata.
///
/// Stateless; the metadata is loaded once by the crate and shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumberPlan;

impl LibPhoneNumberPlan {
    /// Create a new plan.
    pub fn new() -> Self {
        Self
    }

    /// Resolve a region hint. Region ids are case-sensitive; unknown
    /// regions behave like no hint at all.
    fn default_region(region: &str) -> Option<Id> {
        if region.is_empty() {
            return None;
        }
        region.parse::<Id>().ok()
    }

    /// Search the regions sharing the number's calling code for one that
    /// accepts the national digits, leading zeros included.
    ///
    /// Candidates come main-country first, so shared codes (`+39`, `+1`)
    /// resolve to the main region when several accept the number.
    fn region_from_calling_code(&self, number: &PhoneNumber) -> Option<Id> {
        let e164 = self.format_e164(number);
        let national = self.national_significant_number(number);

        DATABASE
            .region(&number.code().value())
            .into_iter()
            .flatten()
            .filter_map(|candidate| candidate.parse::<Id>().ok())
            .find(|&id| {
                phonenumber::parse(Some(id), &national)
                    .map(|reparsed| {
                        phonenumber::is_valid(&reparsed) && self.format_e164(&reparsed) == e164
                    })
                    .unwrap_or(false)
            })
    }
}

impl NumberingPlan for LibPhoneNumberPlan {
    type Number = PhoneNumber;

    fn parse(&self, number: &str, region: &str) -> PlanResult<PhoneNumber> {
        phonenumber::parse(Self::default_region(region), number)
            .map_err(|err| PlanError::Parse(err.to_string()))
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn format_e164(&self, number: &PhoneNumber) -> String {
        number.format().mode(Mode::E164).to_string()
    }

    fn region_code(&self, number: &PhoneNumber) -> String {
        // `country().id()` matches on the integer national number and misses
        // regions whose numbers keep a leading zero (Italian fixed lines).
        number
            .country()
            .id()
            .or_else(|| self.region_from_calling_code(number))
            .map(|id| id.as_ref().to_string())
            .unwrap_or_else(|| UNKNOWN_REGION.to_string())
    }

    fn national_significant_number(&self, number: &PhoneNumber) -> String {
        // E.164 is "+" followed by the calling code and then the national digits.
        let e164 = self.format_e164(number);
        let code_len = number.code().value().to_string().len();
        e164.get(1 + code_len..).unwrap_or_default().to_string()
    }
}
