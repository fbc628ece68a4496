//! Phone number validation service.
//!
//! Business logic for turning raw client input into a validated number and
//! its display components.

use crate::domain::{PhoneComponents, RawPhoneNumber, RegionCode};
use crate::error::{ValidationError, ValidationResult};
use crate::numbering::NumberingPlan;
use tracing::{debug, trace};

/// Phone number service trait for business operations.
///
/// Object-safe so the HTTP layer can hold it behind `Arc<dyn ...>`.
pub trait PhoneNumberService: Send + Sync {
    /// Validate `phone_number` and return its components.
    ///
    /// `region_hint` is an ISO 3166-1 alpha-2 code, or empty for none.
    fn normalize(
        &self,
        phone_number: &str,
        region_hint: &str,
    ) -> ValidationResult<PhoneComponents>;
}

/// Validates phone numbers against a numbering plan.
pub struct PhoneValidator<P> {
    plan: P,
}

impl<P: NumberingPlan> PhoneValidator<P> {
    /// Create a new validator over the given numbering plan.
    pub fn new(plan: P) -> Self {
        Self { plan }
    }

    /// Validate a raw phone number, returning the parsed number.
    ///
    /// The region hint is only consulted when the number cannot be parsed on
    /// its own, so a well-formed `+<country><number>` never depends on it.
    ///
    /// # Errors
    ///
    /// Each step is a hard gate, checked in order:
    /// - `InvalidFormat` if spacing or characters are wrong
    /// - `InvalidRegionFormat` if parsing failed and the hint is not alpha-2
    /// - `ParseErrorWithRegion` if the retry with the hint also failed
    /// - `ParseErrorNoRegion` if parsing failed and there is no hint
    /// - `InvalidNumber` if the numbering plan rejects the parsed number
    pub fn validate(
        &self,
        phone_number: &str,
        region_hint: &str,
    ) -> ValidationResult<P::Number> {
        let raw = RawPhoneNumber::new(phone_number).inspect_err(|_| {
            debug!("Rejected phone number: invalid spacing or characters");
        })?;

        let mut cleaned = raw.cleaned();
        let has_hint = !region_hint.is_empty();

        // Without a hint the number has to be international; assume only the '+' is missing.
        if !cleaned.starts_with('+') && !has_hint {
            cleaned.insert(0, '+');
        }

        trace!(phone_number = %cleaned, region = %region_hint, "Parsing phone number");

        let number = match self.plan.parse(&cleaned, region_hint) {
            Ok(number) => number,
            Err(err) if has_hint => {
                let region = RegionCode::new(region_hint).inspect_err(|_| {
                    debug!(region = %region_hint, "Rejected malformed region hint");
                })?;

                debug!(error = %err, region = %region, "Retrying parse with region hint");

                // Drop the leading character ('+' or first digit) and lean on the hint.
                self.plan
                    .parse(&cleaned[1..], region.as_str())
                    .map_err(|err| {
                        debug!(error = %err, region = %region, "Parse with region hint failed");
                        ValidationError::ParseErrorWithRegion
                    })?
            }
            Err(err) => {
                debug!(error = %err, "Parse failed and no region hint provided");
                return Err(ValidationError::ParseErrorNoRegion);
            }
        };

        if !self.plan.is_valid(&number) {
            debug!("Parsed number rejected by numbering plan");
            return Err(ValidationError::InvalidNumber);
        }

        Ok(number)
    }

    /// Project a validated number into its display components.
    pub fn extract_components(&self, number: &P::Number) -> PhoneComponents {
        PhoneComponents::from_parts(
            self.plan.format_e164(number),
            self.plan.region_code(number),
            &self.plan.national_significant_number(number),
        )
    }
}

impl<P: NumberingPlan> PhoneNumberService for PhoneValidator<P> {
    fn normalize(
        &self,
        phone_number: &str,
        region_hint: &str,
    ) -> ValidationResult<PhoneComponents> {
        let number = self.validate(phone_number, region_hint)?;
        let components = self.extract_components(&number);

        debug!(region = %components.region_code, "Phone number validated");

        Ok(components)
    }
}
