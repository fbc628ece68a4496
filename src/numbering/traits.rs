use crate::error::PlanResult;

/// Access to numbering-plan knowledge.
///
/// Implementations must be safe to call concurrently; the service never
/// mutates a parsed number.
pub trait NumberingPlan: Send + Sync {
    /// Parsed representation owned by the backend.
    type Number;

    /// Parse `number`, using `region` as the default region for national
    /// numbers. An empty `region` means no default.
    fn parse(&self, number: &str, region: &str) -> PlanResult<Self::Number>;

    /// Whether the numbering plan allocates this digit sequence.
    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Format as E.164 (`+<country code><national number>`).
    fn format_e164(&self, number: &Self::Number) -> String;

    /// ISO 3166-1 alpha-2 region owning the number.
    fn region_code(&self, number: &Self::Number) -> String;

    /// National digits, without the country calling code.
    fn national_significant_number(&self, number: &Self::Number) -> String;
}
