//! Domain value objects and types.
//!
//! Type-safe wrappers for the inputs and outputs of phone-number validation.
//! Value objects validate at construction time so that malformed input never
//! reaches the numbering-plan backend.

pub mod components;
pub mod phone;
pub mod region;

pub use components::{PhoneComponents, AREA_CODE_DIGITS};
pub use phone::RawPhoneNumber;
pub use region::RegionCode;
