//! Numbering-plan backends.
//!
//! Parsing, validity rules and formatting come from an external numbering-plan
//! library. The service layer only talks to it through [`NumberingPlan`].

mod libphonenumber;
mod traits;

pub use libphonenumber::{LibPhoneNumberPlan, UNKNOWN_REGION};
pub use traits::NumberingPlan;
