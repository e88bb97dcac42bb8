//! Core VIN types, check digit computation and lookup tables.
//!
//! [`Vin`] wraps one normalized VIN string; every derived property is
//! computed on demand from the embedded tables in this module.

mod checksum;
pub mod countries;
mod error;
pub mod manufacturers;
mod report;
mod vin;
pub mod years;

pub use checksum::{WEIGHTS, compute_check_digit, transliterate};
pub use countries::{UNKNOWN, lookup_country, lookup_region};
pub use error::*;
pub use manufacturers::lookup_manufacturer;
pub use report::*;
pub use vin::*;
pub use years::YearTable;
