//! # vindecode
//!
//! Vehicle Identification Number (VIN) validation and decoding following
//! ISO 3779 and the NHTSA conventions: check digit, structural sections
//! (WMI, VDS, VIS, VSN), model year, country, region and manufacturer.
//!
//! All lookup data is embedded in the crate as immutable `static` tables.
//! Nothing is read from disk or the network.
//!
//! ## Quick Start
//!
//! ```rust
//! use vindecode::Vin;
//!
//! let vin = Vin::new("1hgcm82633a004352");
//!
//! assert!(vin.is_valid());
//! assert_eq!(vin.wmi(), "1HG");
//! assert_eq!(vin.vds(), "CM8263");
//! assert_eq!(vin.vis(), "3A004352");
//! assert_eq!(vin.country(), "United States");
//! assert_eq!(vin.region(), "North America");
//! assert_eq!(vin.manufacturer(), "Honda USA-Ohio");
//! assert_eq!(vin.year().unwrap(), 2003);
//! assert_eq!(vindecode::decode("1hgcm82633a004352"), "1HGCM82633A004352");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | `Vin`, check digit, lookup tables, `VinReport` |
//! | `json` | `VinReport::to_json` via serde_json |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
