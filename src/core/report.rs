use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use super::error::VinError;

/// Every property decoded from one VIN, as owned values.
///
/// Produced by [`Vin::report`](super::Vin::report). `year` is `None` when
/// the model year code could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinReport {
    /// Normalized (uppercase) VIN.
    pub vin: String,
    /// Result of [`Vin::is_valid`](super::Vin::is_valid).
    pub valid: bool,
    /// World Manufacturer Identifier.
    pub wmi: String,
    /// Vehicle Descriptor Section.
    pub vds: String,
    /// Vehicle Identifier Sequence.
    pub vis: String,
    /// Vehicle Sequential Number.
    pub vsn: String,
    /// Computed check character, if computable.
    pub check_digit: Option<char>,
    /// Country of the leading character, or "Unknown".
    pub country: String,
    /// Region of the leading character, or "Unknown".
    pub region: String,
    /// Manufacturer name by WMI, or "Unknown".
    pub manufacturer: String,
    /// Model year, if the year code resolved.
    pub year: Option<u16>,
    /// Always empty; model decoding is not supported.
    pub model: String,
    /// Always empty; engine decoding is not supported.
    pub engine: String,
}

impl VinReport {
    /// Serialize the report as pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, VinError> {
        serde_json::to_string_pretty(self).map_err(|e| VinError::Json(e.to_string()))
    }
}

impl fmt::Display for VinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vin:          {}", self.vin)?;
        writeln!(f, "valid:        {}", self.valid)?;
        writeln!(f, "wmi:          {}", self.wmi)?;
        writeln!(f, "vds:          {}", self.vds)?;
        writeln!(f, "vis:          {}", self.vis)?;
        writeln!(f, "vsn:          {}", self.vsn)?;
        match self.check_digit {
            Some(c) => writeln!(f, "check digit:  {c}")?,
            None => writeln!(f, "check digit:  -")?,
        }
        writeln!(f, "country:      {}", self.country)?;
        writeln!(f, "region:       {}", self.region)?;
        writeln!(f, "manufacturer: {}", self.manufacturer)?;
        match self.year {
            Some(y) => write!(f, "year:         {y}"),
            None => write!(f, "year:         -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Vin;

    #[test]
    fn report_fields() {
        let report = Vin::new("1hgcm82633a004352").report();
        assert_eq!(report.vin, "1HGCM82633A004352");
        assert!(report.valid);
        assert_eq!(report.check_digit, Some('3'));
        assert_eq!(report.manufacturer, "Honda USA-Ohio");
        assert_eq!(report.year, Some(2003));
        assert!(report.model.is_empty());
        assert!(report.engine.is_empty());
    }

    #[test]
    fn report_for_garbage() {
        let report = Vin::new("??").report();
        assert!(!report.valid);
        assert_eq!(report.check_digit, None);
        assert_eq!(report.country, "Unknown");
        assert_eq!(report.region, "Unknown");
        assert_eq!(report.manufacturer, "Unknown");
        assert_eq!(report.year, None);
    }

    #[test]
    fn display_snapshot() {
        let report = Vin::new("1HGCM82633A004352").report();
        insta::assert_snapshot!(report.to_string(), @r"
        vin:          1HGCM82633A004352
        valid:        true
        wmi:          1HG
        vds:          CM8263
        vis:          3A004352
        vsn:          004352
        check digit:  3
        country:      United States
        region:       North America
        manufacturer: Honda USA-Ohio
        year:         2003
        ");
    }
}
