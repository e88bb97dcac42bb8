use std::fmt;

use super::checksum::{WEIGHTS, check_char, transliterate};
use super::countries::{lookup_country, lookup_region};
use super::error::VinError;
use super::manufacturers::manufacturer_or_unknown;
use super::report::VinReport;
use super::years::YearTable;

/// Number of characters in a VIN (model years 1981 onward).
pub const VIN_LENGTH: usize = 17;

/// Letters prohibited in every VIN position.
const FORBIDDEN_CHARS: [char; 3] = ['I', 'O', 'Q'];

/// Characters prohibited in the model year position.
const FORBIDDEN_YEAR_CODES: [char; 3] = ['U', 'Z', '0'];

/// Position of the check digit (VDS, last character).
const CHECK_DIGIT_POS: usize = 8;

/// Position of the model year code (VIS, first character).
const YEAR_POS: usize = 9;

/// A Vehicle Identification Number, normalized to uppercase.
///
/// Construction never fails: any string is accepted and every accessor is
/// defined for inputs of any length. Only [`Vin::validate`] treats a
/// malformed VIN as an error; the positional accessors return truncated or
/// empty slices instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vin {
    vin: String,
}

impl Vin {
    /// Wrap a raw VIN, normalizing it to uppercase.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            vin: raw.as_ref().to_uppercase(),
        }
    }

    /// The normalized VIN.
    pub fn as_str(&self) -> &str {
        &self.vin
    }

    /// The normalized VIN. Decoding is a pass-through.
    pub fn decode(&self) -> &str {
        &self.vin
    }

    /// Check the VIN's structure and check digit.
    ///
    /// Checks run in order and stop at the first failure: length, forbidden
    /// letters, model year code, transliteration, check digit. The length
    /// check comes first so every later positional access is in bounds.
    pub fn validate(&self) -> Result<(), VinError> {
        let result = self.check_structure();
        if let Err(err) = &result {
            tracing::debug!(vin = %self.vin, %err, "VIN rejected");
        }
        result
    }

    /// `true` if [`Vin::validate`] passes.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn check_structure(&self) -> Result<(), VinError> {
        let chars: Vec<char> = self.vin.chars().collect();
        if chars.len() != VIN_LENGTH {
            return Err(VinError::Length { len: chars.len() });
        }

        if let Some((position, &ch)) = chars
            .iter()
            .enumerate()
            .find(|(_, c)| FORBIDDEN_CHARS.contains(c))
        {
            return Err(VinError::ForbiddenCharacter { ch, position });
        }

        let year_code = chars[YEAR_POS];
        if FORBIDDEN_YEAR_CODES.contains(&year_code) {
            return Err(VinError::ForbiddenYearCode { ch: year_code });
        }

        let mut sum = 0u32;
        for (position, (&ch, weight)) in chars.iter().zip(WEIGHTS).enumerate() {
            let value = transliterate(ch).ok_or(VinError::UnmappedCharacter { ch, position })?;
            sum += value * weight;
        }

        let expected = check_char(sum % 11);
        let found = chars[CHECK_DIGIT_POS];
        if found != expected {
            return Err(VinError::CheckDigitMismatch { expected, found });
        }

        Ok(())
    }

    /// Computed check character, if the VIN is 17 transliterable characters.
    ///
    /// Unlike [`Vin::is_valid`] this ignores forbidden letters and year codes.
    pub fn check_digit(&self) -> Option<char> {
        super::checksum::compute_check_digit(&self.vin)
    }

    /// `true` if position 6 is numeric, meaning the model year code refers
    /// to 1980-2009 rather than 2010-2039.
    pub fn is_pre_2010(&self) -> bool {
        self.char_at(6).is_some_and(|c| c.is_ascii_digit())
    }

    /// Manufacturers building fewer than 500 vehicles a year use `9` as the
    /// third character.
    pub fn less_than_500_built_per_year(&self) -> bool {
        let digit = self.char_at(2).and_then(|c| c.to_digit(10));
        digit == Some(9)
    }

    /// World Manufacturer Identifier: positions 0-2.
    pub fn wmi(&self) -> &str {
        self.slice(0, 3)
    }

    /// Vehicle Descriptor Section: positions 3-8, including the check digit.
    pub fn vds(&self) -> &str {
        self.slice(3, 9)
    }

    /// Vehicle Identifier Sequence: the last 8 characters.
    pub fn vis(&self) -> &str {
        self.tail(8)
    }

    /// Vehicle Sequential Number: the last 3 characters for low-volume
    /// manufacturers, otherwise the last 6.
    pub fn vsn(&self) -> &str {
        if self.less_than_500_built_per_year() {
            self.tail(3)
        } else {
            self.tail(6)
        }
    }

    /// Country assigned to the leading character, or `"Unknown"`.
    pub fn country(&self) -> &'static str {
        self.char_at(0).map_or(super::UNKNOWN, lookup_country)
    }

    /// Region assigned to the leading character, or `"Unknown"`.
    pub fn region(&self) -> &'static str {
        self.char_at(0).map_or(super::UNKNOWN, lookup_region)
    }

    /// Manufacturer name by WMI (3-character key, then 2-character prefix),
    /// or `"Unknown"`.
    pub fn manufacturer(&self) -> &'static str {
        manufacturer_or_unknown(self.wmi())
    }

    /// Year table applicable to this VIN.
    ///
    /// Brazil takes precedence over the position-6 rule.
    pub fn year_table(&self) -> YearTable {
        if self.country() == "Brazil" {
            YearTable::Brazil
        } else if self.is_pre_2010() {
            YearTable::Pre2010
        } else {
            YearTable::Pre2040
        }
    }

    /// Model year decoded from position 9.
    ///
    /// Fails with [`VinError::UnknownYearCode`] when the code is missing or
    /// has no entry in the selected table.
    pub fn year(&self) -> Result<u16, VinError> {
        let table = self.year_table();
        let code = self.char_at(YEAR_POS);
        tracing::debug!(vin = %self.vin, %table, ?code, "resolving model year");
        code.and_then(|c| table.lookup(c))
            .ok_or(VinError::UnknownYearCode { code, table })
    }

    /// Model decoding is not supported; always empty.
    pub fn model(&self) -> &str {
        ""
    }

    /// Engine decoding is not supported; always empty.
    pub fn engine(&self) -> &str {
        ""
    }

    /// Snapshot of every decoded property.
    pub fn report(&self) -> VinReport {
        VinReport {
            vin: self.vin.clone(),
            valid: self.is_valid(),
            wmi: self.wmi().into(),
            vds: self.vds().into(),
            vis: self.vis().into(),
            vsn: self.vsn().into(),
            check_digit: self.check_digit(),
            country: self.country().into(),
            region: self.region().into(),
            manufacturer: self.manufacturer().into(),
            year: self.year().ok(),
            model: self.model().into(),
            engine: self.engine().into(),
        }
    }

    fn char_at(&self, position: usize) -> Option<char> {
        self.vin.chars().nth(position)
    }

    /// Characters `start..end`, clamped to the string.
    fn slice(&self, start: usize, end: usize) -> &str {
        let from = self.byte_offset(start);
        let to = self.byte_offset(end);
        &self.vin[from..to]
    }

    /// Last `n` characters (the whole string if shorter).
    fn tail(&self, n: usize) -> &str {
        let len = self.vin.chars().count();
        let from = self.byte_offset(len.saturating_sub(n));
        &self.vin[from..]
    }

    fn byte_offset(&self, position: usize) -> usize {
        self.vin
            .char_indices()
            .nth(position)
            .map_or(self.vin.len(), |(idx, _)| idx)
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.vin)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.vin
    }
}

impl From<&str> for Vin {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Vin {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Normalize a raw VIN. Equivalent to `Vin::new(raw).decode()`.
pub fn decode(raw: &str) -> String {
    Vin::new(raw).decode().to_owned()
}
