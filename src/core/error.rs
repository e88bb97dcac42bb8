use thiserror::Error;

use super::years::YearTable;

/// Errors that can occur while validating or decoding a VIN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VinError {
    /// A VIN must be exactly 17 characters long.
    #[error("invalid length: expected 17 characters, got {len}")]
    Length {
        /// Number of characters in the input.
        len: usize,
    },

    /// The letters I, O and Q are prohibited in every position.
    #[error("forbidden character '{ch}' at position {position}")]
    ForbiddenCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based position in the VIN.
        position: usize,
    },

    /// The model year position does not permit U, Z or 0.
    #[error("forbidden model year code '{ch}'")]
    ForbiddenYearCode {
        /// The character found at position 9.
        ch: char,
    },

    /// Character has no ISO 3779 transliteration value.
    #[error("unmapped character '{ch}' at position {position}")]
    UnmappedCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based position in the VIN.
        position: usize,
    },

    /// Position 8 does not hold the computed check digit.
    #[error("check digit mismatch: expected '{expected}', found '{found}'")]
    CheckDigitMismatch {
        /// Check character computed from the other 16 positions.
        expected: char,
        /// Character actually present at position 8.
        found: char,
    },

    /// The model year code has no entry in the selected year table.
    #[error("unknown model year code {} in {table} table", display_code(.code))]
    UnknownYearCode {
        /// Character at position 9, or `None` if the input is too short.
        code: Option<char>,
        /// Year table the code was looked up in.
        table: YearTable,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

fn display_code(code: &Option<char>) -> String {
    match code {
        Some(c) => format!("'{c}'"),
        None => "<missing>".into(),
    }
}
