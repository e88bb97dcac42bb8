//! ISO 3779 / NHTSA check digit computation.
//!
//! Each position carries a fixed weight; each character is transliterated
//! to an integer (digits map to themselves). The weighted sum modulo 11
//! yields the check character, with 10 written as `X`.

/// Positional weights, indexed by VIN position 0..=16.
///
/// Position 8 (the check digit itself) has weight 0.
pub const WEIGHTS: [u32; 17] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Transliteration value of a VIN character.
///
/// Returns `None` for characters outside the VIN alphabet, including the
/// prohibited letters I, O and Q.
pub fn transliterate(c: char) -> Option<u32> {
    let value = match c {
        '0'..='9' => c.to_digit(10)?,
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => return None,
    };
    Some(value)
}

/// Compute the check character for a 17-character VIN.
///
/// Returns `None` if `vin` is not exactly 17 characters long or contains a
/// character without a transliteration value. The character at position 8
/// is ignored (its weight is 0).
pub fn compute_check_digit(vin: &str) -> Option<char> {
    if vin.chars().count() != WEIGHTS.len() {
        return None;
    }

    let mut sum = 0u32;
    for (c, weight) in vin.chars().zip(WEIGHTS) {
        sum += transliterate(c)? * weight;
    }

    Some(check_char(sum % 11))
}

/// Check character for a remainder modulo 11.
pub(crate) fn check_char(remainder: u32) -> char {
    debug_assert!(remainder <= 10, "remainder {remainder} out of range");
    match remainder {
        10 => 'X',
        n => char::from_digit(n, 10).unwrap_or('X'),
    }
}
