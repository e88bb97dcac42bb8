//! Model year code tables (VIN position 9).
//!
//! The model year code cycles through 30 characters every 30 years. For
//! light vehicles position 6 disambiguates the cycle: numeric means
//! 1980-2009, alphabetic means 2010-2039. Brazil does not regulate
//! position 6 and uses a single table anchored at 2000.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Year code cycle in ISO 3779 order. U, Z and 0 are never used.
const YEAR_CYCLE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'W',
    'X', 'Y', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Brazilian model year codes (2000-2029).
static BRAZIL: &[(char, u16)] = &[
    ('Y', 2000),
    ('1', 2001),
    ('2', 2002),
    ('3', 2003),
    ('4', 2004),
    ('5', 2005),
    ('6', 2006),
    ('7', 2007),
    ('8', 2008),
    ('9', 2009),
    ('A', 2010),
    ('B', 2011),
    ('C', 2012),
    ('D', 2013),
    ('E', 2014),
    ('F', 2015),
    ('G', 2016),
    ('H', 2017),
    ('J', 2018),
    ('K', 2019),
    ('L', 2020),
    ('M', 2021),
    ('N', 2022),
    ('P', 2023),
    ('R', 2024),
    ('S', 2025),
    ('T', 2026),
    ('V', 2027),
    ('W', 2028),
    ('X', 2029),
];

/// Which model year table a VIN's year code is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearTable {
    /// Brazilian table, 2000-2029.
    Brazil,
    /// First cycle, 1980-2009.
    Pre2010,
    /// Second cycle, 2010-2039.
    Pre2040,
}

impl YearTable {
    /// Model year for a year code, or `None` if the table has no entry.
    pub fn lookup(self, code: char) -> Option<u16> {
        match self {
            Self::Brazil => BRAZIL
                .iter()
                .find(|&&(c, _)| c == code)
                .map(|&(_, year)| year),
            Self::Pre2010 => cycle_year(1980, code),
            Self::Pre2040 => cycle_year(2010, code),
        }
    }

    /// First and last model year covered by the table.
    pub fn range(self) -> (u16, u16) {
        match self {
            Self::Brazil => (2000, 2029),
            Self::Pre2010 => (1980, 2009),
            Self::Pre2040 => (2010, 2039),
        }
    }
}

impl fmt::Display for YearTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brazil => f.write_str("Brazil"),
            _ => {
                let (first, last) = self.range();
                write!(f, "{first}-{last}")
            }
        }
    }
}

fn cycle_year(base: u16, code: char) -> Option<u16> {
    YEAR_CYCLE
        .iter()
        .position(|&c| c == code)
        .and_then(|idx| u16::try_from(idx).ok())
        .map(|offset| base + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cycle() {
        assert_eq!(YearTable::Pre2010.lookup('A'), Some(1980));
        assert_eq!(YearTable::Pre2010.lookup('H'), Some(1987));
        assert_eq!(YearTable::Pre2010.lookup('J'), Some(1988));
        assert_eq!(YearTable::Pre2010.lookup('Y'), Some(2000));
        assert_eq!(YearTable::Pre2010.lookup('1'), Some(2001));
        assert_eq!(YearTable::Pre2010.lookup('9'), Some(2009));
    }

    #[test]
    fn second_cycle() {
        assert_eq!(YearTable::Pre2040.lookup('A'), Some(2010));
        assert_eq!(YearTable::Pre2040.lookup('L'), Some(2020));
        assert_eq!(YearTable::Pre2040.lookup('Y'), Some(2030));
        assert_eq!(YearTable::Pre2040.lookup('9'), Some(2039));
    }

    #[test]
    fn brazil() {
        assert_eq!(YearTable::Brazil.lookup('Y'), Some(2000));
        assert_eq!(YearTable::Brazil.lookup('5'), Some(2005));
        assert_eq!(YearTable::Brazil.lookup('A'), Some(2010));
        assert_eq!(YearTable::Brazil.lookup('X'), Some(2029));
    }

    #[test]
    fn forbidden_codes_unmapped() {
        for table in [YearTable::Brazil, YearTable::Pre2010, YearTable::Pre2040] {
            for code in ['U', 'Z', '0', 'I', 'O', 'Q', 'a', '-'] {
                assert_eq!(table.lookup(code), None, "{code} in {table}");
            }
        }
    }

    #[test]
    fn tables_cover_their_range() {
        for table in [YearTable::Brazil, YearTable::Pre2010, YearTable::Pre2040] {
            let (first, last) = table.range();
            let mut years: Vec<u16> = ('0'..='9')
                .chain('A'..='Z')
                .filter_map(|c| table.lookup(c))
                .collect();
            years.sort_unstable();
            let expected: Vec<u16> = (first..=last).collect();
            assert_eq!(years, expected, "{table}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(YearTable::Brazil.to_string(), "Brazil");
        assert_eq!(YearTable::Pre2010.to_string(), "1980-2009");
        assert_eq!(YearTable::Pre2040.to_string(), "2010-2039");
    }
}
