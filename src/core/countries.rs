//! World manufacturer region and country table.
//!
//! Keyed by the first VIN character. Each entry carries a region and a list
//! of character-code sets with the country assigned to each set. Sets are
//! written in VIN alphabet order (`A`–`Z` without I, O, Q, then `1`–`9`, `0`).

/// Sentinel returned by the soft lookups when a code is not mapped.
pub const UNKNOWN: &str = "Unknown";

/// Region and country assignments for one leading VIN character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldManufacturer {
    /// Leading VIN character.
    pub code: char,
    /// Geographic region (e.g. "Europe").
    pub region: &'static str,
    /// `(character set, country name)` pairs, searched in order.
    pub countries: &'static [(&'static str, &'static str)],
}

impl WorldManufacturer {
    /// Country of the first code set containing `c`.
    pub fn country_for(&self, c: char) -> Option<&'static str> {
        self.countries
            .iter()
            .find(|(codes, _)| codes.contains(c))
            .map(|&(_, country)| country)
    }
}

/// Find the table entry for a leading VIN character.
pub fn world_manufacturer(code: char) -> Option<&'static WorldManufacturer> {
    WORLD_MANUFACTURERS
        .binary_search_by_key(&code, |wm| wm.code)
        .ok()
        .map(|idx| &WORLD_MANUFACTURERS[idx])
}

/// Region for a leading VIN character, or [`UNKNOWN`].
pub fn lookup_region(code: char) -> &'static str {
    world_manufacturer(code).map_or(UNKNOWN, |wm| wm.region)
}

/// Country for a leading VIN character, or [`UNKNOWN`].
///
/// The character is looked up in its own entry's code sets.
pub fn lookup_country(code: char) -> &'static str {
    world_manufacturer(code)
        .and_then(|wm| wm.country_for(code))
        .unwrap_or(UNKNOWN)
}

const AFRICA: &str = "Africa";
const ASIA: &str = "Asia";
const EUROPE: &str = "Europe";
const NORTH_AMERICA: &str = "North America";
const OCEANIA: &str = "Oceania";
const SOUTH_AMERICA: &str = "South America";

/// Sorted by `code` (ASCII order: digits before letters) for binary search.
static WORLD_MANUFACTURERS: &[WorldManufacturer] = &[
    WorldManufacturer {
        code: '1',
        region: NORTH_AMERICA,
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "United States")],
    },
    WorldManufacturer {
        code: '2',
        region: NORTH_AMERICA,
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "Canada")],
    },
    WorldManufacturer {
        code: '3',
        region: NORTH_AMERICA,
        countries: &[
            ("ABCDEFGHJKLMNPRSTUVW", "Mexico"),
            ("XYZ1234567", "Costa Rica"),
            ("890", "Cayman Islands"),
        ],
    },
    WorldManufacturer {
        code: '4',
        region: NORTH_AMERICA,
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "United States")],
    },
    WorldManufacturer {
        code: '5',
        region: NORTH_AMERICA,
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "United States")],
    },
    WorldManufacturer {
        code: '6',
        region: OCEANIA,
        countries: &[("ABCDEFGHJKLMNPRSTUVW", "Australia")],
    },
    WorldManufacturer {
        code: '7',
        region: OCEANIA,
        countries: &[("ABCDE", "New Zealand")],
    },
    WorldManufacturer {
        code: '8',
        region: SOUTH_AMERICA,
        countries: &[
            ("ABCDE", "Argentina"),
            ("FGHJK", "Chile"),
            ("LMNPR", "Ecuador"),
            ("STUVW", "Peru"),
            ("XYZ12", "Venezuela"),
        ],
    },
    WorldManufacturer {
        code: '9',
        region: SOUTH_AMERICA,
        countries: &[
            ("ABCDE", "Brazil"),
            ("FGHJK", "Colombia"),
            ("LMNPR", "Paraguay"),
            ("STUVW", "Uruguay"),
            ("XYZ12", "Trinidad & Tobago"),
            ("3456789", "Brazil"),
        ],
    },
    WorldManufacturer {
        code: 'A',
        region: AFRICA,
        countries: &[("ABCDEFGH", "South Africa"), ("JKLMN", "Ivory Coast")],
    },
    WorldManufacturer {
        code: 'B',
        region: AFRICA,
        countries: &[("ABCDE", "Angola"), ("FGHJK", "Kenya"), ("LMNPR", "Tanzania")],
    },
    WorldManufacturer {
        code: 'C',
        region: AFRICA,
        countries: &[("ABCDE", "Benin"), ("FGHJK", "Madagascar"), ("LMNPR", "Tunisia")],
    },
    WorldManufacturer {
        code: 'D',
        region: AFRICA,
        countries: &[("ABCDE", "Egypt"), ("FGHJK", "Morocco"), ("LMNPR", "Zambia")],
    },
    WorldManufacturer {
        code: 'E',
        region: AFRICA,
        countries: &[("ABCDE", "Ethiopia"), ("FGHJK", "Mozambique")],
    },
    WorldManufacturer {
        code: 'F',
        region: AFRICA,
        countries: &[("ABCDE", "Ghana"), ("FGHJK", "Nigeria")],
    },
    WorldManufacturer {
        code: 'G',
        region: AFRICA,
        countries: &[],
    },
    WorldManufacturer {
        code: 'H',
        region: AFRICA,
        countries: &[],
    },
    WorldManufacturer {
        code: 'J',
        region: ASIA,
        countries: &[("ABCDEFGHJKLMNPRST", "Japan")],
    },
    WorldManufacturer {
        code: 'K',
        region: ASIA,
        countries: &[
            ("ABCDE", "Sri Lanka"),
            ("FGHJK", "Israel"),
            ("LMNPR", "South Korea"),
            ("STUVWXYZ1234567890", "Kazakhstan"),
        ],
    },
    WorldManufacturer {
        code: 'L',
        region: ASIA,
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "China")],
    },
    WorldManufacturer {
        code: 'M',
        region: ASIA,
        countries: &[
            ("ABCDE", "India"),
            ("FGHJK", "Indonesia"),
            ("LMNPR", "Thailand"),
            ("STUVWXYZ1234567890", "Myanmar"),
        ],
    },
    WorldManufacturer {
        code: 'N',
        region: ASIA,
        countries: &[("ABCDE", "Iran"), ("FGHJK", "Pakistan"), ("LMNPR", "Turkey")],
    },
    WorldManufacturer {
        code: 'P',
        region: ASIA,
        countries: &[
            ("ABCDE", "Philippines"),
            ("FGHJK", "Singapore"),
            ("LMNPR", "Malaysia"),
        ],
    },
    WorldManufacturer {
        code: 'R',
        region: ASIA,
        countries: &[
            ("ABCDE", "United Arab Emirates"),
            ("FGHJK", "Taiwan"),
            ("LMNPR", "Vietnam"),
            ("STUVWXYZ1234567890", "Saudi Arabia"),
        ],
    },
    WorldManufacturer {
        code: 'S',
        region: EUROPE,
        countries: &[
            ("ABCDEFGHJKLM", "United Kingdom"),
            ("NPRST", "East Germany"),
            ("UVWXYZ", "Poland"),
            ("1234", "Latvia"),
        ],
    },
    WorldManufacturer {
        code: 'T',
        region: EUROPE,
        countries: &[
            ("ABCDEFGH", "Switzerland"),
            ("JKLMNP", "Czech Republic"),
            ("RSTUV", "Hungary"),
            ("WXYZ1", "Portugal"),
        ],
    },
    WorldManufacturer {
        code: 'U',
        region: EUROPE,
        countries: &[
            ("HJKLM", "Denmark"),
            ("NPRST", "Ireland"),
            ("UVWXYZ", "Romania"),
            ("567", "Slovakia"),
        ],
    },
    WorldManufacturer {
        code: 'V',
        region: EUROPE,
        countries: &[
            ("ABCDE", "Austria"),
            ("FGHJKLMNPR", "France"),
            ("STUVW", "Spain"),
            ("XYZ12", "Serbia"),
            ("345", "Croatia"),
            ("67890", "Estonia"),
        ],
    },
    WorldManufacturer {
        code: 'W',
        region: EUROPE,
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "Germany")],
    },
    WorldManufacturer {
        code: 'X',
        region: EUROPE,
        countries: &[
            ("ABCDE", "Bulgaria"),
            ("FGHJK", "Greece"),
            ("LMNPR", "Netherlands"),
            ("STUVW", "Russia"),
            ("XYZ12", "Luxembourg"),
            ("34567890", "Russia"),
        ],
    },
    WorldManufacturer {
        code: 'Y',
        region: EUROPE,
        countries: &[
            ("ABCDE", "Belgium"),
            ("FGHJK", "Finland"),
            ("LMNPR", "Malta"),
            ("STUVW", "Sweden"),
            ("XYZ12", "Norway"),
            ("345", "Belarus"),
            ("67890", "Ukraine"),
        ],
    },
    WorldManufacturer {
        code: 'Z',
        region: EUROPE,
        countries: &[
            ("ABCDEFGHJKLMNPR", "Italy"),
            ("XYZ12", "Slovenia"),
            ("345", "Lithuania"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_regions() {
        assert_eq!(lookup_region('1'), "North America");
        assert_eq!(lookup_region('9'), "South America");
        assert_eq!(lookup_region('J'), "Asia");
        assert_eq!(lookup_region('W'), "Europe");
        assert_eq!(lookup_region('6'), "Oceania");
        assert_eq!(lookup_region('A'), "Africa");
    }

    #[test]
    fn known_countries() {
        assert_eq!(lookup_country('1'), "United States");
        assert_eq!(lookup_country('2'), "Canada");
        assert_eq!(lookup_country('9'), "Brazil");
        assert_eq!(lookup_country('J'), "Japan");
        assert_eq!(lookup_country('W'), "Germany");
        assert_eq!(lookup_country('L'), "China");
        assert_eq!(lookup_country('A'), "South Africa");
    }

    #[test]
    fn unmapped_leading_character() {
        for c in ['0', 'I', 'O', 'Q', 'a', '-', 'é'] {
            assert_eq!(lookup_region(c), UNKNOWN);
            assert_eq!(lookup_country(c), UNKNOWN);
        }
    }

    #[test]
    fn entry_without_matching_set() {
        // Region is known even though no country set contains the key.
        assert_eq!(lookup_region('G'), "Africa");
        assert_eq!(lookup_country('G'), UNKNOWN);
        assert_eq!(lookup_region('6'), "Oceania");
        assert_eq!(lookup_country('6'), UNKNOWN);
        assert_eq!(lookup_country('E'), "Ethiopia");
    }

    #[test]
    fn list_is_sorted() {
        for window in WORLD_MANUFACTURERS.windows(2) {
            assert!(
                window[0].code < window[1].code,
                "world manufacturers not sorted: {} >= {}",
                window[0].code,
                window[1].code
            );
        }
    }

    #[test]
    fn code_sets_do_not_overlap() {
        for wm in WORLD_MANUFACTURERS {
            let mut seen = String::new();
            for (codes, _) in wm.countries {
                for c in codes.chars() {
                    assert!(!seen.contains(c), "{c} repeated in entry {}", wm.code);
                    seen.push(c);
                }
            }
        }
    }

    #[test]
    fn code_sets_use_vin_alphabet() {
        for wm in WORLD_MANUFACTURERS {
            for (codes, country) in wm.countries {
                assert!(
                    codes.chars().all(|c| crate::core::transliterate(c).is_some()),
                    "{country} uses a character outside the VIN alphabet"
                );
            }
        }
    }
}
