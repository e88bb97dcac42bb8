//! World Manufacturer Identifier (WMI) to manufacturer name table.
//!
//! SAE assigns WMIs as three characters; some manufacturers own a whole
//! two-character prefix, so the table mixes 2- and 3-character keys. The
//! full SAE register has tens of thousands of entries; this covers the
//! volume manufacturers and their regional subsidiaries.

use super::countries::UNKNOWN;

/// Resolve a WMI to a manufacturer name.
///
/// The exact 3-character key is tried first, then its 2-character prefix.
/// Shorter inputs are looked up as-is.
pub fn lookup_manufacturer(wmi: &str) -> Option<&'static str> {
    find(prefix(wmi, 3)).or_else(|| find(prefix(wmi, 2)))
}

/// Like [`lookup_manufacturer`], falling back to [`UNKNOWN`].
pub fn manufacturer_or_unknown(wmi: &str) -> &'static str {
    lookup_manufacturer(wmi).unwrap_or(UNKNOWN)
}

fn find(key: &str) -> Option<&'static str> {
    MANUFACTURERS
        .binary_search_by_key(&key, |&(code, _)| code)
        .ok()
        .map(|idx| MANUFACTURERS[idx].1)
}

/// First `n` characters of `s` (all of `s` if shorter).
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Sorted by WMI for binary search.
static MANUFACTURERS: &[(&str, &str)] = &[
    ("1B3", "Dodge"),
    ("1C3", "Chrysler"),
    ("1C4", "Chrysler"),
    ("1C6", "Chrysler"),
    ("1D3", "Dodge"),
    ("1F9", "FWD Corp."),
    ("1FA", "Ford Motor Company"),
    ("1FB", "Ford Motor Company"),
    ("1FC", "Ford Motor Company"),
    ("1FD", "Ford Motor Company"),
    ("1FM", "Ford Motor Company"),
    ("1FT", "Ford Motor Company"),
    ("1FU", "Freightliner"),
    ("1FV", "Freightliner"),
    ("1G", "General Motors USA"),
    ("1G1", "Chevrolet USA"),
    ("1G2", "Pontiac USA"),
    ("1G3", "Oldsmobile USA"),
    ("1G4", "Buick USA"),
    ("1G6", "Cadillac USA"),
    ("1G8", "Saturn USA"),
    ("1GC", "Chevrolet Truck USA"),
    ("1GM", "Pontiac USA"),
    ("1GT", "GMC Truck USA"),
    ("1GY", "Cadillac USA"),
    ("1H", "Honda USA"),
    ("1HD", "Harley-Davidson"),
    ("1HG", "Honda USA-Ohio"),
    ("1J4", "Jeep"),
    ("1J8", "Jeep"),
    ("1L", "Lincoln USA"),
    ("1M1", "Mack Truck USA"),
    ("1M2", "Mack Truck USA"),
    ("1M3", "Mack Truck USA"),
    ("1M4", "Mack Truck USA"),
    ("1M8", "Motor Coach Industries USA"),
    ("1ME", "Mercury USA"),
    ("1N", "Nissan USA"),
    ("1NX", "NUMMI USA"),
    ("1P3", "Plymouth USA"),
    ("1R9", "Roadrunner Hay Squeeze USA"),
    ("1VW", "Volkswagen USA"),
    ("1XK", "Kenworth USA"),
    ("1XP", "Peterbilt USA"),
    ("1YV", "Mazda USA (AutoAlliance International)"),
    ("1ZV", "Ford (AutoAlliance International)"),
    ("2A4", "Chrysler Canada"),
    ("2B3", "Dodge Canada"),
    ("2B7", "Dodge Canada"),
    ("2BP", "Bombardier Recreational Products"),
    ("2C3", "Chrysler Canada"),
    ("2CN", "CAMI"),
    ("2D3", "Dodge Canada"),
    ("2FA", "Ford Motor Company Canada"),
    ("2FB", "Ford Motor Company Canada"),
    ("2FC", "Ford Motor Company Canada"),
    ("2FM", "Ford Motor Company Canada"),
    ("2FT", "Ford Motor Company Canada"),
    ("2FU", "Freightliner"),
    ("2FV", "Freightliner"),
    ("2FZ", "Sterling"),
    ("2G", "General Motors Canada"),
    ("2G1", "Chevrolet Canada"),
    ("2G2", "Pontiac Canada"),
    ("2G3", "Oldsmobile Canada"),
    ("2G4", "Buick Canada"),
    ("2HG", "Honda Canada"),
    ("2HJ", "Honda Canada"),
    ("2HK", "Honda Canada"),
    ("2HM", "Hyundai Canada"),
    ("2M", "Mercury"),
    ("2NV", "Nova Bus Canada"),
    ("2P4", "Plymouth Canada"),
    ("2T", "Toyota Canada"),
    ("2V4", "Volkswagen Canada"),
    ("2V8", "Volkswagen Canada"),
    ("2WK", "Western Star"),
    ("2WL", "Western Star"),
    ("2WM", "Western Star"),
    ("3C4", "Chrysler Mexico"),
    ("3D3", "Dodge Mexico"),
    ("3FA", "Ford Motor Company Mexico"),
    ("3FE", "Ford Motor Company Mexico"),
    ("3G", "General Motors Mexico"),
    ("3H", "Honda Mexico"),
    ("3JB", "BRP Mexico (all-terrain vehicles)"),
    ("3MZ", "Mazda Mexico"),
    ("3N", "Nissan Mexico"),
    ("3P3", "Plymouth Mexico"),
    ("3VW", "Volkswagen Mexico"),
    ("4F", "Mazda USA"),
    ("4M", "Mercury"),
    ("4S", "Subaru-Isuzu Automotive"),
    ("4T", "Toyota"),
    ("4US", "BMW USA"),
    ("4UZ", "Frt-Thomas Bus"),
    ("4V1", "Volvo"),
    ("4V2", "Volvo"),
    ("4V4", "Volvo"),
    ("4V5", "Volvo"),
    ("4V6", "Volvo"),
    ("4VL", "Volvo"),
    ("4VM", "Volvo"),
    ("4VZ", "Volvo"),
    ("538", "Zero Motorcycles (USA)"),
    ("5F", "Honda USA-Alabama"),
    ("5L", "Lincoln"),
    ("5N1", "Nissan USA"),
    ("5NP", "Hyundai USA"),
    ("5T", "Toyota USA - trucks"),
    ("5YJ", "Tesla"),
    ("6AB", "MAN Australia"),
    ("6F4", "Nissan Motor Company Australia"),
    ("6F5", "Kenworth Australia"),
    ("6FP", "Ford Motor Company Australia"),
    ("6G1", "General Motors-Holden (post Nov 2002)"),
    ("6G2", "Pontiac Australia (GTO & G8)"),
    ("6H8", "General Motors-Holden (pre Nov 2002)"),
    ("6MM", "Mitsubishi Motors Australia"),
    ("6T1", "Toyota Motor Corporation Australia"),
    ("6U9", "Privately Imported car in Australia"),
    ("7A3", "Honda New Zealand"),
    ("8A1", "Renault Argentina"),
    ("8AD", "Peugeot Argentina"),
    ("8AF", "Ford Motor Company Argentina"),
    ("8AG", "Chevrolet Argentina"),
    ("8AJ", "Toyota Argentina"),
    ("8AK", "Suzuki Argentina"),
    ("8AP", "Fiat Argentina"),
    ("8AW", "Volkswagen Argentina"),
    ("8GD", "Peugeot Chile"),
    ("8GG", "Chevrolet Chile"),
    ("8LD", "Chevrolet Ecuador"),
    ("935", "Citroën Brazil"),
    ("936", "Peugeot Brazil"),
    ("93H", "Honda Brazil"),
    ("93R", "Toyota Brazil"),
    ("93U", "Audi Brazil"),
    ("93V", "Audi Brazil"),
    ("93X", "Mitsubishi Motors Brazil"),
    ("93Y", "Renault Brazil"),
    ("94D", "Nissan Brazil"),
    ("9BD", "Fiat Brazil"),
    ("9BF", "Ford Motor Company Brazil"),
    ("9BG", "Chevrolet Brazil"),
    ("9BM", "Mercedes-Benz Brazil"),
    ("9BR", "Toyota Brazil"),
    ("9BS", "Scania Brazil"),
    ("9BW", "Volkswagen Brazil"),
    ("9C2", "Honda Brazil (motorcycles)"),
    ("9C6", "Yamaha Brazil (motorcycles)"),
    ("9FB", "Renault Colombia"),
    ("AAV", "Volkswagen South Africa"),
    ("AC5", "Hyundai South Africa"),
    ("ADD", "Hyundai South Africa"),
    ("AFA", "Ford South Africa"),
    ("AHT", "Toyota South Africa"),
    ("JA", "Isuzu"),
    ("JA3", "Mitsubishi"),
    ("JA4", "Mitsubishi"),
    ("JF", "Fuji Heavy Industries (Subaru)"),
    ("JHG", "Honda"),
    ("JHL", "Honda"),
    ("JHM", "Honda"),
    ("JK", "Kawasaki (motorcycles)"),
    ("JM", "Mazda"),
    ("JN", "Nissan"),
    ("JS", "Suzuki"),
    ("JT", "Toyota"),
    ("JYA", "Yamaha (motorcycles)"),
    ("KL", "Daewoo General Motors South Korea"),
    ("KM8", "Hyundai"),
    ("KMH", "Hyundai"),
    ("KNA", "Kia"),
    ("KNB", "Kia"),
    ("KNC", "Kia"),
    ("KNM", "Renault Samsung"),
    ("KPA", "SsangYong"),
    ("KPT", "SsangYong"),
    ("L56", "Renault Samsung"),
    ("L5Y", "Merato Motorcycle Taizhou Zhongneng"),
    ("LDY", "Zhongtong Coach, China"),
    ("LGH", "Dong Feng (DFM), China"),
    ("LKL", "Suzhou King Long, China"),
    ("LSY", "Brilliance Zhonghua"),
    ("LTV", "Toyota Tian Jin"),
    ("LVS", "Ford Chang An"),
    ("LVV", "Chery, China"),
    ("LZE", "Isuzu Guangzhou, China"),
    ("LZG", "Shaanxi Automobile Group, China"),
    ("LZM", "MAN China"),
    ("LZY", "Yutong Zhengzhou, China"),
    ("MA1", "Mahindra"),
    ("MA3", "Suzuki India (Maruti)"),
    ("MA7", "Honda Siel Cars India"),
    ("MAL", "Hyundai India"),
    ("MHF", "Toyota Indonesia"),
    ("MM8", "Mazda Thailand"),
    ("MMB", "Mitsubishi Thailand"),
    ("MMM", "Chevrolet Thailand"),
    ("MNB", "Ford Thailand"),
    ("MNT", "Nissan Thailand"),
    ("MP1", "Isuzu Thailand"),
    ("MRH", "Honda Thailand"),
    ("NLA", "Honda Türkiye"),
    ("NLE", "Mercedes-Benz Türk Truck"),
    ("NLH", "Hyundai Assan"),
    ("NM0", "Ford Turkey"),
    ("NM4", "Tofaş Türk"),
    ("NMT", "Toyota Türkiye"),
    ("PE1", "Ford Phillipines"),
    ("PE3", "Mazda Phillipines"),
    ("PL1", "Proton, Malaysia"),
    ("PNA", "NAZA, Malaysia (Peugeot)"),
    ("RF3", "Aeon Motor, Taiwan"),
    ("RFB", "Kymco, Taiwan"),
    ("RFG", "Sanyang SYM, Taiwan"),
    ("RFL", "Adly, Taiwan"),
    ("RFT", "CPI, Taiwan"),
    ("SAJ", "Jaguar"),
    ("SAL", "Land Rover"),
    ("SAR", "Rover"),
    ("SB1", "Toyota UK"),
    ("SBM", "McLaren"),
    ("SCA", "Rolls Royce"),
    ("SCB", "Bentley"),
    ("SCC", "Lotus Cars"),
    ("SCE", "DeLorean Motor Cars N. Ireland (UK)"),
    ("SCF", "Aston"),
    ("SDB", "Peugeot UK (formerly Talbot)"),
    ("SED", "General Motors Luton Plant"),
    ("SEY", "LDV"),
    ("SFA", "Ford UK"),
    ("SFD", "Alexander Dennis UK"),
    ("SHH", "Honda UK"),
    ("SHS", "Honda UK"),
    ("SJN", "Nissan UK"),
    ("SKF", "Vauxhall"),
    ("SMT", "Triumph Motorcycles"),
    ("SUF", "Fiat Auto Poland"),
    ("SUL", "FSC (Poland)"),
    ("SUP", "FSO-Daewoo (Poland)"),
    ("SUU", "Solaris Bus & Coach (Poland)"),
    ("TCC", "Micro Compact Car AG (smart 1998-1999)"),
    ("TDM", "QUANTYA Swiss Electric Movement (Switzerland)"),
    ("TK9", "SOR buses (Czech Republic)"),
    ("TM9", "Škoda trolleybuses (Czech Republic)"),
    ("TMB", "Škoda (Czech Republic)"),
    ("TMK", "Karosa (Czech Republic)"),
    ("TMP", "Škoda trolleybuses (Czech Republic)"),
    ("TMT", "Tatra (Czech Republic)"),
    ("TN9", "Karosa (Czech Republic)"),
    ("TRA", "Ikarus Bus"),
    ("TRU", "Audi Hungary"),
    ("TSE", "Ikarus Egyedi Autobuszgyar, (Hungary)"),
    ("TSM", "Suzuki Hungary"),
    ("TW1", "Toyota Caetano Portugal"),
    ("TYA", "Mitsubishi Trucks Portugal"),
    ("TYB", "Mitsubishi Trucks Portugal"),
    ("U1A", "Ford Romania"),
    ("U5Y", "Kia Motors Slovakia"),
    ("U6Y", "Kia Motors Slovakia"),
    ("UU1", "Renault Dacia, (Romania)"),
    ("UU3", "ARO"),
    ("UU6", "Daewoo Romania"),
    ("VAG", "Magna Steyr Puch"),
    ("VAN", "MAN Austria"),
    ("VBK", "KTM (Motorcycles)"),
    ("VF1", "Renault"),
    ("VF2", "Renault"),
    ("VF3", "Peugeot"),
    ("VF4", "Talbot"),
    ("VF6", "Renault (Trucks & Buses)"),
    ("VF7", "Citroën"),
    ("VF8", "Matra"),
    ("VF9", "Bugatti"),
    ("VG5", "MBK (motorcycles)"),
    ("VLU", "Scania France"),
    ("VN1", "SOVAB (France)"),
    ("VNE", "Irisbus (France)"),
    ("VNK", "Toyota France"),
    ("VNV", "Renault-Nissan"),
    ("VS6", "Ford Spain"),
    ("VS7", "Citroën Spain"),
    ("VS9", "Carrocerias Ayats (Spain)"),
    ("VSA", "Mercedes-Benz Spain"),
    ("VSE", "Suzuki Spain (Santana Motors)"),
    ("VSK", "Nissan Spain"),
    ("VSS", "SEAT"),
    ("VSX", "Opel Spain"),
    ("VTH", "Derbi (motorcycles)"),
    ("VTT", "Suzuki Spain (motorcycles)"),
    ("VV9", "TAURO Sport Auto Spain"),
    ("VWA", "Nissan Spain"),
    ("VWV", "Volkswagen Spain"),
    ("VX1", "Zastava / Yugo Serbia"),
    ("W0L", "Opel"),
    ("W0V", "Opel"),
    ("WA1", "Audi SUV"),
    ("WAG", "Neoplan"),
    ("WAU", "Audi"),
    ("WBA", "BMW"),
    ("WBS", "BMW M"),
    ("WBX", "BMW SUV"),
    ("WBY", "BMW i"),
    ("WDA", "Daimler"),
    ("WDB", "Mercedes-Benz"),
    ("WDC", "DaimlerChrysler"),
    ("WDD", "Mercedes-Benz"),
    ("WDF", "Mercedes-Benz (commercial vehicles)"),
    ("WEB", "Evobus GmbH (Mercedes-Bus)"),
    ("WF0", "Ford Germany"),
    ("WJM", "Iveco Magirus"),
    ("WKK", "Karl Kässbohrer Fahrzeugwerke"),
    ("WMA", "MAN Germany"),
    ("WME", "smart"),
    ("WMW", "MINI"),
    ("WMX", "Mercedes-AMG"),
    ("WP0", "Porsche car"),
    ("WP1", "Porsche SUV"),
    ("WUA", "Audi Sport GmbH"),
    ("WV1", "Volkswagen Commercial Vehicles"),
    ("WV2", "Volkswagen Bus/Van"),
    ("WV3", "Volkswagen Trucks"),
    ("WVG", "Volkswagen MPV/SUV"),
    ("WVW", "Volkswagen"),
    ("X4X", "AvtoTor (Russia, BMW SKD)"),
    ("X7L", "Renault AvtoFramos (Russia)"),
    ("X7M", "Hyundai TagAZ (Russia)"),
    ("XL9", "Spyker"),
    ("XLR", "DAF (trucks)"),
    ("XMC", "Mitsubishi (NedCar)"),
    ("XTA", "Lada/AutoVaz (Russia)"),
    ("XTT", "UAZ/Sollers (Russia)"),
    ("XUF", "General Motors Russia"),
    ("XUU", "AvtoTor (Russia, General Motors SKD)"),
    ("XW8", "Volkswagen Group Russia"),
    ("XWB", "UZ-Daewoo (Uzbekistan)"),
    ("XWE", "AvtoTor (Russia, Hyundai-Kia SKD)"),
    ("YBW", "Volkswagen Belgium"),
    ("YCM", "Mazda Belgium"),
    ("YE2", "Van Hool (buses)"),
    ("YH2", "BRP Finland (Lynx snowmobiles)"),
    ("YK1", "Saab-Valmet Finland"),
    ("YS2", "Scania AB"),
    ("YS3", "Saab"),
    ("YS4", "Scania Bus"),
    ("YT9", "Koenigsegg"),
    ("YTN", "Saab NEVS"),
    ("YV1", "Volvo Cars"),
    ("YV2", "Volvo Trucks"),
    ("YV3", "Volvo Buses"),
    ("YV4", "Volvo Cars"),
    ("ZAM", "Maserati"),
    ("ZAP", "Piaggio/Vespa/Gilera"),
    ("ZAR", "Alfa Romeo"),
    ("ZBN", "Benelli"),
    ("ZCF", "Iveco"),
    ("ZCG", "Cagiva SpA / MV Agusta"),
    ("ZD0", "Yamaha Motor Italia SpA"),
    ("ZD3", "Beta Motor"),
    ("ZD4", "Aprilia"),
    ("ZDC", "Honda Italia Industriale SpA"),
    ("ZDF", "Ferrari Dino"),
    ("ZDM", "Ducati Motor Holdings SpA"),
    ("ZFA", "Fiat"),
    ("ZFC", "Fiat V.I."),
    ("ZFF", "Ferrari"),
    ("ZGU", "Moto Guzzi"),
    ("ZHW", "Lamborghini"),
    ("ZJM", "Malaguti"),
    ("ZJN", "Innocenti"),
    ("ZKH", "Husqvarna Motorcycles Italy"),
    ("ZLA", "Lancia"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_three_character_match() {
        assert_eq!(lookup_manufacturer("1HG"), Some("Honda USA-Ohio"));
        assert_eq!(lookup_manufacturer("WBA"), Some("BMW"));
        assert_eq!(lookup_manufacturer("9BW"), Some("Volkswagen Brazil"));
        assert_eq!(lookup_manufacturer("5YJ"), Some("Tesla"));
    }

    #[test]
    fn two_character_fallback() {
        assert_eq!(lookup_manufacturer("JTD"), Some("Toyota"));
        assert_eq!(lookup_manufacturer("1GX"), Some("General Motors USA"));
        assert_eq!(lookup_manufacturer("1HZ"), Some("Honda USA"));
    }

    #[test]
    fn three_character_key_wins_over_prefix() {
        assert_eq!(lookup_manufacturer("1G1"), Some("Chevrolet USA"));
        assert_eq!(lookup_manufacturer("1G7"), Some("General Motors USA"));
    }

    #[test]
    fn unknown_wmi() {
        assert_eq!(lookup_manufacturer("ZZZ"), None);
        assert_eq!(lookup_manufacturer(""), None);
        assert_eq!(manufacturer_or_unknown("ZZZ"), UNKNOWN);
    }

    #[test]
    fn short_input() {
        assert_eq!(lookup_manufacturer("JT"), Some("Toyota"));
        assert_eq!(lookup_manufacturer("J"), None);
    }

    #[test]
    fn non_ascii_prefix_does_not_panic() {
        assert_eq!(lookup_manufacturer("ÄÖÜ"), None);
        assert_eq!(lookup_manufacturer("JTé"), Some("Toyota"));
    }

    #[test]
    fn list_is_sorted() {
        for window in MANUFACTURERS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "manufacturers not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn keys_are_two_or_three_vin_characters() {
        for &(code, _) in MANUFACTURERS {
            assert!(matches!(code.len(), 2 | 3), "bad key length: {code}");
            assert!(
                code.chars().all(|c| crate::core::transliterate(c).is_some()),
                "key outside the VIN alphabet: {code}"
            );
        }
    }
}
