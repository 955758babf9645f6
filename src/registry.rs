//! Country registry for IBAN validation, sourced from the SWIFT/ISO 13616
//! IBAN registry: per-country total length and BBAN layout.

/// Character class of one BBAN run, following the registry notation
/// (`n` digits, `a` upper-case letters, `c` upper-case alphanumeric).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Upper,
    AlphaNum,
}

impl CharClass {
    pub fn matches(self, ch: char) -> bool {
        match self {
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::Upper => ch.is_ascii_uppercase(),
            CharClass::AlphaNum => ch.is_ascii_uppercase() || ch.is_ascii_digit(),
        }
    }

    fn notation(self) -> char {
        match self {
            CharClass::Digit => 'n',
            CharClass::Upper => 'a',
            CharClass::AlphaNum => 'c',
        }
    }
}

/// One registry entry: total IBAN length and the BBAN layout as
/// `(run length, character class)` pairs covering positions 5..len.
#[derive(Debug, Clone, Copy)]
pub struct CountrySpec {
    pub code: &'static str,
    pub len: usize,
    pub bban: &'static [(usize, CharClass)],
}

impl CountrySpec {
    /// Registry-style layout string for the BBAN, e.g. `4a14n` for GB.
    pub fn layout(&self) -> String {
        let mut out = String::new();
        for (len, class) in self.bban {
            out.push_str(&len.to_string());
            out.push(class.notation());
        }
        out
    }
}

const fn spec(
    code: &'static str,
    len: usize,
    bban: &'static [(usize, CharClass)],
) -> CountrySpec {
    CountrySpec { code, len, bban }
}

use CharClass::{AlphaNum, Digit, Upper};

/// Sorted by country code for binary search.
pub const SPECS: &[CountrySpec] = &[
    spec("AD", 24, &[(8, Digit), (12, AlphaNum)]),
    spec("AE", 23, &[(19, Digit)]),
    spec("AL", 28, &[(8, Digit), (16, AlphaNum)]),
    spec("AT", 20, &[(16, Digit)]),
    spec("AZ", 28, &[(4, Upper), (20, AlphaNum)]),
    spec("BA", 20, &[(16, Digit)]),
    spec("BE", 16, &[(12, Digit)]),
    spec("BG", 22, &[(4, Upper), (6, Digit), (8, AlphaNum)]),
    spec("BH", 22, &[(4, Upper), (14, AlphaNum)]),
    spec("BI", 27, &[(23, Digit)]),
    spec("BR", 29, &[(23, Digit), (1, Upper), (1, AlphaNum)]),
    spec("BY", 28, &[(4, AlphaNum), (4, Digit), (16, AlphaNum)]),
    spec("CH", 21, &[(5, Digit), (12, AlphaNum)]),
    spec("CR", 22, &[(18, Digit)]),
    spec("CY", 28, &[(8, Digit), (16, AlphaNum)]),
    spec("CZ", 24, &[(20, Digit)]),
    spec("DE", 22, &[(18, Digit)]),
    spec("DJ", 27, &[(23, Digit)]),
    spec("DK", 18, &[(14, Digit)]),
    spec("DO", 28, &[(4, AlphaNum), (20, Digit)]),
    spec("EE", 20, &[(16, Digit)]),
    spec("EG", 29, &[(25, Digit)]),
    spec("ES", 24, &[(20, Digit)]),
    spec("FI", 18, &[(14, Digit)]),
    spec("FK", 18, &[(2, Upper), (12, Digit)]),
    spec("FO", 18, &[(14, Digit)]),
    spec("FR", 27, &[(10, Digit), (11, AlphaNum), (2, Digit)]),
    spec("GB", 22, &[(4, Upper), (14, Digit)]),
    spec("GE", 22, &[(2, Upper), (16, Digit)]),
    spec("GI", 23, &[(4, Upper), (15, AlphaNum)]),
    spec("GL", 18, &[(14, Digit)]),
    spec("GR", 27, &[(7, Digit), (16, AlphaNum)]),
    spec("GT", 28, &[(24, AlphaNum)]),
    spec("HR", 21, &[(17, Digit)]),
    spec("HU", 28, &[(24, Digit)]),
    spec("IE", 22, &[(4, Upper), (14, Digit)]),
    spec("IL", 23, &[(19, Digit)]),
    spec("IQ", 23, &[(4, Upper), (15, Digit)]),
    spec("IS", 26, &[(22, Digit)]),
    spec("IT", 27, &[(1, Upper), (10, Digit), (12, AlphaNum)]),
    spec("JO", 30, &[(4, Upper), (4, Digit), (18, AlphaNum)]),
    spec("KW", 30, &[(4, Upper), (22, AlphaNum)]),
    spec("KZ", 20, &[(3, Digit), (13, AlphaNum)]),
    spec("LB", 28, &[(4, Digit), (20, AlphaNum)]),
    spec("LC", 32, &[(4, Upper), (24, AlphaNum)]),
    spec("LI", 21, &[(5, Digit), (12, AlphaNum)]),
    spec("LT", 20, &[(16, Digit)]),
    spec("LU", 20, &[(3, Digit), (13, AlphaNum)]),
    spec("LV", 21, &[(4, Upper), (13, AlphaNum)]),
    spec("LY", 25, &[(21, Digit)]),
    spec("MC", 27, &[(10, Digit), (11, AlphaNum), (2, Digit)]),
    spec("MD", 24, &[(20, AlphaNum)]),
    spec("ME", 22, &[(18, Digit)]),
    spec("MK", 19, &[(3, Digit), (10, AlphaNum), (2, Digit)]),
    spec("MN", 20, &[(16, Digit)]),
    spec("MR", 27, &[(23, Digit)]),
    spec("MT", 31, &[(4, Upper), (5, Digit), (18, AlphaNum)]),
    spec("MU", 30, &[(4, Upper), (19, Digit), (3, Upper)]),
    spec("NI", 28, &[(4, Upper), (20, Digit)]),
    spec("NL", 18, &[(4, Upper), (10, Digit)]),
    spec("NO", 15, &[(11, Digit)]),
    spec("OM", 23, &[(3, Digit), (16, AlphaNum)]),
    spec("PK", 24, &[(4, Upper), (16, AlphaNum)]),
    spec("PL", 28, &[(24, Digit)]),
    spec("PS", 29, &[(4, Upper), (21, AlphaNum)]),
    spec("PT", 25, &[(21, Digit)]),
    spec("QA", 29, &[(4, Upper), (21, AlphaNum)]),
    spec("RO", 24, &[(4, Upper), (16, AlphaNum)]),
    spec("RS", 22, &[(18, Digit)]),
    spec("RU", 33, &[(14, Digit), (15, AlphaNum)]),
    spec("SA", 24, &[(2, Digit), (18, AlphaNum)]),
    spec("SC", 31, &[(4, Upper), (20, Digit), (3, Upper)]),
    spec("SD", 18, &[(14, Digit)]),
    spec("SE", 24, &[(20, Digit)]),
    spec("SI", 19, &[(15, Digit)]),
    spec("SK", 24, &[(20, Digit)]),
    spec("SM", 27, &[(1, Upper), (10, Digit), (12, AlphaNum)]),
    spec("SO", 23, &[(19, Digit)]),
    spec("ST", 25, &[(21, Digit)]),
    spec("SV", 28, &[(4, Upper), (20, Digit)]),
    spec("TL", 23, &[(19, Digit)]),
    spec("TN", 24, &[(20, Digit)]),
    spec("TR", 26, &[(5, Digit), (17, AlphaNum)]),
    spec("UA", 29, &[(6, Digit), (19, AlphaNum)]),
    spec("VA", 22, &[(18, Digit)]),
    spec("VG", 24, &[(4, Upper), (16, Digit)]),
    spec("XK", 20, &[(16, Digit)]),
    spec("YE", 30, &[(4, Upper), (4, Digit), (18, AlphaNum)]),
];

pub fn lookup(code: &str) -> Option<&'static CountrySpec> {
    SPECS
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .map(|idx| &SPECS[idx])
}

/// Self-check of the static table. The registry is configuration, not
/// input, so a malformed entry aborts the process at startup.
pub fn verify() -> Result<(), String> {
    if SPECS.is_empty() {
        return Err("country registry is empty".to_string());
    }
    for entry in SPECS {
        if entry.code.len() != 2
            || !entry.code.chars().all(|ch| ch.is_ascii_uppercase())
        {
            return Err(format!("registry code is not 2 letters: {}", entry.code));
        }
        if !(5..=34).contains(&entry.len) {
            return Err(format!(
                "registry length out of range for {}: {}",
                entry.code, entry.len
            ));
        }
        if entry.bban.is_empty() {
            return Err(format!("registry entry {} has no BBAN layout", entry.code));
        }
        let segment_sum: usize = entry.bban.iter().map(|(len, _)| len).sum();
        if segment_sum != entry.len - 4 {
            return Err(format!(
                "registry entry {} layout covers {} chars, expected {}",
                entry.code,
                segment_sum,
                entry.len - 4
            ));
        }
        if entry.bban.iter().any(|(len, _)| *len == 0) {
            return Err(format!("registry entry {} has an empty run", entry.code));
        }
    }
    for window in SPECS.windows(2) {
        if window[0].code >= window[1].code {
            return Err(format!(
                "registry not sorted: {} >= {}",
                window[0].code, window[1].code
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_lengths() {
        assert_eq!(lookup("DE").map(|spec| spec.len), Some(22));
        assert_eq!(lookup("FR").map(|spec| spec.len), Some(27));
        assert_eq!(lookup("GB").map(|spec| spec.len), Some(22));
        assert_eq!(lookup("NO").map(|spec| spec.len), Some(15));
        assert_eq!(lookup("LC").map(|spec| spec.len), Some(32));
    }

    #[test]
    fn unknown_codes() {
        assert!(lookup("ZZ").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("D").is_none());
        assert!(lookup("de").is_none());
    }

    #[test]
    fn table_passes_self_check() {
        verify().expect("registry self-check");
    }

    #[test]
    fn table_is_sorted() {
        for window in SPECS.windows(2) {
            assert!(
                window[0].code < window[1].code,
                "registry not sorted: {} >= {}",
                window[0].code,
                window[1].code
            );
        }
    }

    #[test]
    fn layout_notation() {
        assert_eq!(lookup("GB").unwrap().layout(), "4a14n");
        assert_eq!(lookup("DE").unwrap().layout(), "18n");
        assert_eq!(lookup("FR").unwrap().layout(), "10n11c2n");
    }
}
