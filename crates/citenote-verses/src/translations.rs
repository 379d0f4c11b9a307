//! Translation abbreviation lookup

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Dictionary mapping translation abbreviations to service version codes.
    static ref TRANSLATION_CODES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        m.insert("esv", "esv");
        m.insert("kjv", "kjv1900");
        m.insert("nkjv", "nkjv");
        m.insert("niv", "niv2011");
        m.insert("nasb", "nasb95");
        m.insert("nasb95", "nasb95");
        m.insert("nasb20", "nasb2020");
        m.insert("lsb", "lsb");
        m.insert("csb", "csb");
        m.insert("hcsb", "hcsb");
        m.insert("nlt", "nlt");
        m.insert("net", "net");
        m.insert("nrsv", "nrsv");
        m.insert("rsv", "rsv");
        m.insert("asv", "asv");

        m
    };
}

/// Resolve a translation abbreviation (case-insensitive)
///
/// Unknown abbreviations come back unchanged so callers can pass a service
/// version code directly.
pub fn translation_code(abbrev: &str) -> String {
    TRANSLATION_CODES
        .get(abbrev.trim().to_lowercase().as_str())
        .map(|code| code.to_string())
        .unwrap_or_else(|| abbrev.to_string())
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn translation_code_ffi(abbrev: String) -> String {
    translation_code(&abbrev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(translation_code("esv"), "esv");
        assert_eq!(translation_code("nasb"), "nasb95");
        assert_eq!(translation_code("kjv"), "kjv1900");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(translation_code("ESV"), "esv");
        assert_eq!(translation_code("Niv"), "niv2011");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(translation_code("leb"), "leb");
        assert_eq!(translation_code("MyVersion"), "MyVersion");
    }
}
