//! Book name lookup
//!
//! Maps normalized book names and common abbreviations to the book codes
//! used by the reference service. Keys are lowercase with no whitespace and
//! a numeric prefix (`1john`, `2cor`).

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Dictionary mapping book tokens to book codes.
    static ref BOOK_CODES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        // Law
        m.insert("genesis", "Ge");
        m.insert("gen", "Ge");
        m.insert("ge", "Ge");
        m.insert("gn", "Ge");
        m.insert("exodus", "Ex");
        m.insert("exod", "Ex");
        m.insert("exo", "Ex");
        m.insert("ex", "Ex");
        m.insert("leviticus", "Le");
        m.insert("lev", "Le");
        m.insert("lv", "Le");
        m.insert("numbers", "Nu");
        m.insert("num", "Nu");
        m.insert("nu", "Nu");
        m.insert("nm", "Nu");
        m.insert("deuteronomy", "Dt");
        m.insert("deut", "Dt");
        m.insert("dt", "Dt");

        // History
        m.insert("joshua", "Jos");
        m.insert("josh", "Jos");
        m.insert("jos", "Jos");
        m.insert("judges", "Jdg");
        m.insert("judg", "Jdg");
        m.insert("jdg", "Jdg");
        m.insert("ruth", "Ru");
        m.insert("ru", "Ru");
        m.insert("1samuel", "1Sa");
        m.insert("1sam", "1Sa");
        m.insert("1sa", "1Sa");
        m.insert("2samuel", "2Sa");
        m.insert("2sam", "2Sa");
        m.insert("2sa", "2Sa");
        m.insert("1kings", "1Ki");
        m.insert("1kgs", "1Ki");
        m.insert("1ki", "1Ki");
        m.insert("2kings", "2Ki");
        m.insert("2kgs", "2Ki");
        m.insert("2ki", "2Ki");
        m.insert("1chronicles", "1Ch");
        m.insert("1chron", "1Ch");
        m.insert("1chr", "1Ch");
        m.insert("1ch", "1Ch");
        m.insert("2chronicles", "2Ch");
        m.insert("2chron", "2Ch");
        m.insert("2chr", "2Ch");
        m.insert("2ch", "2Ch");
        m.insert("ezra", "Ezr");
        m.insert("ezr", "Ezr");
        m.insert("nehemiah", "Ne");
        m.insert("neh", "Ne");
        m.insert("esther", "Es");
        m.insert("esth", "Es");

        // Poetry and Wisdom
        m.insert("job", "Job");
        m.insert("psalms", "Ps");
        m.insert("psalm", "Ps");
        m.insert("psa", "Ps");
        m.insert("pss", "Ps");
        m.insert("ps", "Ps");
        m.insert("proverbs", "Pr");
        m.insert("prov", "Pr");
        m.insert("prv", "Pr");
        m.insert("pr", "Pr");
        m.insert("ecclesiastes", "Ec");
        m.insert("eccles", "Ec");
        m.insert("eccl", "Ec");
        m.insert("ecc", "Ec");
        m.insert("qoheleth", "Ec");
        m.insert("song", "So");
        m.insert("songs", "So");
        m.insert("canticles", "So");

        // Major Prophets
        m.insert("isaiah", "Is");
        m.insert("isa", "Is");
        m.insert("jeremiah", "Je");
        m.insert("jer", "Je");
        m.insert("lamentations", "La");
        m.insert("lam", "La");
        m.insert("ezekiel", "Eze");
        m.insert("ezek", "Eze");
        m.insert("eze", "Eze");
        m.insert("daniel", "Da");
        m.insert("dan", "Da");

        // Minor Prophets
        m.insert("hosea", "Ho");
        m.insert("hos", "Ho");
        m.insert("joel", "Joe");
        m.insert("amos", "Am");
        m.insert("obadiah", "Ob");
        m.insert("obad", "Ob");
        m.insert("jonah", "Jon");
        m.insert("jon", "Jon");
        m.insert("micah", "Mic");
        m.insert("mic", "Mic");
        m.insert("nahum", "Na");
        m.insert("nah", "Na");
        m.insert("habakkuk", "Hab");
        m.insert("hab", "Hab");
        m.insert("zephaniah", "Zep");
        m.insert("zeph", "Zep");
        m.insert("zep", "Zep");
        m.insert("haggai", "Hag");
        m.insert("hag", "Hag");
        m.insert("zechariah", "Zec");
        m.insert("zech", "Zec");
        m.insert("zec", "Zec");
        m.insert("malachi", "Mal");
        m.insert("mal", "Mal");

        // Gospels and Acts
        m.insert("matthew", "Mt");
        m.insert("matt", "Mt");
        m.insert("mt", "Mt");
        m.insert("mark", "Mk");
        m.insert("mrk", "Mk");
        m.insert("mk", "Mk");
        m.insert("luke", "Lk");
        m.insert("lk", "Lk");
        m.insert("john", "Jn");
        m.insert("jhn", "Jn");
        m.insert("jn", "Jn");
        m.insert("acts", "Ac");

        // Pauline Epistles
        m.insert("romans", "Ro");
        m.insert("rom", "Ro");
        m.insert("1corinthians", "1Co");
        m.insert("1cor", "1Co");
        m.insert("1co", "1Co");
        m.insert("2corinthians", "2Co");
        m.insert("2cor", "2Co");
        m.insert("2co", "2Co");
        m.insert("galatians", "Ga");
        m.insert("gal", "Ga");
        m.insert("ephesians", "Eph");
        m.insert("eph", "Eph");
        m.insert("philippians", "Php");
        m.insert("phil", "Php");
        m.insert("php", "Php");
        m.insert("colossians", "Col");
        m.insert("col", "Col");
        m.insert("1thessalonians", "1Th");
        m.insert("1thess", "1Th");
        m.insert("1th", "1Th");
        m.insert("2thessalonians", "2Th");
        m.insert("2thess", "2Th");
        m.insert("2th", "2Th");
        m.insert("1timothy", "1Ti");
        m.insert("1tim", "1Ti");
        m.insert("1ti", "1Ti");
        m.insert("2timothy", "2Ti");
        m.insert("2tim", "2Ti");
        m.insert("2ti", "2Ti");
        m.insert("titus", "Tt");
        m.insert("tit", "Tt");
        m.insert("philemon", "Phm");
        m.insert("philem", "Phm");
        m.insert("phm", "Phm");

        // General Epistles and Revelation
        m.insert("hebrews", "Heb");
        m.insert("heb", "Heb");
        m.insert("james", "Jas");
        m.insert("jas", "Jas");
        m.insert("1peter", "1Pe");
        m.insert("1pet", "1Pe");
        m.insert("1pe", "1Pe");
        m.insert("2peter", "2Pe");
        m.insert("2pet", "2Pe");
        m.insert("2pe", "2Pe");
        m.insert("1john", "1Jn");
        m.insert("1jhn", "1Jn");
        m.insert("1jn", "1Jn");
        m.insert("2john", "2Jn");
        m.insert("2jhn", "2Jn");
        m.insert("2jn", "2Jn");
        m.insert("3john", "3Jn");
        m.insert("3jhn", "3Jn");
        m.insert("3jn", "3Jn");
        m.insert("jude", "Jud");
        m.insert("revelation", "Re");
        m.insert("revelations", "Re");
        m.insert("rev", "Re");

        m
    };
}

/// Roman prefixes, longest first so "iii" is never read as "ii" + "i"
const ROMAN_PREFIXES: [(&str, &str); 3] = [("iii", "3"), ("ii", "2"), ("i", "1")];

/// Look up the book code for a normalized token
pub fn book_code(token: &str) -> Option<&'static str> {
    BOOK_CODES.get(token).copied()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn book_code_ffi(token: String) -> Option<String> {
    book_code(&token).map(str::to_string)
}

/// Build the lookup token for a numeric or Roman `prefix` and a book `name`
///
/// `("II", "Kings")` → `2kings`, `("1 ", "John")` → `1john`. Only the prefix
/// is read as a numeral, so `Isaiah` stays `isaiah`.
pub fn normalize_book_token(prefix: &str, name: &str) -> String {
    let prefix: String = prefix
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let prefix = ROMAN_PREFIXES
        .iter()
        .find_map(|(roman, digit)| {
            prefix
                .strip_prefix(roman)
                .map(|rest| format!("{}{}", digit, rest))
        })
        .unwrap_or(prefix);

    let name: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();

    format!("{}{}", prefix, name)
}
