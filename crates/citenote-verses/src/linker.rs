//! Scripture reference detection and link rewriting

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::books::{book_code, normalize_book_token};
use crate::config::VerseLinkConfig;
use crate::translations::translation_code;

lazy_static! {
    // [1|2|3 | I|II|III ] Book[.] chapter:verse[-end]
    // A Roman prefix needs a space after it, otherwise "Isaiah" reads as "I saiah".
    // Prefixes never reach across a line break.
    static ref VERSE_REGEX: Regex = Regex::new(
        r"\b(?:(?P<num>[123])[ \t]*|(?P<roman>III|II|I)[ \t]+)?(?P<book>[A-Za-z]+)\.?\s+(?P<chapter>\d+):(?P<verse>\d+)(?:[-–](?P<end>\d+))?"
    ).unwrap();
}

/// A recognized scripture reference with its position in the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct VerseReference {
    /// The text as written (`1 Cor. 13:4-7`)
    pub matched: String,
    pub book_code: String,
    pub chapter: String,
    pub verse: String,
    pub end_verse: Option<String>,
    pub start_index: u32,
    pub end_index: u32,
}

impl VerseReference {
    /// Reference path in the service scheme: `Jn3.16`, `1Co13.4-7`
    pub fn path(&self) -> String {
        match &self.end_verse {
            Some(end) => format!(
                "{}{}.{}-{}",
                self.book_code, self.chapter, self.verse, end
            ),
            None => format!("{}{}.{}", self.book_code, self.chapter, self.verse),
        }
    }
}

/// Rewrites scripture references as Markdown links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseLinker {
    translation: String,
    base_url: String,
}

impl Default for VerseLinker {
    fn default() -> Self {
        Self::new(&VerseLinkConfig::default())
    }
}

impl VerseLinker {
    /// Build a linker, resolving the configured translation once
    ///
    /// Overrides are matched case-insensitively and win over the built-in
    /// table; anything unresolved is used as the version code verbatim.
    pub fn new(config: &VerseLinkConfig) -> Self {
        let wanted = config.translation.trim().to_lowercase();
        let translation = config
            .translation_overrides
            .iter()
            .find(|(abbrev, _)| abbrev.trim().to_lowercase() == wanted)
            .map(|(_, code)| code.clone())
            .unwrap_or_else(|| translation_code(&config.translation));

        Self {
            translation,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolved version code used in link targets
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Link target for one reference
    pub fn url_for(&self, reference: &VerseReference) -> String {
        format!("{}/{};{}", self.base_url, reference.path(), self.translation)
    }

    /// Replace every recognized reference in `text` with a Markdown link
    ///
    /// Unrecognized book names are left exactly as written, as is a leading
    /// number that turned out not to belong to the book name.
    pub fn link(&self, text: &str) -> String {
        VERSE_REGEX
            .replace_all(text, |caps: &Captures<'_>| match reference_from(caps) {
                Some(reference) => {
                    let whole = &caps[0];
                    let lead = &whole[..whole.len() - reference.matched.len()];
                    format!(
                        "{}[{}]({})",
                        lead,
                        reference.matched,
                        self.url_for(&reference)
                    )
                }
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Link scripture references in `text` using the given translation
/// (see [`crate::DEFAULT_TRANSLATION`] for the usual choice)
pub fn link_verses(text: &str, translation: &str) -> String {
    VerseLinker::new(&VerseLinkConfig::with_translation(translation)).link(text)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn link_verses_ffi(text: String, translation: Option<String>) -> String {
    link_verses(
        &text,
        translation.as_deref().unwrap_or(crate::DEFAULT_TRANSLATION),
    )
}

/// Recognized references in `text`, in order of appearance
pub fn find_references(text: &str) -> Vec<VerseReference> {
    VERSE_REGEX
        .captures_iter(text)
        .filter_map(|caps| reference_from(&caps))
        .collect()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn find_references_ffi(text: String) -> Vec<VerseReference> {
    find_references(&text)
}

fn reference_from(caps: &Captures<'_>) -> Option<VerseReference> {
    let whole = caps.get(0)?;
    let book = caps.name("book")?;
    let prefix = caps.name("num").or_else(|| caps.name("roman"));

    // "step 2 Genesis 1:1": the number is not part of the book name
    let (start, code) = match prefix.and_then(|p| lookup_book(p.as_str(), book.as_str())) {
        Some(code) => (whole.start(), code),
        None => (book.start(), lookup_book("", book.as_str())?),
    };

    let (Some(start_index), Some(end_index)) = (ffi_offset(start), ffi_offset(whole.end()))
    else {
        tracing::warn!(start, "reference offset does not fit in u32, skipping");
        return None;
    };

    Some(VerseReference {
        matched: whole.as_str()[start - whole.start()..].to_string(),
        book_code: code.to_string(),
        chapter: caps.name("chapter")?.as_str().to_string(),
        verse: caps.name("verse")?.as_str().to_string(),
        end_verse: caps.name("end").map(|m| m.as_str().to_string()),
        start_index,
        end_index,
    })
}

/// Positions are u32 across the FFI boundary
fn ffi_offset(offset: usize) -> Option<u32> {
    u32::try_from(offset).ok()
}

fn lookup_book(prefix: &str, book: &str) -> Option<&'static str> {
    let token = normalize_book_token(prefix, book);
    let code = book_code(&token);
    if code.is_none() {
        tracing::trace!(token = token.as_str(), "not a known book name");
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TRANSLATION;
    use std::collections::HashMap;

    #[test]
    fn test_link_single_reference() {
        assert_eq!(
            link_verses("John 3:16", DEFAULT_TRANSLATION),
            "[John 3:16](https://ref.ly/Jn3.16;esv)"
        );
    }

    #[test]
    fn test_link_range_and_prefix() {
        assert_eq!(
            link_verses("Read 1 Cor. 13:4-7 today.", "nasb"),
            "Read [1 Cor. 13:4-7](https://ref.ly/1Co13.4-7;nasb95) today."
        );
    }

    #[test]
    fn test_link_roman_prefix() {
        assert_eq!(
            link_verses("II Kings 2:11", "esv"),
            "[II Kings 2:11](https://ref.ly/2Ki2.11;esv)"
        );
        assert_eq!(
            link_verses("III John 1:4", "esv"),
            "[III John 1:4](https://ref.ly/3Jn1.4;esv)"
        );
    }

    #[test]
    fn test_book_starting_with_i() {
        assert_eq!(
            link_verses("Isaiah 40:31", "esv"),
            "[Isaiah 40:31](https://ref.ly/Is40.31;esv)"
        );
    }

    #[test]
    fn test_unknown_book_left_verbatim() {
        let text = "Meeting at Room 3:15 later";
        assert_eq!(link_verses(text, "esv"), text);
    }

    #[test]
    fn test_overrides_win() {
        let mut overrides = HashMap::new();
        overrides.insert("ESV".to_string(), "esv2016".to_string());
        let linker = VerseLinker::new(&VerseLinkConfig {
            translation: "esv".to_string(),
            base_url: "https://example.org/".to_string(),
            translation_overrides: overrides,
        });

        assert_eq!(linker.translation(), "esv2016");
        assert_eq!(
            linker.link("Ps 23:1"),
            "[Ps 23:1](https://example.org/Ps23.1;esv2016)"
        );
    }

    #[test]
    fn test_find_references_positions() {
        let refs = find_references("See Gen 1:1 and Foo 2:3 and Rev 22:20–21.");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].book_code, "Ge");
        assert_eq!(refs[0].start_index, 4);
        assert_eq!(refs[0].path(), "Ge1.1");
        assert_eq!(refs[1].matched, "Rev 22:20–21");
        assert_eq!(refs[1].end_verse, Some("21".to_string()));
        assert_eq!(refs[1].path(), "Re22.20-21");
    }

    #[test]
    fn test_number_on_previous_line_is_not_a_prefix() {
        assert_eq!(
            link_verses("Point 3\nJohn 3:16 says", "esv"),
            "Point 3\n[John 3:16](https://ref.ly/Jn3.16;esv) says"
        );
        assert_eq!(
            link_verses("Part II\nJohn 3:16", "esv"),
            "Part II\n[John 3:16](https://ref.ly/Jn3.16;esv)"
        );
    }

    #[test]
    fn test_stray_number_before_book_is_left_outside_link() {
        assert_eq!(
            link_verses("step 2 Genesis 1:1", "esv"),
            "step 2 [Genesis 1:1](https://ref.ly/Ge1.1;esv)"
        );

        let refs = find_references("step 2 Genesis 1:1");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].matched, "Genesis 1:1");
        assert_eq!(refs[0].start_index, 7);
        assert_eq!(refs[0].end_index, 18);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_offsets_past_u32_are_rejected() {
        assert_eq!(ffi_offset(42), Some(42));
        assert_eq!(ffi_offset(u32::MAX as usize), Some(u32::MAX));
        assert_eq!(ffi_offset(u32::MAX as usize + 1), None);
    }

    #[test]
    fn test_default_linker() {
        assert_eq!(VerseLinker::default().translation(), "esv");
    }
}
