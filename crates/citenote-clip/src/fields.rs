//! Field extraction from a single citation record
//!
//! These helpers use regular expressions rather than a full BibTeX grammar.
//! Values are expected to be flat: `{...}` values with nested braces are
//! outside what they handle and will be cut at the first closing brace.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cite_key::extract_cite_key;
use crate::error::ClipError;

lazy_static! {
    // pages = {12-14} | pages = "12-14" | pages = '12-14'
    static ref PAGES_REGEX: Regex = Regex::new(
        r#"(?i)\bpages\s*=\s*(?:\{(?P<brace>[^}]*)\}|"(?P<dquote>[^"]*)"|'(?P<squote>[^']*)')"#
    ).unwrap();

    // The whole field line, with its trailing comma and newline
    static ref PAGES_FIELD_REGEX: Regex = Regex::new(
        r#"(?i)[ \t]*\bpages\s*=\s*(?:\{[^}]*\}|"[^"]*"|'[^']*')[ \t]*,?[ \t]*(?:\r?\n)?"#
    ).unwrap();

    static ref TITLE_REGEX: Regex = Regex::new(r"(?i)\btitle\s*=\s*\{(?P<value>[^}]*)\}").unwrap();

    static ref ENTRY_TYPE_REGEX: Regex = Regex::new(r"^@(?P<kind>\w+)\{").unwrap();
}

/// Value of the first brace- or quote-delimited capture group that matched
fn delimited_value(cap: &regex::Captures<'_>) -> Option<String> {
    ["brace", "dquote", "squote"]
        .iter()
        .find_map(|name| cap.name(name))
        .map(|m| m.as_str().trim().to_string())
}

/// Get the `pages` field value from a record (case-insensitive key)
pub fn extract_pages_from_bibtex(record: &str) -> Option<String> {
    PAGES_REGEX
        .captures(record)
        .and_then(|cap| delimited_value(&cap))
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_pages_from_bibtex_ffi(record: String) -> Option<String> {
    extract_pages_from_bibtex(&record)
}

/// Remove every `pages` field from a record, including its trailing comma
/// and line break. Records without one come back unchanged.
pub fn strip_pages_field(record: &str) -> String {
    PAGES_FIELD_REGEX.replace_all(record, "").into_owned()
}

/// Get the brace-delimited `title` field value (case-insensitive key)
///
/// `booktitle` is not matched.
pub fn extract_book_title(record: &str) -> Option<String> {
    TITLE_REGEX
        .captures(record)
        .and_then(|cap| cap.name("value"))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_book_title_ffi(record: String) -> Option<String> {
    extract_book_title(&record)
}

/// Get any field by key (case-insensitive), brace- or quote-delimited
pub fn extract_field(record: &str, key: &str) -> Option<String> {
    let pattern = format!(
        r#"(?i)\b{}\s*=\s*(?:\{{(?P<brace>[^}}]*)\}}|"(?P<dquote>[^"]*)"|'(?P<squote>[^']*)')"#,
        regex::escape(key)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(record).and_then(|cap| delimited_value(&cap))
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_field_ffi(record: String, key: String) -> Option<String> {
    extract_field(&record, &key)
}

/// Read-only view over one cleaned citation record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CitationRecord {
    pub raw: String,
}

impl CitationRecord {
    /// Wrap a record string
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Entry type in lowercase (`book`, `article`, ...)
    pub fn entry_type(&self) -> Option<String> {
        ENTRY_TYPE_REGEX
            .captures(self.raw.trim_start())
            .and_then(|cap| cap.name("kind"))
            .map(|m| m.as_str().to_lowercase())
    }

    pub fn cite_key(&self) -> Result<String, ClipError> {
        extract_cite_key(&self.raw)
    }

    pub fn title(&self) -> Option<String> {
        extract_book_title(&self.raw)
    }

    pub fn author(&self) -> Option<String> {
        extract_field(&self.raw, "author")
    }

    pub fn year(&self) -> Option<String> {
        extract_field(&self.raw, "year")
    }

    pub fn pages(&self) -> Option<String> {
        extract_pages_from_bibtex(&self.raw)
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }
}
