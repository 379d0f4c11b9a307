//! Clipboard parsing for quotes copied out of a reference manager
//!
//! Copying a passage with "Copy with citation" produces the quoted prose
//! followed by a BibTeX-style record. This crate splits that text apart:
//! - Main quote text, with any embedded resource link removed
//! - The bibliographic record, with its `pages` field stripped
//! - The page value that was stripped
//!
//! The standalone extractors (cite key, title, pages, trailing page markers,
//! underscore markup) work on their own and never touch storage.

mod cite_key;
mod clipboard;
mod error;
mod fields;
mod format;
mod page;

pub use cite_key::{extract_cite_key, sanitize_cite_key};
pub use clipboard::{merge_rich, parse, parse_with_rich, ParsedClipboard};
pub use error::ClipError;
pub use fields::{
    extract_book_title, extract_field, extract_pages_from_bibtex, strip_pages_field,
    CitationRecord,
};
pub use format::clean_formatted_text;
pub use page::{extract_page_number, PageExtraction};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
