//! Scripture reference linking
//!
//! Finds references such as `John 3:16`, `1 Cor. 13:4-7` or `II Kings 2:11`
//! in free text and rewrites them as Markdown links to the reference
//! service (`https://ref.ly/Jn3.16;esv`).
//!
//! - `books`: book name → canonical book code table
//! - `translations`: translation abbreviation → service version code
//! - `linker`: the scan-and-replace pass

pub mod books;
pub mod config;
pub mod linker;
pub mod translations;

pub use books::{book_code, normalize_book_token};
pub use config::{VerseLinkConfig, DEFAULT_BASE_URL, DEFAULT_TRANSLATION};
pub use linker::{find_references, link_verses, VerseLinker, VerseReference};
pub use translations::translation_code;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
