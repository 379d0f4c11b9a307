//! Clipboard → note pipeline

use citenote_clip::{
    clean_formatted_text, extract_book_title, extract_cite_key, parse_with_rich, ParsedClipboard,
};
use citenote_verses::VerseLinker;
use serde::{Deserialize, Serialize};

use crate::config::CitenoteConfig;

/// Everything a note needs from one clipboard copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteReport {
    #[serde(flatten)]
    pub parsed: ParsedClipboard,
    /// Sanitized cite key, when the record has a usable header
    pub cite_key: Option<String>,
    pub title: Option<String>,
}

/// Parse clipboard text (and its rich rendering, if any) and post-process
/// the quote according to `config`
pub fn build_report(plain: &str, rich: Option<&str>, config: &CitenoteConfig) -> NoteReport {
    let mut parsed = parse_with_rich(plain, rich);

    if config.clean_formatting {
        parsed.main_text = clean_formatted_text(&parsed.main_text);
    }
    if config.link_verses {
        let linker = VerseLinker::new(&config.verse_link_config());
        parsed.main_text = linker.link(&parsed.main_text);
    }

    let cite_key = if parsed.has_record() {
        match extract_cite_key(&parsed.bibliographic_record) {
            Ok(key) => Some(key),
            Err(e) => {
                tracing::warn!("Record present but unusable: {}", e);
                None
            }
        }
    } else {
        None
    };
    let title = extract_book_title(&parsed.bibliographic_record);

    NoteReport {
        parsed,
        cite_key,
        title,
    }
}
