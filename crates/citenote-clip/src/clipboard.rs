//! Splitting clipboard text into quote, record and page
//!
//! The split point is the last whitespace run before an `@type{` marker.
//! Quotes may span several lines and may even contain `@word{` themselves,
//! so the first newline is not a reliable boundary; the rightmost marker is.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::fields::{extract_pages_from_bibtex, strip_pages_field};

lazy_static! {
    static ref CITATION_BOUNDARY_REGEX: Regex = Regex::new(r"\s+@\w+\{").unwrap();

    // https://ref.ly/logosres/systheo?ref=Page.p+123
    // zotero://select/library/items/ABCD1234, zotero://open-pdf/library/items/ABCD1234?page=3
    static ref RESOURCE_LINK_REGEX: Regex = Regex::new(
        r#"https://ref\.ly/logosres/[^\s(){}<>"']+|zotero://[A-Za-z-]+/[^\s(){}\[\]<>"']+"#
    ).unwrap();
}

/// Clipboard contents split into their parts
///
/// All strings are trimmed. When the clipboard held no citation marker,
/// `bibliographic_record` is empty and `page` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct ParsedClipboard {
    /// Quoted prose, without any embedded resource link
    pub main_text: String,
    /// Citation record with its `pages` field removed
    pub bibliographic_record: String,
    /// Raw `pages` value as found in the record
    pub page: Option<String>,
    /// Resource link (`https://ref.ly/logosres/...` or `zotero://...`)
    /// found anywhere in the clipboard
    pub resource_link: Option<String>,
}

impl ParsedClipboard {
    pub fn has_record(&self) -> bool {
        !self.bibliographic_record.is_empty()
    }
}

/// Parse raw clipboard text
pub fn parse(clipboard: &str) -> ParsedClipboard {
    let input = clipboard.trim();
    let (main_segment, record_segment) = split_at_citation(input);

    let resource_link = find_resource_link(input);
    let main_text = match resource_link.as_deref() {
        Some(link) if main_segment.contains(link) => strip_resource_link(main_segment, link),
        _ => main_segment.to_string(),
    };

    let page = extract_pages_from_bibtex(record_segment);
    if page.is_some() {
        tracing::trace!(page = page.as_deref(), "stripping pages field from record");
    }
    let bibliographic_record = strip_pages_field(record_segment);

    ParsedClipboard {
        main_text: main_text.trim().to_string(),
        bibliographic_record: bibliographic_record.trim().to_string(),
        page,
        resource_link,
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn parse_ffi(clipboard: String) -> ParsedClipboard {
    parse(&clipboard)
}

/// Parse the plain-text clipboard and, when present, its HTML-derived
/// Markdown rendering, then merge the two with [`merge_rich`]
pub fn parse_with_rich(plain: &str, rich: Option<&str>) -> ParsedClipboard {
    let plain = parse(plain);
    match rich {
        Some(rich) if !rich.trim().is_empty() => merge_rich(plain, parse(rich)),
        _ => plain,
    }
}

/// Merge a plain-text parse with a parse of the rich rendering
///
/// The rich quote wins when it has one, since it keeps emphasis and
/// superscripts. Record, page and link come from the plain parse and fall
/// back to the rich one.
pub fn merge_rich(plain: ParsedClipboard, rich: ParsedClipboard) -> ParsedClipboard {
    let main_text = if rich.main_text.is_empty() {
        plain.main_text
    } else {
        rich.main_text
    };
    let bibliographic_record = if plain.bibliographic_record.is_empty() {
        rich.bibliographic_record
    } else {
        plain.bibliographic_record
    };

    ParsedClipboard {
        main_text,
        bibliographic_record,
        page: plain.page.or(rich.page),
        resource_link: plain.resource_link.or(rich.resource_link),
    }
}

/// Returns `(main, record)` segments of an already trimmed input
fn split_at_citation(input: &str) -> (&str, &str) {
    if input.starts_with('@') {
        return ("", input);
    }

    match CITATION_BOUNDARY_REGEX.find_iter(input).last() {
        Some(boundary) => {
            tracing::debug!(offset = boundary.start(), "citation marker found");
            let record = input[boundary.start()..].trim_start();
            (&input[..boundary.start()], record)
        }
        None => {
            tracing::debug!("no citation marker in clipboard");
            (input, "")
        }
    }
}

fn find_resource_link(input: &str) -> Option<String> {
    RESOURCE_LINK_REGEX.find(input).map(|m| {
        m.as_str()
            .trim_end_matches(['.', ',', ';', ':'])
            .to_string()
    })
}

/// Remove `link` from `text`, together with a `(Resource Link: ...)` wrapper
fn strip_resource_link(text: &str, link: &str) -> String {
    let wrapper = format!(r"(?i)\(\s*resource link:\s*{}\s*\)", regex::escape(link));
    match Regex::new(&wrapper) {
        Ok(re) if re.is_match(text) => re.replace_all(text, "").into_owned(),
        _ => text.replace(link, ""),
    }
}
