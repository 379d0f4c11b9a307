//! Trailing page marker detection
//!
//! Quotes often end with a page reference such as `(p. 42)`, `[pp. 12–14]`
//! or ` p 7.`; this module splits that marker off the text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // Anchored at the end of the text; `\b` keeps "step 12" from matching as "p 12"
    static ref TRAILING_PAGE_REGEX: Regex = Regex::new(
        r"(?i)[\[( ]?\b(?P<page>p{1,2}\.? ?\d+(?:[-–]\d+)?)[\])]?\.?$"
    ).unwrap();
}

/// Text with its trailing page marker removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct PageExtraction {
    pub cleaned_text: String,
    pub page: Option<String>,
}

/// Split a trailing page marker off `text`
///
/// The returned page keeps the marker as written (`p. 42`, `pp. 3–5`)
/// without the surrounding brackets.
pub fn extract_page_number(text: &str) -> PageExtraction {
    let trimmed = text.trim();

    match TRAILING_PAGE_REGEX.captures(trimmed) {
        Some(cap) => {
            let (Some(whole), Some(page)) = (cap.get(0), cap.name("page")) else {
                return unchanged(trimmed);
            };
            PageExtraction {
                cleaned_text: trimmed[..whole.start()].trim().to_string(),
                page: Some(page.as_str().to_string()),
            }
        }
        None => unchanged(trimmed),
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_page_number_ffi(text: String) -> PageExtraction {
    extract_page_number(&text)
}

fn unchanged(trimmed: &str) -> PageExtraction {
    PageExtraction {
        cleaned_text: trimmed.to_string(),
        page: None,
    }
}
