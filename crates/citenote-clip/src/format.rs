//! Underscore markup normalization
//!
//! PDF annotations exported by the reference manager mark superscripts with
//! `__x__` and emphasis with `_x_`. Notes use `<sup>x</sup>` and `*x*`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Superscripts usually hang off a word (footnote markers), so no boundary here
    static ref SUPERSCRIPT_REGEX: Regex = Regex::new(r"__(?P<inner>[^_\n]+?)__").unwrap();

    // `\b` treats `_` as a word character, so snake_case identifiers are left alone
    static ref ITALIC_REGEX: Regex = Regex::new(r"\b_(?P<inner>[^_\n]+?)_\b").unwrap();
}

/// Convert `__x__` to `<sup>x</sup>`, then `_x_` to `*x*`
///
/// Asterisk markup passes through untouched.
pub fn clean_formatted_text(text: &str) -> String {
    // Double markers first, or the italic rule eats their inner underscores
    let superscripted = SUPERSCRIPT_REGEX.replace_all(text, "<sup>${inner}</sup>");
    ITALIC_REGEX
        .replace_all(&superscripted, "*${inner}*")
        .into_owned()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn clean_formatted_text_ffi(text: String) -> String {
    clean_formatted_text(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_markup() {
        assert_eq!(
            clean_formatted_text("The _quick_ brown fox __jumps__ over the **lazy** dog."),
            "The *quick* brown fox <sup>jumps</sup> over the **lazy** dog."
        );
    }

    #[test]
    fn test_asterisks_untouched() {
        let text = "Already *italic* and **bold** text";
        assert_eq!(clean_formatted_text(text), text);
    }

    #[test]
    fn test_snake_case_untouched() {
        let text = "call some_function_name here";
        assert_eq!(clean_formatted_text(text), text);
    }

    #[test]
    fn test_multiword_spans() {
        assert_eq!(
            clean_formatted_text("_In the beginning_ was the Word"),
            "*In the beginning* was the Word"
        );
        assert_eq!(clean_formatted_text("x__2__ + y"), "x<sup>2</sup> + y");
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_formatted_text(""), "");
    }
}
