//! Cite key extraction
//!
//! Pulls the identifier out of a record header (`@book{smith_2020, ...`)
//! and sanitizes it into a key that is safe to use as a note file name.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ClipError;

lazy_static! {
    // @<type>{<identifier>,
    static ref CITE_KEY_HEADER_REGEX: Regex = Regex::new(r"^@\w+\{(?P<key>[^,]*),").unwrap();

    // Underscores count as separators even though `\w` includes them
    static ref SEPARATOR_REGEX: Regex = Regex::new(r"[_\W]+").unwrap();

    static ref REPEATED_HYPHEN_REGEX: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Extract and sanitize the cite key from a record header
///
/// Fails with [`ClipError::MissingCiteKey`] when the record does not begin
/// with `@type{identifier,` or when the identifier has no usable characters.
pub fn extract_cite_key(record: &str) -> Result<String, ClipError> {
    let raw = CITE_KEY_HEADER_REGEX
        .captures(record.trim_start())
        .and_then(|cap| cap.name("key"))
        .ok_or(ClipError::MissingCiteKey)?;

    let key = sanitize_cite_key(raw.as_str());
    if key.is_empty() {
        tracing::debug!(raw = raw.as_str(), "cite key sanitized to nothing");
        return Err(ClipError::MissingCiteKey);
    }
    Ok(key)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_cite_key_ffi(record: String) -> Result<String, ClipError> {
    extract_cite_key(&record)
}

/// Sanitize a raw identifier into hyphen-separated alphanumerics
///
/// Runs of underscores and non-word characters become a single hyphen and
/// the result never starts or ends with one. Sanitizing twice is a no-op.
pub fn sanitize_cite_key(raw: &str) -> String {
    let hyphenated = SEPARATOR_REGEX.replace_all(raw, "-");
    let collapsed = REPEATED_HYPHEN_REGEX.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn sanitize_cite_key_ffi(raw: String) -> String {
    sanitize_cite_key(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_key() {
        let key = extract_cite_key("@book{smith2020,\n  title = {Test}\n}").unwrap();
        assert_eq!(key, "smith2020");
    }

    #[test]
    fn test_extract_key_with_underscores() {
        let key = extract_cite_key("@book{author_name__2020, title = {Test}}").unwrap();
        assert_eq!(key, "author-name-2020");
    }

    #[test]
    fn test_extract_key_ignores_leading_whitespace() {
        let key = extract_cite_key("\n  @article{Doe:2019, title = {X}}").unwrap();
        assert_eq!(key, "Doe-2019");
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            extract_cite_key("no record here"),
            Err(ClipError::MissingCiteKey)
        );
        assert_eq!(
            extract_cite_key("@book{no_comma}"),
            Err(ClipError::MissingCiteKey)
        );
        assert_eq!(extract_cite_key(""), Err(ClipError::MissingCiteKey));
    }

    #[test]
    fn test_key_of_only_separators() {
        assert_eq!(
            extract_cite_key("@book{__--__, title = {X}}"),
            Err(ClipError::MissingCiteKey)
        );
    }

    #[test]
    fn test_sanitize_strips_edges() {
        assert_eq!(sanitize_cite_key("_leading_and_trailing_"), "leading-and-trailing");
        assert_eq!(sanitize_cite_key("a -- b"), "a-b");
        assert_eq!(sanitize_cite_key("Müller.2021"), "Müller-2021");
    }

    #[test]
    fn test_sanitize_idempotent() {
        let once = sanitize_cite_key("some__weird..key!!2020");
        assert_eq!(sanitize_cite_key(&once), once);
    }
}
