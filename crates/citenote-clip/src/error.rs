//! Error types for clipboard parsing

/// Errors raised while reading a citation record.
///
/// Everything else in this crate is total: a missing title, page or marker
/// is reported as `None` or an empty string rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum ClipError {
    /// The record does not start with an `@type{key,` header
    #[error("No cite key found")]
    MissingCiteKey,
}
