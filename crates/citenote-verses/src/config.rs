//! Linker configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Translation used when none is configured
pub const DEFAULT_TRANSLATION: &str = "esv";

/// Reference service that link targets point at
pub const DEFAULT_BASE_URL: &str = "https://ref.ly";

/// Settings for a [`crate::VerseLinker`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct VerseLinkConfig {
    /// Preferred translation abbreviation (`esv`, `nasb`, ...)
    pub translation: String,
    /// Link target prefix, without trailing slash
    pub base_url: String,
    /// Extra abbreviation → version code entries, checked before the built-in table
    pub translation_overrides: HashMap<String, String>,
}

impl Default for VerseLinkConfig {
    fn default() -> Self {
        Self {
            translation: DEFAULT_TRANSLATION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            translation_overrides: HashMap::new(),
        }
    }
}

impl VerseLinkConfig {
    /// Default settings with a different translation
    pub fn with_translation(translation: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            ..Self::default()
        }
    }
}
