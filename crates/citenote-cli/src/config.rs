//! Configuration for the citenote CLI
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/citenote/config.toml` on Linux):
//!
//! ```toml
//! translation = "nasb"
//! link_verses = true
//! clean_formatting = true
//! link_base_url = "https://ref.ly"
//!
//! [translations]
//! leb = "leb"
//! nasb = "nasb2020"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use citenote_verses::{VerseLinkConfig, DEFAULT_BASE_URL, DEFAULT_TRANSLATION};
use serde::{Deserialize, Serialize};

/// Errors that can occur when loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitenoteConfig {
    /// Preferred translation abbreviation for verse links
    pub translation: String,
    /// Rewrite scripture references in the quote as links
    pub link_verses: bool,
    /// Convert `__x__` / `_x_` markup in the quote
    pub clean_formatting: bool,
    /// Verse link target prefix
    pub link_base_url: String,
    /// Extra translation abbreviation → version code entries
    pub translations: HashMap<String, String>,
}

impl Default for CitenoteConfig {
    fn default() -> Self {
        Self {
            translation: DEFAULT_TRANSLATION.to_string(),
            link_verses: true,
            clean_formatting: true,
            link_base_url: DEFAULT_BASE_URL.to_string(),
            translations: HashMap::new(),
        }
    }
}

impl CitenoteConfig {
    /// Settings for the verse linker
    pub fn verse_link_config(&self) -> VerseLinkConfig {
        VerseLinkConfig {
            translation: self.translation.clone(),
            base_url: self.link_base_url.clone(),
            translation_overrides: self.translations.clone(),
        }
    }
}

/// `<config dir>/citenote/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("citenote").join("config.toml"))
}

/// Load a config file
pub fn load_config(path: &Path) -> Result<CitenoteConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load an explicitly given config, or the default one if it exists
///
/// An explicit path must exist; a missing default file means defaults.
pub fn load_config_or_default(explicit: Option<&Path>) -> Result<CitenoteConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!("Loading config from {:?}", path);
            load_config(&path)
        }
        _ => Ok(CitenoteConfig::default()),
    }
}
