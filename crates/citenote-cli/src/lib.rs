//! citenote command-line support
//!
//! Loads configuration and runs the clipboard → note pipeline:
//! parse, clean underscore markup, link scripture references.

pub mod config;
pub mod report;

pub use config::{
    default_config_path, load_config, load_config_or_default, CitenoteConfig, ConfigError,
};
pub use report::{build_report, NoteReport};
