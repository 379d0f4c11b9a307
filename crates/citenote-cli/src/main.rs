//! citenote binary
//!
//! Reads copied text from stdin (or `--input`) and prints the parsed note
//! parts as JSON, the cite key, or the verse-linked text.

use std::io::Read;
use std::path::{Path, PathBuf};

use citenote_cli::{build_report, load_config_or_default};
use citenote_clip::{extract_cite_key, parse};
use citenote_verses::VerseLinker;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "citenote", version, about = "Turn copied quotes and citations into note parts")]
struct Cli {
    /// Config file (defaults to <config dir>/citenote/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split clipboard text into quote, record and page
    Parse {
        /// Read clipboard text from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// HTML-derived Markdown rendering of the same copy
        #[arg(long)]
        rich: Option<PathBuf>,
        /// Keep underscore markup as-is
        #[arg(long)]
        no_clean: bool,
        /// Do not link scripture references
        #[arg(long)]
        no_verses: bool,
        /// Translation for verse links
        #[arg(long)]
        translation: Option<String>,
    },
    /// Print the sanitized cite key of the copied record
    CiteKey {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Link scripture references in text
    Link {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        translation: Option<String>,
    },
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Parse {
            input,
            rich,
            no_clean,
            no_verses,
            translation,
        } => {
            let plain = read_input(input.as_deref())?;
            let rich = rich.as_deref().map(std::fs::read_to_string).transpose()?;

            if let Some(translation) = translation {
                config.translation = translation;
            }
            config.clean_formatting &= !no_clean;
            config.link_verses &= !no_verses;

            let report = build_report(&plain, rich.as_deref(), &config);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::CiteKey { input } => {
            let text = read_input(input.as_deref())?;
            let parsed = parse(&text);
            let key = extract_cite_key(&parsed.bibliographic_record)?;
            println!("{}", key);
        }
        Command::Link { input, translation } => {
            let text = read_input(input.as_deref())?;
            if let Some(translation) = translation {
                config.translation = translation;
            }
            let linker = VerseLinker::new(&config.verse_link_config());
            print!("{}", linker.link(&text));
        }
    }

    Ok(())
}
