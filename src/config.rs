//! Command-line and environment configuration

use clap::Parser;
use std::path::PathBuf;

use crate::model::{DEFAULT_MAX_SENTENCES, DEFAULT_WPM, MAX_WPM, MIN_WPM};

const DEFAULT_LOG_DIR: &str = ".logs";

/// Terminal speed reader.
///
/// Shows text one word at a time with the anchor letter pinned to the
/// centre of the screen.
#[derive(Parser, Debug)]
#[command(name = "staccato", version, about)]
pub struct Cli {
    /// Text or Markdown file to open (defaults to a bundled sample)
    pub file: Option<PathBuf>,

    /// Reading speed in words per minute
    #[arg(short, long, env = "STACCATO_WPM", default_value_t = DEFAULT_WPM)]
    pub wpm: u32,

    /// Number of sentences in the gist view
    #[arg(short, long, env = "STACCATO_BULLETS", default_value_t = DEFAULT_MAX_SENTENCES)]
    pub bullets: usize,

    /// Directory for log files
    #[arg(long, env = "STACCATO_LOG_DIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,
}

/// Validated settings the app starts with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub file: Option<PathBuf>,
    pub wpm: u32,
    pub summary_bullets: usize,
    pub log_dir: PathBuf,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            file: cli.file,
            wpm: cli.wpm.clamp(MIN_WPM, MAX_WPM),
            summary_bullets: cli.bullets.max(1),
            log_dir: cli.log_dir,
        }
    }
}

impl Settings {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }
}
