//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::day::Mode;
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Days to run, first occurrence order, no duplicates
    pub days: Vec<u8>,
    /// Modes to run for each day, example first
    pub modes: Vec<Mode>,
    /// Whether to cross-check golf variants
    pub golf: bool,
    /// Folder holding the `day_NN` folders
    pub root: PathBuf,
    /// Session cookie file
    pub session_file: PathBuf,
    /// Event year for downloads
    pub year: u16,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        Config {
            days: args.days.into_iter().unique().collect(),
            modes: select_modes(args.example, args.real),
            golf: args.golf,
            root: expand_tilde(&args.root),
            session_file: expand_tilde(&args.session_file),
            year: args.year,
            quiet: args.quiet,
        }
    }
}

/// `-x` alone runs examples, `-r` alone runs real inputs, anything else runs both
fn select_modes(example: bool, real: bool) -> Vec<Mode> {
    match (example, real) {
        (true, false) => vec![Mode::Example],
        (false, true) => vec![Mode::Real],
        _ => vec![Mode::Example, Mode::Real],
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
