//! Day folders and run modes

use crate::error::CliError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which input a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Hand-written fixtures from the puzzle text
    Example,
    /// The personal puzzle input
    Real,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Example => "example",
            Mode::Real => "real",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padding flags apply to the name
        f.pad(self.name())
    }
}

/// A resolved puzzle day and its folder
///
/// Layout of `{root}/day_NN`:
/// - `input.txt`: cached real input
/// - `example_input.txt`, `example_input_2.txt`, ...: example fixtures
/// - `results.txt` / `example_results.txt`: expectations
/// - `diagnostics.json`: diagnostics of the last real run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    number: u8,
    path: PathBuf,
}

impl Day {
    /// Resolve a day number against the root folder; the folder must exist
    pub fn resolve(number: u8, root: &Path) -> Result<Self, CliError> {
        let path = root.join(format!("day_{:02}", number));
        if !path.is_dir() {
            return Err(CliError::MissingDay { day: number, path });
        }
        Ok(Self { number, path })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cache file for the real input
    pub fn input_path(&self) -> PathBuf {
        self.path.join("input.txt")
    }

    /// Example fixture `index` (1-based); the first one carries no suffix
    pub fn example_input_path(&self, index: usize) -> PathBuf {
        match index {
            0 | 1 => self.path.join("example_input.txt"),
            n => self.path.join(format!("example_input_{}.txt", n)),
        }
    }

    /// Expectation file for the mode
    pub fn results_path(&self, mode: Mode) -> PathBuf {
        match mode {
            Mode::Example => self.path.join("example_results.txt"),
            Mode::Real => self.path.join("results.txt"),
        }
    }

    pub fn diagnostics_path(&self) -> PathBuf {
        self.path.join("diagnostics.json")
    }
}
