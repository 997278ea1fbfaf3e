//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2022 per-day runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code 2022 solvers day by day", version)]
pub struct Args {
    /// Days to run, in order (duplicates are ignored)
    #[arg(required = true, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub days: Vec<u8>,

    /// Run against the example fixtures only
    #[arg(short = 'x', long)]
    pub example: bool,

    /// Run against the real puzzle input only
    #[arg(short, long)]
    pub real: bool,

    /// Cross-check each day against its golf variant
    #[arg(short, long)]
    pub golf: bool,

    /// Directory holding the `day_NN` folders
    #[arg(long, default_value = "days")]
    pub root: PathBuf,

    /// File containing the adventofcode.com session cookie
    #[arg(long, default_value = "session_cookie.txt")]
    pub session_file: PathBuf,

    /// Event year used when downloading inputs
    #[arg(long, default_value_t = 2022)]
    pub year: u16,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
