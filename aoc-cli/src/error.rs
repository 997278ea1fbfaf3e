//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
///
/// Every variant is fatal: the run stops and the process exits with 1.
/// Mismatches and solver failures are reported instead, see `executor`.
#[derive(Error, Debug)]
pub enum CliError {
    /// Day folder not found under the root
    #[error("Day {day} does not exist: {}", path.display())]
    MissingDay { day: u8, path: PathBuf },

    /// Example mode without a single fixture
    #[error("No example input for day {day}: {} not found", path.display())]
    MissingFixture { day: u8, path: PathBuf },

    /// Session cookie file missing, unreadable or empty
    #[error("Session cookie unavailable ({}): {reason}", path.display())]
    Credential { path: PathBuf, reason: String },

    /// Downloading a real input failed
    #[error("Failed to fetch input for day {day}: {source}")]
    Fetch {
        day: u8,
        #[source]
        source: aoc_http_client::AocError,
    },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Result store error
    #[error("Result store error: {0}")]
    Store(#[from] StoreError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

/// Input cache errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// Reading or writing a cached input failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing an expectation file failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Diagnostics could not be serialized
    #[error("{}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
