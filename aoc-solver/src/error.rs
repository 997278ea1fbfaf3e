//! Error types for the solver library

use crate::registry::Variant;
use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// The input source could not be read or rewound
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Invalid format error pointing at a 0-based line index
    pub fn at_line(index: usize, message: impl std::fmt::Display) -> Self {
        ParseError::InvalidFormat(format!("(line {}) {}", index + 1, message))
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a day-variant combination that already exists
    #[error("Duplicate {1} solver registration for day {0}")]
    DuplicateSolver(u8, Variant),
    /// Day outside of 1..=25
    #[error("Invalid day {0}: must be within 1..=25")]
    InvalidDay(u8),
}
