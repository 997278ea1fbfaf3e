//! Advent of Code Solver Library
//!
//! The solver protocol shared by every day of the 2022 event: how a day parses
//! its input, how it produces answers, and how solvers are registered so the
//! runner can find them.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`] and [`Solver`] traits implemented by every day
//! - [`InputSource`] / [`InputSet`]: rewindable inputs, one or more per day
//! - [`Answer`]: an integer or text value plus an optional diagnostic payload
//! - [`Answers`]: the lazy, finite producer driving a solver part by part
//! - A static registry keyed by day and [`Variant`] (primary or golf)
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{Answer, Answers, AocParser, InputSet, InputSource, ParseError,
//!     RegistryBuilder, SolveError, Solver, Variant, register_solver};
//!
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type Parsed = Vec<i64>;
//!
//!     fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
//!         input
//!             .read_all()?
//!             .lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(numbers: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
//!         match part {
//!             1 => Ok(Answer::new(numbers.iter().sum::<i64>())),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, MyDay1, 1);
//! let registry = builder.build();
//!
//! let solver = registry.get(1, Variant::Primary).unwrap();
//! let mut inputs = InputSet::single(InputSource::from_text("example", "1\n2\n3"));
//! let first = Answers::new(solver, &mut inputs).next().unwrap().unwrap();
//! assert_eq!(first.answer.value.to_string(), "6");
//! ```
//!
//! # Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterSolver)]` to register solvers automatically:
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[aoc(day = 1)]
//! struct Day01;
//!
//! #[derive(AutoRegisterSolver)]
//! #[aoc(day = 1, variant = "golf")]
//! struct Day01Golf;
//! ```
//!
//! Then load them with [`RegistryBuilder::register_all_plugins`].

mod answer;
mod error;
mod input;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use answer::{Answer, AnswerValue, Diagnostic};
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use input::{InputSet, InputSource, SeekableRead};
pub use instance::{Answers, DynSolver, SolveResult, SolverHandle};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverInfo, SolverPlugin, SolverRegistry, Variant, DAYS,
};
pub use solver::{AocParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_solver_macros::AutoRegisterSolver;
