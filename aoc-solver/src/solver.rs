//! Core solver traits

use crate::answer::Answer;
use crate::error::{ParseError, SolveError};
use crate::input::InputSource;

/// Trait for parsing a day's puzzle input
///
/// Parsing reads the source from its current position; the runner rewinds it
/// before every part, so `parse` always sees the whole input.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, InputSource, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type Parsed = Vec<i32>;
///
///     fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
///         input
///             .read_all()?
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The parsed form of the input handed to `solve_part`
    type Parsed;

    /// Parse the input source into the parsed structure
    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError>;
}

/// Core trait that all day solvers implement
///
/// A solver produces `PARTS` answers, in order. Each part gets a freshly
/// parsed value, so a part may consume or mutate it freely.
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, AocParser, InputSource, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
///         input
///             .read_all()?
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(numbers: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
///         match part {
///             1 => Ok(Answer::new(numbers.iter().sum::<i64>())),
///             2 => Ok(Answer::new(numbers.iter().product::<i64>())),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(Answer)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(parsed: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(parsed: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(parsed, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
