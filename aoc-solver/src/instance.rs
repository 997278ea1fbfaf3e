//! Type-erased solvers and the lazy answer producer

use crate::answer::Answer;
use crate::error::{ParseError, SolverError};
use crate::input::{InputSet, InputSource};
use crate::solver::SolverExt;
use chrono::{DateTime, TimeDelta, Utc};
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Result from solving one part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The 1-based part number
    pub part: u8,
    /// The produced answer
    pub answer: Answer,
    /// When parsing started (UTC)
    pub parse_start: DateTime<Utc>,
    /// When parsing completed and solving started (UTC)
    pub parse_end: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the parse duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }

    /// Get the solve duration as TimeDelta
    pub fn solve_duration(&self) -> TimeDelta {
        self.solve_end - self.parse_end
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// The registry stores solvers behind this trait so that days with different
/// `Parsed` types can live in one table.
pub trait DynSolver {
    /// Number of parts this solver produces
    fn parts(&self) -> u8;

    /// Parse `input` from its current position and solve `part`
    fn solve(&self, input: &mut InputSource, part: u8) -> Result<SolveResult, SolverError>;
}

/// Zero-sized adapter exposing a `Solver` type as a `DynSolver`
pub struct SolverHandle<S>(PhantomData<fn() -> S>);

impl<S> SolverHandle<S> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S> Default for SolverHandle<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SolverExt> DynSolver for SolverHandle<S> {
    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn solve(&self, input: &mut InputSource, part: u8) -> Result<SolveResult, SolverError> {
        let parse_start = Utc::now();
        let mut parsed = S::parse(input)?;
        let parse_end = Utc::now();
        let answer = S::solve_part_checked_range(&mut parsed, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            part,
            answer,
            parse_start,
            parse_end,
            solve_end,
        })
    }
}

/// Answers of one solver run, produced lazily in part order
///
/// Before each pull the source feeding that part is rewound, so every part
/// parses the complete input. The sequence ends after `parts()` items and
/// cannot be restarted.
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, Answers, AocParser, InputSet, InputSource, ParseError, SolveError,
///     Solver, SolverHandle};
///
/// struct Lines;
///
/// impl AocParser for Lines {
///     type Parsed = usize;
///
///     fn parse(input: &mut InputSource) -> Result<usize, ParseError> {
///         Ok(input.read_all()?.lines().count())
///     }
/// }
///
/// impl Solver for Lines {
///     const PARTS: u8 = 2;
///
///     fn solve_part(count: &mut usize, part: u8) -> Result<Answer, SolveError> {
///         Ok(Answer::new(*count * usize::from(part)))
///     }
/// }
///
/// let solver = SolverHandle::<Lines>::new();
/// let mut inputs = InputSet::single(InputSource::from_text("demo", "a\nb\nc\n"));
/// let answers: Vec<String> = Answers::new(&solver, &mut inputs)
///     .map(|r| r.unwrap().answer.value.to_string())
///     .collect();
/// assert_eq!(answers, ["3", "6"]);
/// ```
pub struct Answers<'a> {
    solver: &'a dyn DynSolver,
    inputs: &'a mut InputSet,
    next_part: u16,
}

impl<'a> Answers<'a> {
    pub fn new(solver: &'a dyn DynSolver, inputs: &'a mut InputSet) -> Self {
        Self {
            solver,
            inputs,
            next_part: 1,
        }
    }

    fn remaining(&self) -> usize {
        let end = u16::from(self.solver.parts()) + 1;
        usize::from(end.saturating_sub(self.next_part))
    }
}

impl Iterator for Answers<'_> {
    type Item = Result<SolveResult, SolverError>;

    fn next(&mut self) -> Option<Self::Item> {
        let part = u8::try_from(self.next_part).ok()?;
        if part > self.solver.parts() {
            return None;
        }
        self.next_part += 1;

        let source = self.inputs.source_for(part);
        if let Err(e) = source.rewind() {
            return Some(Err(ParseError::from(e).into()));
        }
        Some(self.solver.solve(source, part))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Answers<'_> {}

impl FusedIterator for Answers<'_> {}
