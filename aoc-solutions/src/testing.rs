//! Helpers for solution tests

use aoc_solver::{Answers, InputSet, InputSource, Solver, SolverHandle};

/// Run every part of `S` over in-memory sources, answers as text
pub fn answers<S: Solver>(sources: &[&str]) -> Vec<String> {
    let solver = SolverHandle::<S>::new();
    let mut inputs = InputSet::new(
        sources
            .iter()
            .enumerate()
            .map(|(i, text)| InputSource::from_text(format!("test{}", i + 1), *text))
            .collect(),
    )
    .expect("at least one source");

    Answers::new(&solver, &mut inputs)
        .map(|r| r.expect("solver failed").answer.value.to_string())
        .collect()
}
