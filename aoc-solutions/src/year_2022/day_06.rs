//! Day 6: Tuning Trouble
//!
//! Every non-empty input line is a separate datastream; answers for several
//! streams are joined with commas.

use crate::parsing::parse_lines;
use anyhow::ensure;
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};
use itertools::Itertools;

fn window(part: u8) -> Result<usize, SolveError> {
    match part {
        1 => Ok(4),
        2 => Ok(14),
        _ => Err(SolveError::PartNotImplemented(part)),
    }
}

/// Characters processed when the first marker of `size` distinct bytes ends
fn marker_end(stream: &[u8], size: usize) -> Option<usize> {
    stream
        .windows(size)
        .position(|w| w.iter().all_unique())
        .map(|start| start + size)
}

fn join_markers<F>(streams: &[Vec<u8>], size: usize, find: F) -> Result<Answer, SolveError>
where
    F: Fn(&[u8], usize) -> Option<usize>,
{
    let ends = streams
        .iter()
        .enumerate()
        .map(|(i, s)| {
            find(s, size).ok_or_else(|| SolveError::SolveFailed(format!("no marker in stream {}", i + 1).into()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(match ends.as_slice() {
        [single] => Answer::new(*single),
        _ => Answer::new(ends.iter().join(",")),
    })
}

fn parse_streams(input: &mut InputSource) -> Result<Vec<Vec<u8>>, ParseError> {
    parse_lines(&input.read_all()?, |line| {
        ensure!(line.is_ascii(), "datastream must be ascii");
        Ok(line.as_bytes().to_vec())
    })
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 6)]
pub struct Day06;

impl AocParser for Day06 {
    type Parsed = Vec<Vec<u8>>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        parse_streams(input)
    }
}

impl Solver for Day06 {
    const PARTS: u8 = 2;

    fn solve_part(streams: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        join_markers(streams, window(part)?, marker_end)
    }
}

/// Sliding bit set over the window instead of rescanning it
#[derive(AutoRegisterSolver)]
#[aoc(day = 6, variant = "golf")]
pub struct Day06Golf;

impl AocParser for Day06Golf {
    type Parsed = Vec<Vec<u8>>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        parse_streams(input)
    }
}

fn marker_end_bits(stream: &[u8], size: usize) -> Option<usize> {
    let bit = |i: usize| 1u128 << stream[i];
    let mut seen = 0u128;
    (0..stream.len()).find_map(|i| {
        seen ^= bit(i);
        if i >= size {
            seen ^= bit(i - size);
        }
        (seen.count_ones() as usize == size).then_some(i + 1)
    })
}

impl Solver for Day06Golf {
    const PARTS: u8 = 2;

    fn solve_part(streams: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        join_markers(streams, window(part)?, marker_end_bits)
    }
}
