//! Day 9: Rope Bridge
//!
//! Each part reads its own input source, so the second example can differ
//! from the first.

use crate::parsing::{number, parse_lines};
use anyhow::{anyhow, bail};
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};
use serde_json::json;
use std::collections::HashSet;

type Point = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    step: Point,
    count: u32,
}

fn parse_motion(line: &str) -> anyhow::Result<Motion> {
    let (dir, count) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected a direction and a count"))?;
    let step = match dir {
        "R" => (1, 0),
        "L" => (-1, 0),
        "U" => (0, 1),
        "D" => (0, -1),
        other => bail!("unknown direction {:?}", other),
    };
    Ok(Motion {
        step,
        count: number(count)?,
    })
}

/// Move `knot` one step towards `leader` unless they touch
fn follow(leader: Point, knot: Point) -> Point {
    let (dx, dy) = (leader.0 - knot.0, leader.1 - knot.1);
    if dx.abs() <= 1 && dy.abs() <= 1 {
        knot
    } else {
        (knot.0 + dx.signum(), knot.1 + dy.signum())
    }
}

/// Positions visited by the tail of a rope with `knots` knots
fn tail_visits(motions: &[Motion], knots: usize) -> HashSet<Point> {
    let mut rope = vec![(0, 0); knots];
    let mut visited = HashSet::from([(0, 0)]);
    for motion in motions {
        for _ in 0..motion.count {
            rope[0] = (rope[0].0 + motion.step.0, rope[0].1 + motion.step.1);
            for i in 1..knots {
                rope[i] = follow(rope[i - 1], rope[i]);
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }
    visited
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 9)]
pub struct Day09;

impl AocParser for Day09 {
    type Parsed = Vec<Motion>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        parse_lines(&input.read_all()?, parse_motion)
    }
}

impl Solver for Day09 {
    const PARTS: u8 = 2;

    fn solve_part(motions: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        let knots = match part {
            1 => 2,
            2 => 10,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let visited = tail_visits(motions, knots);
        let (xs, ys): (Vec<i32>, Vec<i32>) = visited.iter().copied().unzip();
        let span = |v: &[i32]| {
            [
                v.iter().min().copied().unwrap_or_default(),
                v.iter().max().copied().unwrap_or_default(),
            ]
        };
        Ok(Answer::new(visited.len()).with_diagnostic(json!({ "x": span(&xs), "y": span(&ys) })))
    }
}
