//! Day 8: Treetop Tree House

use crate::parsing::parse_lines;
use anyhow::ensure;
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};
use serde_json::json;

/// Tree heights, row major
#[derive(Debug, Clone)]
pub struct Forest {
    width: usize,
    heights: Vec<u8>,
}

impl Forest {
    fn height(&self) -> usize {
        self.heights.len() / self.width
    }

    fn at(&self, row: usize, col: usize) -> u8 {
        self.heights[row * self.width + col]
    }

    /// Heights looking outward from a tree, nearest first, in four directions
    fn sight_lines(&self, row: usize, col: usize) -> [Vec<u8>; 4] {
        [
            (0..row).rev().map(|r| self.at(r, col)).collect(),
            (row + 1..self.height()).map(|r| self.at(r, col)).collect(),
            (0..col).rev().map(|c| self.at(row, c)).collect(),
            (col + 1..self.width).map(|c| self.at(row, c)).collect(),
        ]
    }

    fn trees(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height()).flat_map(move |r| (0..self.width).map(move |c| (r, c)))
    }

    fn visible(&self, row: usize, col: usize) -> bool {
        let tree = self.at(row, col);
        self.sight_lines(row, col)
            .iter()
            .any(|line| line.iter().all(|&h| h < tree))
    }

    fn scenic_score(&self, row: usize, col: usize) -> usize {
        let tree = self.at(row, col);
        self.sight_lines(row, col)
            .iter()
            .map(|line| match line.iter().position(|&h| h >= tree) {
                Some(blocker) => blocker + 1,
                None => line.len(),
            })
            .product()
    }
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 8)]
pub struct Day08;

impl AocParser for Day08 {
    type Parsed = Forest;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        let rows = parse_lines(&input.read_all()?, |line| {
            ensure!(line.bytes().all(|b| b.is_ascii_digit()), "heights must be digits");
            Ok(line.bytes().map(|b| b - b'0').collect::<Vec<u8>>())
        })?;

        let width = rows
            .first()
            .map(Vec::len)
            .ok_or_else(|| ParseError::MissingData("no trees".into()))?;
        if let Some(index) = rows.iter().position(|r| r.len() != width) {
            return Err(ParseError::InvalidFormat(format!(
                "row {} has {} trees, expected {}",
                index + 1,
                rows[index].len(),
                width
            )));
        }

        Ok(Forest {
            width,
            heights: rows.concat(),
        })
    }
}

impl Solver for Day08 {
    const PARTS: u8 = 2;

    fn solve_part(forest: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        match part {
            1 => Ok(Answer::new(
                forest.trees().filter(|&(r, c)| forest.visible(r, c)).count(),
            )),
            2 => {
                let (score, (row, col)) = forest
                    .trees()
                    .map(|(r, c)| (forest.scenic_score(r, c), (r, c)))
                    .max()
                    .ok_or_else(|| SolveError::SolveFailed("empty forest".into()))?;
                Ok(Answer::new(score).with_diagnostic(json!({ "tree": [row, col] })))
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
