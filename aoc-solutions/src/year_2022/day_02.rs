//! Day 2: Rock Paper Scissors

use crate::parsing::parse_lines;
use anyhow::{anyhow, bail};
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn from_index(index: u8) -> Self {
        match index % 3 {
            0 => Shape::Rock,
            1 => Shape::Paper,
            _ => Shape::Scissors,
        }
    }

    fn index(self) -> u8 {
        self as u8
    }

    fn score(self) -> u64 {
        u64::from(self.index()) + 1
    }

    /// The shape this one defeats
    fn beats(self) -> Shape {
        Shape::from_index(self.index() + 2)
    }

    /// The shape defeating this one
    fn loses_to(self) -> Shape {
        Shape::from_index(self.index() + 1)
    }

    fn outcome_against(self, other: Shape) -> u64 {
        if self == other {
            3
        } else if self.beats() == other {
            6
        } else {
            0
        }
    }
}

/// One round: the opponent's shape and the second column (`X`, `Y` or `Z`)
#[derive(Debug, Clone, Copy)]
pub struct Round {
    opponent: Shape,
    column: u8,
}

impl Round {
    /// Second column read as our shape
    fn as_shape(self) -> u64 {
        let ours = Shape::from_index(self.column);
        ours.score() + ours.outcome_against(self.opponent)
    }

    /// Second column read as the required outcome
    fn as_outcome(self) -> u64 {
        let ours = match self.column {
            0 => self.opponent.beats(),
            1 => self.opponent,
            _ => self.opponent.loses_to(),
        };
        ours.score() + u64::from(self.column) * 3
    }
}

fn parse_round(line: &str) -> anyhow::Result<Round> {
    let (left, right) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected two columns"))?;
    let opponent = match left {
        "A" => Shape::Rock,
        "B" => Shape::Paper,
        "C" => Shape::Scissors,
        other => bail!("unknown opponent shape {:?}", other),
    };
    let column = match right {
        "X" => 0,
        "Y" => 1,
        "Z" => 2,
        other => bail!("unknown strategy column {:?}", other),
    };
    Ok(Round { opponent, column })
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 2)]
pub struct Day02;

impl AocParser for Day02 {
    type Parsed = Vec<Round>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        parse_lines(&input.read_all()?, parse_round)
    }
}

impl Solver for Day02 {
    const PARTS: u8 = 2;

    fn solve_part(rounds: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        match part {
            1 => Ok(Answer::new(rounds.iter().map(|r| r.as_shape()).sum::<u64>())),
            2 => Ok(Answer::new(rounds.iter().map(|r| r.as_outcome()).sum::<u64>())),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Score tables indexed by `3 * opponent + column`
#[derive(AutoRegisterSolver)]
#[aoc(day = 2, variant = "golf")]
pub struct Day02Golf;

impl AocParser for Day02Golf {
    type Parsed = String;

    fn parse(input: &mut InputSource) -> Result<String, ParseError> {
        input.read_all()
    }
}

impl Solver for Day02Golf {
    const PARTS: u8 = 2;

    fn solve_part(text: &mut String, part: u8) -> Result<Answer, SolveError> {
        let table: [u64; 9] = if part == 1 {
            [4, 8, 3, 1, 5, 9, 7, 2, 6]
        } else {
            [3, 4, 8, 1, 5, 9, 2, 6, 7]
        };
        Ok(Answer::new(
            text.lines()
                .filter_map(|l| match l.as_bytes() {
                    &[a @ b'A'..=b'C', b' ', x @ b'X'..=b'Z'] => {
                        Some(table[usize::from((a - b'A') * 3 + (x - b'X'))])
                    }
                    _ => None,
                })
                .sum::<u64>(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::answers;

    const EXAMPLE: &str = "A Y\nB X\nC Z\n";

    #[test]
    fn test_example() {
        assert_eq!(answers::<Day02>(&[EXAMPLE]), ["15", "12"]);
        assert_eq!(answers::<Day02Golf>(&[EXAMPLE]), ["15", "12"]);
    }

    #[test]
    fn test_golf_agrees_on_every_round() {
        for opponent in ["A", "B", "C"] {
            for column in ["X", "Y", "Z"] {
                let line = format!("{} {}\n", opponent, column);
                assert_eq!(answers::<Day02>(&[&line]), answers::<Day02Golf>(&[&line]), "{}", line);
            }
        }
    }

    #[test]
    fn test_unknown_shape_rejected() {
        assert!(parse_round("D X").is_err());
        assert!(parse_round("A W").is_err());
        assert!(parse_round("AX").is_err());
    }
}
