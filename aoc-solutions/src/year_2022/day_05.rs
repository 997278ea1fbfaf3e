//! Day 5: Supply Stacks

use crate::parsing::{number, parse_lines};
use anyhow::{anyhow, ensure};
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};
use regex::Regex;
use serde_json::json;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug, Clone)]
pub struct Cargo {
    /// Bottom crate first
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

fn move_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^move (\d+) from (\d+) to (\d+)$").expect("valid regex"))
}

fn parse_move(line: &str, stacks: usize) -> anyhow::Result<Move> {
    let caps = move_regex()
        .captures(line)
        .ok_or_else(|| anyhow!("expected a move, found {:?}", line))?;
    let (from, to): (usize, usize) = (number(&caps[2])?, number(&caps[3])?);
    ensure!(
        (1..=stacks).contains(&from) && (1..=stacks).contains(&to),
        "stack out of range 1..={}",
        stacks
    );
    Ok(Move {
        count: number(&caps[1])?,
        from: from - 1,
        to: to - 1,
    })
}

/// Crate rows top to bottom, the last row numbers the stacks
fn parse_drawing(drawing: &str) -> Result<Vec<Vec<u8>>, ParseError> {
    let mut rows: Vec<&[u8]> = drawing.lines().map(str::as_bytes).collect();
    let labels = rows
        .pop()
        .ok_or_else(|| ParseError::MissingData("empty drawing".into()))?;
    let count = labels.split(|b| *b == b' ').filter(|s| !s.is_empty()).count();

    let mut stacks = vec![Vec::new(); count];
    for (index, row) in rows.iter().enumerate().rev() {
        for (stack, chunk) in row.chunks(4).enumerate() {
            match chunk {
                [b'[', c, b']', ..] if stack < count => stacks[stack].push(*c),
                [b' ', b' ', b' ', ..] => {}
                _ => return Err(ParseError::at_line(index, "malformed crate row")),
            }
        }
    }
    Ok(stacks)
}

fn tops(stacks: &[Vec<u8>]) -> String {
    stacks
        .iter()
        .filter_map(|s| s.last())
        .map(|&c| char::from(c))
        .collect()
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 5)]
pub struct Day05;

impl AocParser for Day05 {
    type Parsed = Cargo;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        let text = input.read_all()?;
        let (drawing, moves) = text
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("no moves after the drawing".into()))?;
        let stacks = parse_drawing(drawing)?;
        let moves = parse_lines(moves, |line| parse_move(line, stacks.len()))?;
        Ok(Cargo { stacks, moves })
    }
}

impl Solver for Day05 {
    const PARTS: u8 = 2;

    fn solve_part(cargo: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        let one_at_a_time = match part {
            1 => true,
            2 => false,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };

        let mut stacks = cargo.stacks.clone();
        for &Move { count, from, to } in &cargo.moves {
            let source = &mut stacks[from];
            let start = source
                .len()
                .checked_sub(count)
                .ok_or_else(|| SolveError::SolveFailed(format!("stack {} ran out", from + 1).into()))?;
            let mut lifted = source.split_off(start);
            if one_at_a_time {
                lifted.reverse();
            }
            stacks[to].append(&mut lifted);
        }

        let heights: Vec<usize> = stacks.iter().map(Vec::len).collect();
        Ok(Answer::new(tops(&stacks)).with_diagnostic(json!({ "heights": heights })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::answers;

    const EXAMPLE: &str = "    [D]    
[N] [C]    
[Z] [M] [P]
 1   2   3 

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2
";

    #[test]
    fn test_example() {
        assert_eq!(answers::<Day05>(&[EXAMPLE]), ["CMZ", "MCD"]);
    }

    #[test]
    fn test_drawing() {
        let stacks = parse_drawing("    [D]\n[N] [C]\n 1   2").unwrap();
        assert_eq!(stacks, [b"N".to_vec(), b"CD".to_vec()]);
    }

    #[test]
    fn test_move_out_of_range() {
        assert!(parse_move("move 1 from 4 to 1", 3).is_err());
        assert!(parse_move("move 1 from 0 to 1", 3).is_err());
        assert_eq!(
            parse_move("move 2 from 3 to 1", 3).unwrap(),
            Move { count: 2, from: 2, to: 0 }
        );
    }

    #[test]
    fn test_overdrawn_stack_fails() {
        let mut cargo = Cargo {
            stacks: vec![b"A".to_vec(), Vec::new()],
            moves: vec![Move { count: 2, from: 0, to: 1 }],
        };
        assert!(Day05::solve_part(&mut cargo, 1).is_err());
    }
}
