//! Day 1: Calorie Counting

use crate::parsing::{blocks, number, parse_lines};
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};
use itertools::Itertools;
use serde_json::json;

/// Calories carried by each elf, in input order
#[derive(AutoRegisterSolver)]
#[aoc(day = 1)]
pub struct Day01;

impl AocParser for Day01 {
    type Parsed = Vec<u64>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        let text = input.read_all()?;
        blocks(&text)
            .map(|block| parse_lines(block, number::<u64>).map(|items| items.iter().sum()))
            .collect()
    }
}

impl Solver for Day01 {
    const PARTS: u8 = 2;

    fn solve_part(elves: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        // (elf index, calories), most first
        let top: Vec<(usize, u64)> = elves
            .iter()
            .copied()
            .enumerate()
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .take(3)
            .collect();

        match part {
            1 => {
                let &(elf, calories) = top
                    .first()
                    .ok_or_else(|| SolveError::SolveFailed("no elves".into()))?;
                Ok(Answer::new(calories).with_diagnostic(json!({ "top": [elf, calories] })))
            }
            2 => Ok(Answer::new(top.iter().map(|(_, c)| c).sum::<u64>())
                .with_diagnostic(json!({ "top3": top }))),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 1, variant = "golf")]
pub struct Day01Golf;

impl AocParser for Day01Golf {
    type Parsed = String;

    fn parse(input: &mut InputSource) -> Result<String, ParseError> {
        input.read_all()
    }
}

impl Solver for Day01Golf {
    const PARTS: u8 = 2;

    fn solve_part(text: &mut String, part: u8) -> Result<Answer, SolveError> {
        let mut sums: Vec<u64> = text
            .trim_end()
            .split("\n\n")
            .map(|b| b.lines().filter_map(|l| l.parse::<u64>().ok()).sum())
            .collect();
        sums.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Answer::new(sums.iter().take(if part == 1 { 1 } else { 3 }).sum::<u64>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::answers;

    const EXAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    #[test]
    fn test_example() {
        assert_eq!(answers::<Day01>(&[EXAMPLE]), ["24000", "45000"]);
        assert_eq!(answers::<Day01Golf>(&[EXAMPLE]), ["24000", "45000"]);
    }

    #[test]
    fn test_two_groups() {
        assert_eq!(answers::<Day01>(&["3\n1\n2\n\n4\n"]), ["6", "10"]);
    }

    #[test]
    fn test_diagnostic_names_top_elf() {
        let mut elves = vec![6000, 4000, 11000, 24000, 10000];
        let answer = Day01::solve_part(&mut elves, 1).unwrap();
        assert_eq!(answer.diagnostic, Some(json!({ "top": [3, 24000] })));
    }

    #[test]
    fn test_bad_line_is_parse_error() {
        let mut input = InputSource::from_text("bad", "100\nabc\n");
        assert!(matches!(Day01::parse(&mut input), Err(ParseError::InvalidFormat(_))));
    }
}
