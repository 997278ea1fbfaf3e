//! Day 3: Rucksack Reorganization

use crate::parsing::parse_lines;
use anyhow::{bail, ensure};
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};

/// Item types as a bit set, bit `p` set for priority `p`
type ItemSet = u64;

fn priority(item: u8) -> anyhow::Result<u32> {
    Ok(match item {
        b'a'..=b'z' => u32::from(item - b'a') + 1,
        b'A'..=b'Z' => u32::from(item - b'A') + 27,
        other => bail!("unexpected item {:?}", char::from(other)),
    })
}

fn item_set(items: &[u8]) -> anyhow::Result<ItemSet> {
    items
        .iter()
        .try_fold(0, |set, &item| -> anyhow::Result<ItemSet> {
            Ok(set | 1 << priority(item)?)
        })
}

fn single_priority(set: ItemSet) -> Option<u32> {
    (set.count_ones() == 1).then(|| set.trailing_zeros())
}

/// Both compartments of one rucksack
#[derive(Debug, Clone, Copy)]
pub struct Rucksack {
    left: ItemSet,
    right: ItemSet,
}

impl Rucksack {
    fn all(&self) -> ItemSet {
        self.left | self.right
    }
}

fn parse_rucksack(line: &str) -> anyhow::Result<Rucksack> {
    ensure!(line.len() % 2 == 0, "odd number of items");
    let (left, right) = line.as_bytes().split_at(line.len() / 2);
    Ok(Rucksack {
        left: item_set(left)?,
        right: item_set(right)?,
    })
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 3)]
pub struct Day03;

impl AocParser for Day03 {
    type Parsed = Vec<Rucksack>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        parse_lines(&input.read_all()?, parse_rucksack)
    }
}

impl Solver for Day03 {
    const PARTS: u8 = 2;

    fn solve_part(rucksacks: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        let shared: Option<Vec<u32>> = match part {
            1 => rucksacks
                .iter()
                .map(|r| single_priority(r.left & r.right))
                .collect(),
            2 => rucksacks
                .chunks(3)
                .map(|group| match group {
                    [a, b, c] => single_priority(a.all() & b.all() & c.all()),
                    _ => None,
                })
                .collect(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };

        let shared = shared
            .ok_or_else(|| SolveError::SolveFailed("no unique shared item".into()))?;
        Ok(Answer::new(shared.iter().sum::<u32>()))
    }
}
