//! Day 4: Camp Cleanup

use crate::parsing::{number, parse_lines};
use anyhow::anyhow;
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};
use std::ops::RangeInclusive;

type Sections = RangeInclusive<u32>;

fn contains(outer: &Sections, inner: &Sections) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

fn overlaps(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

fn parse_sections(text: &str) -> anyhow::Result<Sections> {
    let (first, last) = text
        .split_once('-')
        .ok_or_else(|| anyhow!("expected a section range, found {:?}", text))?;
    Ok(number(first)?..=number(last)?)
}

fn parse_pair(line: &str) -> anyhow::Result<(Sections, Sections)> {
    let (a, b) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected two assignments"))?;
    Ok((parse_sections(a)?, parse_sections(b)?))
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 4)]
pub struct Day04;

impl AocParser for Day04 {
    type Parsed = Vec<(Sections, Sections)>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        parse_lines(&input.read_all()?, parse_pair)
    }
}

impl Solver for Day04 {
    const PARTS: u8 = 2;

    fn solve_part(pairs: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        let matching = |(a, b): &&(Sections, Sections)| match part {
            1 => contains(a, b) || contains(b, a),
            _ => overlaps(a, b),
        };
        match part {
            1 | 2 => Ok(Answer::new(pairs.iter().filter(matching).count())),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 4, variant = "golf")]
pub struct Day04Golf;

impl AocParser for Day04Golf {
    type Parsed = Vec<[u32; 4]>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        parse_lines(&input.read_all()?, |line| {
            let n: Vec<u32> = line.split([',', '-']).map(number).collect::<anyhow::Result<_>>()?;
            n.try_into()
                .map_err(|n: Vec<u32>| anyhow!("expected four numbers, found {}", n.len()))
        })
    }
}

impl Solver for Day04Golf {
    const PARTS: u8 = 2;

    fn solve_part(pairs: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        Ok(Answer::new(
            pairs
                .iter()
                .filter(|&&[a, b, c, d]| match part {
                    1 => (a <= c && d <= b) || (c <= a && b <= d),
                    _ => a <= d && c <= b,
                })
                .count(),
        ))
    }
}
