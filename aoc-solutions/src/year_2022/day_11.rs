//! Day 11: Monkey in the Middle

use crate::parsing::{blocks, number};
use anyhow::{anyhow, bail};
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};
use regex::Regex;
use serde_json::json;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Old,
    Value(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(Operand),
    Mul(Operand),
}

impl Operation {
    /// New worry level, `None` on overflow
    fn apply(self, old: u64) -> Option<u64> {
        let value = |operand| match operand {
            Operand::Old => old,
            Operand::Value(v) => v,
        };
        match self {
            Operation::Add(operand) => old.checked_add(value(operand)),
            Operation::Mul(operand) => old.checked_mul(value(operand)),
        }
    }
}

fn overflow() -> SolveError {
    SolveError::SolveFailed("worry level overflow".into())
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn monkey_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?x)
            Monkey\s+\d+:\s+
            Starting\ items:\ (?P<items>[\d,\ ]*)\s+
            Operation:\ new\ =\ old\ (?P<op>[+*])\ (?P<operand>old|\d+)\s+
            Test:\ divisible\ by\ (?P<divisor>\d+)\s+
            If\ true:\ throw\ to\ monkey\ (?P<if_true>\d+)\s+
            If\ false:\ throw\ to\ monkey\ (?P<if_false>\d+)",
        )
        .expect("valid regex")
    })
}

fn parse_monkey(block: &str) -> anyhow::Result<Monkey> {
    let caps = monkey_regex()
        .captures(block)
        .ok_or_else(|| anyhow!("malformed monkey"))?;

    let items = caps["items"]
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(number)
        .collect::<anyhow::Result<_>>()?;
    let operand = match &caps["operand"] {
        "old" => Operand::Old,
        value => Operand::Value(number(value)?),
    };
    let operation = match &caps["op"] {
        "+" => Operation::Add(operand),
        "*" => Operation::Mul(operand),
        other => bail!("unknown operator {:?}", other),
    };
    let divisor = number(&caps["divisor"])?;
    if divisor == 0 {
        bail!("cannot test divisibility by zero");
    }

    Ok(Monkey {
        items,
        operation,
        divisor,
        if_true: number(&caps["if_true"])?,
        if_false: number(&caps["if_false"])?,
    })
}

/// Inspection counts per monkey after `rounds` rounds
fn play(mut monkeys: Vec<Monkey>, rounds: usize, relief: bool) -> Result<Vec<u64>, SolveError> {
    // divisibility by every divisor survives reduction modulo their product
    let modulus = monkeys
        .iter()
        .try_fold(1u64, |acc, m| acc.checked_mul(m.divisor))
        .ok_or_else(overflow)?;
    let mut inspections = vec![0; monkeys.len()];

    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspections[i] += items.len() as u64;
            let Monkey {
                operation,
                divisor,
                if_true,
                if_false,
                ..
            } = monkeys[i];

            for item in items {
                let mut worry = operation.apply(item).ok_or_else(overflow)?;
                if relief {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push(worry);
            }
        }
    }
    Ok(inspections)
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 11)]
pub struct Day11;

impl AocParser for Day11 {
    type Parsed = Vec<Monkey>;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        let text = input.read_all()?;
        let monkeys = blocks(&text)
            .enumerate()
            .map(|(i, block)| {
                parse_monkey(block)
                    .map_err(|e| ParseError::InvalidFormat(format!("(monkey {}) {}", i, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if monkeys.is_empty() {
            return Err(ParseError::MissingData("no monkeys".into()));
        }
        if let Some((i, _)) = monkeys
            .iter()
            .enumerate()
            .find(|(_, m)| m.if_true >= monkeys.len() || m.if_false >= monkeys.len())
        {
            return Err(ParseError::InvalidFormat(format!(
                "(monkey {}) throws to a missing monkey",
                i
            )));
        }
        Ok(monkeys)
    }
}

impl Solver for Day11 {
    const PARTS: u8 = 2;

    fn solve_part(monkeys: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        let (rounds, relief) = match part {
            1 => (20, true),
            2 => (10_000, false),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };

        let inspections = play(monkeys.clone(), rounds, relief)?;
        let mut busiest = inspections.clone();
        busiest.sort_unstable_by(|a, b| b.cmp(a));
        let business = busiest
            .iter()
            .take(2)
            .try_fold(1u64, |acc, &n| acc.checked_mul(n))
            .ok_or_else(overflow)?;
        Ok(Answer::new(business).with_diagnostic(json!({ "inspections": inspections })))
    }
}
