//! Small parsing helpers shared by the days

use anyhow::Context;
use aoc_solver::ParseError;
use std::str::FromStr;

/// Parse every non-empty line, attaching the line number to failures
pub fn parse_lines<T, F>(text: &str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| parse_line(line).map_err(|e| ParseError::at_line(index, e)))
        .collect()
}

/// Blank-line separated blocks, surrounding newlines trimmed
pub fn blocks(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n")
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.is_empty())
}

/// Parse a number, naming the offending text on failure
pub fn number<T>(text: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.trim()
        .parse()
        .with_context(|| format!("expected a number, found {:?}", text))
}
