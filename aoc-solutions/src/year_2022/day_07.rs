//! Day 7: No Space Left On Device

use crate::parsing::number;
use anyhow::bail;
use aoc_solver::{Answer, AocParser, AutoRegisterSolver, InputSource, ParseError, SolveError, Solver};
use serde_json::json;

const DISK_SIZE: u64 = 70_000_000;
const NEEDED: u64 = 30_000_000;
const SMALL_DIR: u64 = 100_000;

/// Total size of every directory, root first
#[derive(Debug, Clone, Default)]
pub struct DirSizes {
    sizes: Vec<u64>,
}

impl DirSizes {
    fn root(&self) -> u64 {
        self.sizes.first().copied().unwrap_or_default()
    }
}

/// One line of the terminal session
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Cd(&'a str),
    File(u64),
    Other,
}

fn parse_line(line: &str) -> anyhow::Result<Line<'_>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    Ok(match words.as_slice() {
        ["$", "cd", target] => Line::Cd(*target),
        ["$", "ls"] | ["dir", _] => Line::Other,
        [size, _] => Line::File(number(size)?),
        _ => bail!("unrecognised line"),
    })
}

/// Finish the current directory, adding its size to the parent
fn close(open: &mut Vec<usize>, sizes: &mut [u64]) {
    if let Some(done) = open.pop() {
        if let Some(&parent) = open.last() {
            sizes[parent] += sizes[done];
        }
    }
}

/// Replay the terminal session with a stack of open directories
fn replay(text: &str) -> Result<DirSizes, ParseError> {
    // indices into `sizes`, root to cwd
    let mut open: Vec<usize> = Vec::new();
    let mut sizes: Vec<u64> = Vec::new();

    for (index, line) in text.lines().enumerate().filter(|(_, l)| !l.is_empty()) {
        match parse_line(line).map_err(|e| ParseError::at_line(index, e))? {
            Line::Cd("/") => {
                while open.len() > 1 {
                    close(&mut open, &mut sizes);
                }
                if open.is_empty() {
                    sizes.push(0);
                    open.push(0);
                }
            }
            Line::Cd("..") if open.len() > 1 => close(&mut open, &mut sizes),
            Line::Cd("..") => return Err(ParseError::at_line(index, "cd .. above root")),
            Line::Cd(_) if open.is_empty() => {
                return Err(ParseError::at_line(index, "cd before entering /"));
            }
            Line::Cd(_) => {
                sizes.push(0);
                open.push(sizes.len() - 1);
            }
            Line::File(size) => {
                let &cwd = open
                    .last()
                    .ok_or_else(|| ParseError::at_line(index, "file listed before entering /"))?;
                sizes[cwd] += size;
            }
            Line::Other => {}
        }
    }

    while !open.is_empty() {
        close(&mut open, &mut sizes);
    }
    Ok(DirSizes { sizes })
}

#[derive(AutoRegisterSolver)]
#[aoc(day = 7)]
pub struct Day07;

impl AocParser for Day07 {
    type Parsed = DirSizes;

    fn parse(input: &mut InputSource) -> Result<Self::Parsed, ParseError> {
        let dirs = replay(&input.read_all()?)?;
        if dirs.sizes.is_empty() {
            return Err(ParseError::MissingData("no directories visited".into()));
        }
        Ok(dirs)
    }
}

impl Solver for Day07 {
    const PARTS: u8 = 2;

    fn solve_part(dirs: &mut Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        match part {
            1 => Ok(Answer::new(
                dirs.sizes.iter().filter(|&&s| s <= SMALL_DIR).sum::<u64>(),
            )),
            2 => {
                let free = DISK_SIZE.saturating_sub(dirs.root());
                let missing = NEEDED.saturating_sub(free);
                let size = dirs
                    .sizes
                    .iter()
                    .copied()
                    .filter(|&s| s >= missing)
                    .min()
                    .ok_or_else(|| SolveError::SolveFailed("disk too small".into()))?;
                Ok(Answer::new(size).with_diagnostic(json!({ "used": dirs.root(), "missing": missing })))
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::answers;

    const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn test_example() {
        assert_eq!(answers::<Day07>(&[EXAMPLE]), ["95437", "24933642"]);
    }

    #[test]
    fn test_sizes_roll_up() {
        let dirs = replay(EXAMPLE).unwrap();
        assert_eq!(dirs.root(), 48381165);
        let mut sizes = dirs.sizes.clone();
        sizes.sort_unstable();
        assert_eq!(sizes, [584, 94853, 24933642, 48381165]);
    }

    #[test]
    fn test_cd_above_root_is_rejected() {
        let err = replay("$ cd /\n$ cd ..\n").unwrap_err();
        assert!(err.to_string().contains("(line 2)"), "{}", err);
    }

    #[test]
    fn test_line_kinds() {
        assert_eq!(parse_line("$ cd a").unwrap(), Line::Cd("a"));
        assert_eq!(parse_line("584 i").unwrap(), Line::File(584));
        assert_eq!(parse_line("dir e").unwrap(), Line::Other);
        assert!(parse_line("hello there friend").is_err());
        assert!(parse_line("big file").is_err());
    }
}
