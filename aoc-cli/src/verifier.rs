//! Classification of produced answers against expectations

use aoc_solver::AnswerValue;
use std::fmt;

/// Outcome of comparing an answer with its expectation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing to compare against
    Unchecked,
    /// Same text form as the expectation
    Verified,
    /// Differs from the expectation
    Mismatch { expected: String, actual: String },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Unchecked => f.write_str("unchecked"),
            Verdict::Verified => f.write_str("ok"),
            Verdict::Mismatch { expected, actual } => {
                write!(f, "mismatch - expected {}, got {}", expected, actual)
            }
        }
    }
}

/// Compare the primary value with a stored expectation
///
/// Integers and text compare by their text form, the same form the result
/// store writes.
pub fn classify(produced: &AnswerValue, expected: Option<&str>) -> Verdict {
    let Some(expected) = expected else {
        return Verdict::Unchecked;
    };
    let actual = produced.to_string();
    if actual == expected {
        Verdict::Verified
    } else {
        Verdict::Mismatch {
            expected: expected.to_string(),
            actual,
        }
    }
}

/// Compare a golf answer with the primary answer of the same part
///
/// Both values are in memory, so they compare as values: `Int(7)` and
/// `Text("7")` differ.
pub fn cross_check(primary: Option<&AnswerValue>, golf: &AnswerValue) -> Verdict {
    match primary {
        None => Verdict::Unchecked,
        Some(primary) if primary == golf => Verdict::Verified,
        Some(primary) => Verdict::Mismatch {
            expected: primary.to_string(),
            actual: golf.to_string(),
        },
    }
}
