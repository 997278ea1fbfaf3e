//! Answers produced by solvers

use std::fmt;

/// Free-form data attached to an answer for human inspection
///
/// Never used when comparing answers.
pub type Diagnostic = serde_json::Value;

/// Primary value of an answer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnswerValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Int(value) => write!(f, "{}", value),
            AnswerValue::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! lossless_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for AnswerValue {
            fn from(value: $ty) -> Self {
                AnswerValue::Int(i64::from(value))
            }
        })*
    };
}

// Values that may not fit an i64 keep their decimal text form
macro_rules! wide_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for AnswerValue {
            fn from(value: $ty) -> Self {
                i64::try_from(value)
                    .map(AnswerValue::Int)
                    .unwrap_or_else(|_| AnswerValue::Text(value.to_string()))
            }
        })*
    };
}

lossless_int!(i8, i16, i32, i64, u8, u16, u32);
wide_int!(u64, usize, i128, u128);

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

/// A produced answer: primary value plus optional diagnostic payload
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub value: AnswerValue,
    pub diagnostic: Option<Diagnostic>,
}

impl Answer {
    /// Answer without diagnostics
    pub fn new(value: impl Into<AnswerValue>) -> Self {
        Self {
            value: value.into(),
            diagnostic: None,
        }
    }

    /// Attach a diagnostic payload
    pub fn with_diagnostic(mut self, diagnostic: impl Into<Diagnostic>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }
}
