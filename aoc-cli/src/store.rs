//! Result store: flat per-day expectation files
//!
//! One value per line in answer-index order. An empty line means no value
//! for that index. Backslashes and newlines inside values are escaped.

use crate::day::{Day, Mode};
use crate::error::StoreError;
use aoc_solver::Answer;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Expected primary values of one day and mode, indexed by part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectations {
    values: Vec<Option<String>>,
}

impl Expectations {
    /// Expected value of a 1-based part
    pub fn get(&self, part: u8) -> Option<&str> {
        let index = usize::from(part).checked_sub(1)?;
        self.values.get(index)?.as_deref()
    }

    /// Parts that have a recorded value, ascending
    pub fn recorded_parts(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=u8::MAX)
            .zip(&self.values)
            .filter_map(|(part, value)| value.as_ref().map(|_| part))
    }

    fn set(&mut self, part: u8, value: String) {
        let index = usize::from(part.max(1) - 1);
        if self.values.len() <= index {
            self.values.resize(index + 1, None);
        }
        self.values[index] = Some(value);
    }

    fn parse(text: &str) -> Self {
        let values = text
            .lines()
            .map(|line| (!line.is_empty()).then(|| unescape(line)))
            .collect();
        Self { values }
    }

    fn render(&self) -> String {
        self.values
            .iter()
            .map(|value| value.as_deref().map(escape).unwrap_or_default() + "\n")
            .collect()
    }
}

/// Reads and writes the expectation files of one day
pub struct ResultStore<'a> {
    day: &'a Day,
}

impl<'a> ResultStore<'a> {
    pub fn new(day: &'a Day) -> Self {
        Self { day }
    }

    /// Load the expectations for the mode; a missing file means none
    pub fn load(&self, mode: Mode) -> Result<Expectations, StoreError> {
        let path = self.day.results_path(mode);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Expectations::parse(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Expectations::default()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Record a produced answer as the expectation of its part
    ///
    /// Only real runs are recorded; example expectations are maintained by
    /// hand. The stored value of the part is replaced, other parts are kept.
    /// A diagnostic payload goes to `diagnostics.json`, keyed by part.
    pub fn persist(&self, part: u8, mode: Mode, answer: &Answer) -> Result<(), StoreError> {
        if mode == Mode::Example {
            debug!(day = self.day.number(), part, "example answers are not persisted");
            return Ok(());
        }

        let mut expectations = self.load(mode)?;
        expectations.set(part, answer.value.to_string());
        let path = self.day.results_path(mode);
        fs::write(&path, expectations.render()).map_err(|source| StoreError::Io { path, source })?;

        self.persist_diagnostic(part, answer)
    }

    fn persist_diagnostic(&self, part: u8, answer: &Answer) -> Result<(), StoreError> {
        let path = self.day.diagnostics_path();
        let mut diagnostics = read_diagnostics(&path)?;

        let key = part.to_string();
        let changed = match &answer.diagnostic {
            Some(diagnostic) => {
                diagnostics.insert(key, diagnostic.clone());
                true
            }
            None => diagnostics.remove(&key).is_some(),
        };
        if !changed {
            return Ok(());
        }

        let text = serde_json::to_string_pretty(&Value::Object(diagnostics)).map_err(|source| {
            StoreError::Json {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(&path, text + "\n").map_err(|source| StoreError::Io { path, source })
    }
}

fn read_diagnostics(path: &Path) -> Result<Map<String, Value>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match serde_json::from_str(&text) {
        Ok(Value::Object(map)) => Ok(map),
        _ => {
            warn!(path = %path.display(), "replacing unreadable diagnostics file");
            Ok(Map::new())
        }
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\n', "\\n")
}

fn unescape(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
