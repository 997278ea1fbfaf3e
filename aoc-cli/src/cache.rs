//! Input cache for storing real puzzle inputs locally

use crate::day::Day;
use crate::error::CacheError;
use aoc_solver::InputSource;
use std::fs;
use std::path::PathBuf;

/// File-based cache for one day's real input
///
/// Directory structure: `{day_dir}/input.txt`
pub struct InputCache<'a> {
    day: &'a Day,
}

impl<'a> InputCache<'a> {
    pub fn new(day: &'a Day) -> Self {
        Self { day }
    }

    /// Get the cache path
    pub fn cache_path(&self) -> PathBuf {
        self.day.input_path()
    }

    /// Check if input is cached
    pub fn contains(&self) -> bool {
        self.cache_path().is_file()
    }

    /// Open the cached input, or None if not cached
    pub fn get(&self) -> Result<Option<InputSource>, CacheError> {
        let path = self.cache_path();
        if !path.is_file() {
            return Ok(None);
        }
        InputSource::open(&path)
            .map(Some)
            .map_err(|source| CacheError::Io { path, source })
    }

    /// Store downloaded bytes in the cache
    ///
    /// Written to a temp file first and renamed into place, so an
    /// interrupted write never looks like a cache hit.
    pub fn put(&self, input: &[u8]) -> Result<(), CacheError> {
        let path = self.cache_path();
        let partial = path.with_extension("txt.part");

        fs::write(&partial, input).map_err(|source| CacheError::Io {
            path: partial.clone(),
            source,
        })?;
        fs::rename(&partial, &path).map_err(|source| CacheError::Io { path, source })
    }
}
