//! Input provider: example fixtures and lazily downloaded real inputs

use crate::cache::InputCache;
use crate::day::{Day, Mode};
use crate::error::{CacheError, CliError};
use aoc_http_client::AocClient;
use aoc_solver::{InputSet, InputSource};
use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Supplies the input sources of a day for a mode
///
/// The session cookie and the HTTP client are created on first download only,
/// at most once per provider.
pub struct InputProvider {
    year: u16,
    session_file: PathBuf,
    session: OnceCell<Zeroizing<String>>,
    client: OnceCell<AocClient>,
}

impl InputProvider {
    pub fn new(year: u16, session_file: PathBuf) -> Self {
        Self {
            year,
            session_file,
            session: OnceCell::new(),
            client: OnceCell::new(),
        }
    }

    /// Provider using a preconfigured client
    pub fn with_client(year: u16, session_file: PathBuf, client: AocClient) -> Self {
        let provider = Self::new(year, session_file);
        let _ = provider.client.set(client);
        provider
    }

    /// Check that `fetch` can succeed without solving anything
    ///
    /// Example mode needs the first fixture; real mode downloads a missing input.
    pub fn prepare(&self, day: &Day, mode: Mode) -> Result<(), CliError> {
        match mode {
            Mode::Example => {
                let path = day.example_input_path(1);
                if !path.is_file() {
                    return Err(CliError::MissingFixture {
                        day: day.number(),
                        path,
                    });
                }
                Ok(())
            }
            Mode::Real => {
                let cache = InputCache::new(day);
                if cache.contains() {
                    debug!(day = day.number(), "real input cached");
                    return Ok(());
                }
                self.download(day, &cache)
            }
        }
    }

    /// Open the input sources of the day for the mode
    pub fn fetch(&self, day: &Day, mode: Mode) -> Result<InputSet, CliError> {
        match mode {
            Mode::Example => self.example_sources(day),
            Mode::Real => {
                let cache = InputCache::new(day);
                if let Some(source) = cache.get()? {
                    return Ok(InputSet::single(source));
                }
                self.download(day, &cache)?;
                let source = cache.get()?.ok_or_else(|| CacheError::Io {
                    path: cache.cache_path(),
                    source: std::io::ErrorKind::NotFound.into(),
                })?;
                Ok(InputSet::single(source))
            }
        }
    }

    /// `example_input.txt`, `example_input_2.txt`, ... up to the first gap
    fn example_sources(&self, day: &Day) -> Result<InputSet, CliError> {
        let mut sources = Vec::new();
        for index in 1.. {
            let path = day.example_input_path(index);
            if !path.is_file() {
                break;
            }
            let source = InputSource::open(&path)
                .map_err(|source| CacheError::Io { path, source })?;
            sources.push(source);
        }
        debug!(day = day.number(), count = sources.len(), "example fixtures");

        InputSet::new(sources).ok_or_else(|| CliError::MissingFixture {
            day: day.number(),
            path: day.example_input_path(1),
        })
    }

    fn download(&self, day: &Day, cache: &InputCache<'_>) -> Result<(), CliError> {
        let session = self.session()?;
        let client = self.client()?;

        info!(year = self.year, day = day.number(), "downloading puzzle input");
        let input = client
            .fetch_input(self.year, day.number(), session)
            .map_err(|source| CliError::Fetch {
                day: day.number(),
                source,
            })?;
        cache.put(&input)?;
        Ok(())
    }

    fn session(&self) -> Result<&str, CliError> {
        if let Some(session) = self.session.get() {
            return Ok(session.as_str());
        }
        let session = read_session(&self.session_file)?;
        Ok(self.session.get_or_init(|| session).as_str())
    }

    fn client(&self) -> Result<&AocClient, CliError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = AocClient::new()?;
        Ok(self.client.get_or_init(|| client))
    }
}

/// Read the session cookie, trimmed; an empty file is an error
fn read_session(path: &Path) -> Result<Zeroizing<String>, CliError> {
    debug!(path = %path.display(), "reading session cookie");
    let raw = Zeroizing::new(fs::read_to_string(path).map_err(|e| CliError::Credential {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?);

    let session = Zeroizing::new(raw.trim().to_string());
    if session.is_empty() {
        return Err(CliError::Credential {
            path: path.to_path_buf(),
            reason: "file is empty".to_string(),
        });
    }
    Ok(session)
}
