//! Re-readable input sources handed to solvers

use crate::error::ParseError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// Object-safe union of the reader traits an input source is built on
pub trait SeekableRead: BufRead + Seek {}

impl<T: BufRead + Seek> SeekableRead for T {}

/// A readable, rewindable character stream
///
/// Sources are either backed by a file (puzzle input, example fixtures) or by
/// an in-memory buffer. The underlying handle is released when the source is
/// dropped.
pub struct InputSource {
    label: String,
    reader: Box<dyn SeekableRead>,
}

impl InputSource {
    /// Open a file as an input source
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            label: path.display().to_string(),
            reader: Box::new(BufReader::new(file)),
        })
    }

    /// Wrap in-memory text as an input source
    pub fn from_text(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            reader: Box::new(Cursor::new(text.into().into_bytes())),
        }
    }

    /// Where this source comes from (file path or caller supplied label)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Seek back to the first byte
    pub fn rewind(&mut self) -> io::Result<()> {
        self.reader.seek(SeekFrom::Start(0)).map(|_| ())
    }

    /// Read everything from the current position
    pub fn read_all(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(text)
    }
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}

impl std::fmt::Debug for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputSource")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// The non-empty, ordered set of sources given to one solver run
///
/// Part `n` reads source `n`, or the last source when there are fewer than
/// `n`. A day with a single input therefore feeds the same source to every
/// part.
#[derive(Debug)]
pub struct InputSet {
    sources: Vec<InputSource>,
}

impl InputSet {
    /// Build a set from sources; `None` if `sources` is empty
    pub fn new(sources: Vec<InputSource>) -> Option<Self> {
        if sources.is_empty() {
            None
        } else {
            Some(Self { sources })
        }
    }

    /// A set holding a single source
    pub fn single(source: InputSource) -> Self {
        Self {
            sources: vec![source],
        }
    }

    /// Number of sources in the set
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always false, a set holds at least one source
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source feeding the given 1-based part
    pub fn source_for(&mut self, part: u8) -> &mut InputSource {
        let last = self.sources.len() - 1;
        let index = usize::from(part.max(1) - 1).min(last);
        &mut self.sources[index]
    }

    /// Iterate over the sources in order
    pub fn iter(&self) -> impl Iterator<Item = &InputSource> {
        self.sources.iter()
    }
}
