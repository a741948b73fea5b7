//! Profile document sources.

use std::fmt;
use std::path::PathBuf;

/// Why a source could not produce a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Transport status code, when the transport has one.
    pub status: Option<u16>,
    pub reason: String,
}

impl FetchFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            status: None,
            reason: reason.into(),
        }
    }

    pub fn with_status(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({})", self.reason, status),
            None => f.write_str(&self.reason),
        }
    }
}

/// Supplies the raw profile payload.
///
/// Implementations perform their own transport and timeout handling; the
/// loader calls `fetch` exactly once per page view and never retries.
pub trait Source {
    /// Fetch the raw payload bytes.
    fn fetch(&mut self) -> Result<Vec<u8>, FetchFailure>;

    /// Human-readable location, used in diagnostics.
    fn describe(&self) -> String;
}

/// Reads the payload from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for FileSource {
    fn fetch(&mut self) -> Result<Vec<u8>, FetchFailure> {
        std::fs::read(&self.path)
            .map_err(|e| FetchFailure::new(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory source, either a fixed payload or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticSource {
    response: Result<Vec<u8>, FetchFailure>,
    fetches: usize,
}

impl StaticSource {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Ok(payload.into()),
            fetches: 0,
        }
    }

    pub fn failing(failure: FetchFailure) -> Self {
        Self {
            response: Err(failure),
            fetches: 0,
        }
    }

    /// Number of times `fetch` was called.
    pub fn fetches(&self) -> usize {
        self.fetches
    }
}

impl Source for StaticSource {
    fn fetch(&mut self) -> Result<Vec<u8>, FetchFailure> {
        self.fetches += 1;
        self.response.clone()
    }

    fn describe(&self) -> String {
        "static payload".to_string()
    }
}
