//! Reads entries back out of a flat log file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use super::error::LogError;
use super::logging::LogLevel;

/// Filters a log file written by [`FileLogStore`](super::log_store::FileLogStore).
#[derive(Debug, Clone)]
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the entries recorded at exactly `level`, in file order.
    ///
    /// # Errors
    ///
    /// Returns `LogError::ReadFailed` if the file is missing or unreadable.
    pub fn read_logs(&self, level: LogLevel) -> Result<Vec<String>, LogError> {
        let file = File::open(&self.path)
            .map_err(|e| LogError::read_failed(format!("{}: {}", self.path.display(), e)))?;

        let prefix = format!("{level}:");
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line =
                line.map_err(|e| LogError::read_failed(format!("{}: {}", self.path.display(), e)))?;
            if line.starts_with(&prefix) {
                entries.push(line);
            }
        }
        Ok(entries)
    }
}
