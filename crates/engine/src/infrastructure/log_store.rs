//! Log store implementations.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use super::error::LogError;
use super::ports::LogStore;

/// Appends entries to a flat text file, one per line.
///
/// The file is opened per entry and created if missing, so several runs
/// accumulate into the same log.
#[derive(Debug, Clone)]
pub struct FileLogStore {
    path: PathBuf,
}

impl FileLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogStore for FileLogStore {
    fn append(&mut self, line: &str) -> Result<(), LogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LogError::write_failed(format!("{}: {}", self.path.display(), e)))?;

        writeln!(file, "{line}")
            .map_err(|e| LogError::write_failed(format!("{}: {}", self.path.display(), e)))
    }
}

/// Keeps entries in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogStore {
    entries: Vec<String>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl LogStore for MemoryLogStore {
    fn append(&mut self, line: &str) -> Result<(), LogError> {
        self.entries.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.txt");
        let mut store = FileLogStore::new(&path);

        store.append("INFO: one").unwrap();
        store.append("ERROR: two").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "INFO: one\nERROR: two\n");
    }

    #[test]
    fn file_store_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.txt");
        std::fs::write(&path, "WARNING: earlier\n").unwrap();

        FileLogStore::new(&path).append("INFO: later").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "WARNING: earlier\nINFO: later\n");
    }

    #[test]
    fn file_store_surfaces_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let mut store = FileLogStore::new(dir.path());

        let err = store.append("INFO: lost").unwrap_err();
        assert!(matches!(err, LogError::WriteFailed(_)));
    }

    #[test]
    fn memory_store_collects_entries() {
        let mut store = MemoryLogStore::new();
        store.append("INFO: a").unwrap();
        store.append("ERROR: b").unwrap();
        assert_eq!(store.entries(), ["INFO: a", "ERROR: b"]);
    }
}
