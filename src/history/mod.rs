// src/history/mod.rs
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// How many passwords the rolling history keeps.
pub const MAX_HISTORY: usize = 5;

pub const DEFAULT_HISTORY_FILE: &str = "password_history.json";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Storage seam for the password history, so callers can decide how load
/// and save failures are surfaced and tests can stay off the filesystem.
pub trait HistoryStore {
    fn load(&self) -> Result<Vec<String>>;
    fn save(&self, entries: &[String]) -> Result<()>;
}

/// History persisted as a JSON array of strings.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<Vec<String>> {
        // A file that was never written is a normal first-run state
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding callers.
#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: RefCell<Vec<String>>,
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

/// Bounded, de-duplicated, most-recent-first password history.
///
/// Store failures degrade to an empty history on load and are swallowed on
/// save; both are logged at warn level.
pub struct History<S: HistoryStore> {
    store: S,
    capacity: usize,
}

impl History<FileHistoryStore> {
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self::with_store(FileHistoryStore::new(path), capacity)
    }
}

impl<S: HistoryStore> History<S> {
    pub fn with_store(store: S, capacity: usize) -> Self {
        Self { store, capacity }
    }

    /// Stored passwords, most recent first.
    pub fn entries(&self) -> Vec<String> {
        match self.store.load() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to load password history: {}", e);
                Vec::new()
            }
        }
    }

    /// Remember a freshly generated password. A password that is already in
    /// the history is left where it is; a new one goes to the front and the
    /// oldest entry falls off once the list is full.
    pub fn record(&self, password: &str) {
        let mut entries = self.entries();

        if entries.iter().any(|p| p == password) {
            return;
        }

        entries.insert(0, password.to_string());
        entries.truncate(self.capacity);

        if let Err(e) = self.store.save(&entries) {
            log::warn!("Failed to save password history: {}", e);
        }
    }

    /// Reset the history to empty.
    pub fn clear(&self) {
        if let Err(e) = self.store.save(&[]) {
            log::warn!("Failed to clear password history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn in_memory() -> History<MemoryHistoryStore> {
        History::with_store(MemoryHistoryStore::default(), MAX_HISTORY)
    }

    #[test]
    fn recording_prepends_most_recent_first() {
        let history = in_memory();
        history.record("first");
        history.record("second");
        assert_eq!(history.entries(), ["second", "first"]);
    }

    #[test]
    fn duplicates_are_not_recorded_again() {
        let history = in_memory();
        history.record("first");
        history.record("second");
        history.record("first");
        assert_eq!(history.entries(), ["second", "first"]);
    }

    #[test]
    fn history_is_bounded_and_evicts_oldest() {
        let history = in_memory();
        for i in 0..6 {
            history.record(&format!("password-{}", i));
        }
        assert_eq!(
            history.entries(),
            [
                "password-5",
                "password-4",
                "password-3",
                "password-2",
                "password-1"
            ]
        );
    }

    #[test]
    fn clear_empties_the_history() {
        let history = in_memory();
        history.record("first");
        history.clear();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let history = History::open(dir.path().join("does-not-exist.json"), MAX_HISTORY);
        assert!(history.entries().is_empty());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json at all").unwrap();

        let history = History::open(path, MAX_HISTORY);
        assert!(history.entries().is_empty());
    }

    #[test]
    fn file_store_round_trips_a_json_string_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let history = History::open(path.clone(), MAX_HISTORY);
        history.record("s3cr3t!");
        history.record("0th3r!");

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, ["0th3r!", "s3cr3t!"]);
    }

    #[test]
    fn recording_over_a_corrupt_file_starts_fresh() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{broken").unwrap();

        let history = History::open(path, MAX_HISTORY);
        history.record("fresh-start");
        assert_eq!(history.entries(), ["fresh-start"]);
    }
}
