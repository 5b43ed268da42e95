//! Saved-tournament store.
//!
//! Saved tournaments are a set of [`TournamentRecord::id`] strings. The store
//! is injected wherever it is needed; [`JsonFileStore`] persists it as a JSON
//! array on disk and [`MemoryStore`] keeps it in process.
//!
//! [`TournamentRecord::id`]: crate::tournament::TournamentRecord::id

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::DirectoryResult;

/// File name of the on-disk store inside the data directory.
pub const SAVED_FILE_NAME: &str = "saved-tournaments.json";

/// A persistent set of saved tournament ids.
pub trait SavedStore {
    /// Read the full set of saved ids.
    fn load(&self) -> DirectoryResult<BTreeSet<String>>;

    /// Replace the full set of saved ids.
    fn store(&mut self, ids: &BTreeSet<String>) -> DirectoryResult<()>;

    /// Forget every saved id.
    fn clear(&mut self) -> DirectoryResult<()>;

    /// Saved ids; an unreadable store reads as empty.
    fn saved_ids(&self) -> BTreeSet<String> {
        self.load().unwrap_or_else(|e| {
            warn!("Could not read saved tournaments, treating as empty: {e}");
            BTreeSet::new()
        })
    }

    fn is_saved(&self, id: &str) -> bool {
        self.saved_ids().contains(id)
    }

    /// Flip the saved state of `id` and return the new state.
    fn toggle(&mut self, id: &str) -> DirectoryResult<bool> {
        let mut ids = self.saved_ids();
        let now_saved = if ids.remove(id) {
            false
        } else {
            ids.insert(id.to_string());
            true
        };
        self.store(&ids)?;
        Ok(now_saved)
    }
}

/// In-process store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    ids: BTreeSet<String>,
}

impl SavedStore for MemoryStore {
    fn load(&self) -> DirectoryResult<BTreeSet<String>> {
        Ok(self.ids.clone())
    }

    fn store(&mut self, ids: &BTreeSet<String>) -> DirectoryResult<()> {
        self.ids = ids.clone();
        Ok(())
    }

    fn clear(&mut self) -> DirectoryResult<()> {
        self.ids.clear();
        Ok(())
    }
}

/// Store backed by a JSON array of ids in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SavedStore for JsonFileStore {
    fn load(&self) -> DirectoryResult<BTreeSet<String>> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn store(&mut self, ids: &BTreeSet<String>) -> DirectoryResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(ids)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&mut self) -> DirectoryResult<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip_in_memory() {
        let mut store = MemoryStore::default();
        assert!(!store.is_saved("yale-iv-oct-3-5-2025"));

        assert!(store.toggle("yale-iv-oct-3-5-2025").unwrap());
        assert!(store.is_saved("yale-iv-oct-3-5-2025"));

        assert!(!store.toggle("yale-iv-oct-3-5-2025").unwrap());
        assert!(!store.is_saved("yale-iv-oct-3-5-2025"));
    }

    #[test]
    fn test_file_store_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SAVED_FILE_NAME);

        let mut store = JsonFileStore::new(&path);
        store.toggle("a").unwrap();
        store.toggle("b").unwrap();

        let reopened = JsonFileStore::new(&path);
        let ids: Vec<String> = reopened.saved_ids().into_iter().collect();
        assert_eq!(ids, ["a", "b"]);

        let on_disk: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, ["a", "b"]);
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(SAVED_FILE_NAME));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SAVED_FILE_NAME);
        std::fs::write(&path, "{not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(store.load().is_err());
        assert!(store.saved_ids().is_empty());

        // Toggling overwrites the corrupt content with a valid set.
        assert!(store.toggle("a").unwrap());
        assert!(store.is_saved("a"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join(SAVED_FILE_NAME));
        store.toggle("a").unwrap();

        store.clear().unwrap();
        assert!(store.saved_ids().is_empty());
        store.clear().unwrap();
    }
}
