//! Slot storage for persisted selections
//!
//! A small key-value surface over opaque blobs, one slot per filter category.

use crate::filter::SelectionSet;
use crate::storage::{selection, StorageError};
use crate::types::FilterCategory;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Durable storage for selection blobs.
pub trait BlobStore {
    /// Read a slot. `Ok(None)` when the slot was never written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace a slot's content.
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Restore a category's selection. Missing, unreadable or malformed slots
    /// yield an empty set.
    fn load_selection(&self, category: FilterCategory) -> SelectionSet {
        match self.read(category.slot_key()) {
            Ok(Some(bytes)) => selection::load(&bytes, category.mode()),
            Ok(None) => SelectionSet::new(category.mode()),
            Err(e) => {
                tracing::warn!(
                    "Failed to read slot {}, starting empty: {}",
                    category.slot_key(),
                    e
                );
                SelectionSet::new(category.mode())
            }
        }
    }

    fn save_selection(
        &mut self,
        category: FilterCategory,
        set: &SelectionSet,
    ) -> Result<(), StorageError> {
        self.write(category.slot_key(), &selection::save(set))?;
        tracing::debug!("Saved {} ({} selected)", category.slot_key(), set.len());
        Ok(())
    }
}

/// One file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(path)?))
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.slot_path(key), bytes)?;
        Ok(())
    }
}

/// In-process store, used when nothing should outlive the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FilterOption;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("scene"));

        assert!(store.read("selectedModelSizes").unwrap().is_none());
        store.write("selectedModelSizes", b"[\"Small < 5B\"]").unwrap();
        assert_eq!(
            store.read("selectedModelSizes").unwrap().as_deref(),
            Some(&b"[\"Small < 5B\"]"[..])
        );
    }

    #[test]
    fn test_selection_survives_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = SelectionSet::multiple();
        set.select(FilterOption::new("Apache"));
        set.select(FilterOption::new("MIT"));

        FileStore::new(dir.path())
            .save_selection(FilterCategory::License, &set)
            .unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.load_selection(FilterCategory::License), set);
        assert!(reopened.load_selection(FilterCategory::Size).is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("selectedYears.json"), b"\x00garbage").unwrap();
        let store = FileStore::new(dir.path());
        let loaded = store.load_selection(FilterCategory::Time);
        assert!(loaded.is_empty());
        assert_eq!(loaded.mode(), FilterCategory::Time.mode());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        let mut set = SelectionSet::single();
        set.select(FilterOption::new("Past 2 Years"));
        store.save_selection(FilterCategory::Time, &set).unwrap();
        assert_eq!(store.load_selection(FilterCategory::Time), set);
    }
}
