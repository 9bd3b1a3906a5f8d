// src/services/storage.rs
// DOCUMENTATION: Recent-results storage port and adapters
// PURPOSE: Persist the capped history under the `recentResults` key

use crate::errors::StorageError;
use crate::models::{RecentResults, RECENT_RESULTS_KEY};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Synchronous key/value access to the persisted history
pub trait RecentResultsStore {
    /// Never fails: missing or unreadable data loads as an empty history
    fn load(&self) -> RecentResults;

    fn save(&self, recent: &RecentResults) -> Result<(), StorageError>;
}

impl<T: RecentResultsStore + ?Sized> RecentResultsStore for Arc<T> {
    fn load(&self) -> RecentResults {
        (**self).load()
    }

    fn save(&self, recent: &RecentResults) -> Result<(), StorageError> {
        (**self).save(recent)
    }
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    recent: Mutex<RecentResults>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(recent: RecentResults) -> Self {
        Self {
            recent: Mutex::new(recent),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl RecentResultsStore for MemoryStore {
    fn load(&self) -> RecentResults {
        self.recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, recent: &RecentResults) -> Result<(), StorageError> {
        *self.recent.lock().unwrap_or_else(PoisonError::into_inner) = recent.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// JSON file `<dir>/recentResults.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", RECENT_RESULTS_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecentResultsStore for JsonFileStore {
    fn load(&self) -> RecentResults {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return RecentResults::new(),
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                return RecentResults::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!(
                "Ignoring unreadable recent results in {}: {}",
                self.path.display(),
                e
            );
            RecentResults::new()
        })
    }

    fn save(&self, recent: &RecentResults) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        // Write then rename so a crash never leaves half a file behind
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(recent)?)?;
        fs::rename(&tmp, &self.path)?;

        log::debug!("Saved {} recent results to {}", recent.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Restaurant;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("lunchlord-{}-{}-{}", name, std::process::id(), nanos))
    }

    fn restaurant(name: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            type_field: "Pizza Restaurant".to_string(),
            address: "1 Main St".to_string(),
            rating: Some(4.2),
            photo: None,
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().is_empty());

        let mut recent = RecentResults::new();
        recent.push(restaurant("Joe's"));
        store.save(&recent).unwrap();

        assert_eq!(store.load(), recent);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let store = JsonFileStore::new(scratch_dir("missing"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_store_persists_under_key() {
        let dir = scratch_dir("persist");
        let store = JsonFileStore::new(&dir);
        assert!(store.path().ends_with("recentResults.json"));

        let mut recent = RecentResults::new();
        recent.push(restaurant("Joe's"));
        recent.push(restaurant("Thai Spot"));
        store.save(&recent).unwrap();

        let reopened = JsonFileStore::new(&dir);
        assert_eq!(reopened.load(), recent);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_file_store_corrupt_file_is_empty() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let store = JsonFileStore::new(&dir);
        fs::write(store.path(), "{not json").unwrap();

        assert!(store.load().is_empty());

        fs::remove_dir_all(dir).ok();
    }
}
