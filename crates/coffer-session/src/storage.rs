//! Durable key-value storage for the persisted player identifier.
//!
//! The session store only needs three operations on string keys, so
//! that's all [`IdentityStorage`] asks for. Presence or absence of the
//! key is the only signal anyone reads.
//!
//! Two implementations ship here:
//! - [`MemoryStorage`]: process-local, clones share one map. Tests use
//!   it to simulate a reload: build a fresh store over a clone.
//! - [`FileStorage`]: a JSON object in a file, which survives restarts.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A synchronous string key-value store.
///
/// Calls are expected to be fast and never suspend, so the trait is
/// deliberately not async.
pub trait IdentityStorage: Send + Sync + 'static {
    /// Returns the value under `key`, or `None` if it isn't set.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> io::Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| io::Error::other("memory storage lock poisoned"))
    }
}

impl IdentityStorage for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// Storage backed by a single JSON object file.
///
/// Every write rewrites the whole file through a sibling temp file and a
/// rename, so a crash mid-write leaves either the old or the new content.
/// A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Uses `path` as the backing file. The file is created on first write;
    /// its parent directory must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> io::Result<HashMap<String, String>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e),
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> io::Result<()> {
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)
    }
}

impl IdentityStorage for FileStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // MemoryStorage
    // =====================================================================

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let a = MemoryStorage::new();
        let b = a.clone();

        a.set("k", "v").unwrap();

        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_storage_remove_missing_key_is_ok() {
        assert!(MemoryStorage::new().remove("nothing").is_ok());
    }

    // =====================================================================
    // FileStorage
    // =====================================================================

    #[test]
    fn test_file_storage_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("identity.json"));

        assert_eq!(storage.get("k").unwrap(), None);
        assert!(storage.remove("k").is_ok());
        assert!(!storage.path().exists(), "remove on empty must not create the file");
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identity.json");

        FileStorage::new(&path).set("rpg_player_uuid", "uuid-A").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get("rpg_player_uuid").unwrap().as_deref(),
            Some("uuid-A")
        );
    }

    #[test]
    fn test_file_storage_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("identity.json"));
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();

        storage.remove("a").unwrap();

        assert_eq!(storage.get("a").unwrap(), None);
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_storage_corrupt_file_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identity.json");
        fs::write(&path, b"{not json").unwrap();

        let err = FileStorage::new(&path).get("k").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_file_storage_missing_parent_dir_fails_write() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nope").join("identity.json"));

        assert!(storage.set("k", "v").is_err());
    }
}
