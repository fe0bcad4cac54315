use std::{fs, path::PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::errors::{StoreError, StoreResult};

/// Durable key-value namespace under the app data directory: the value for
/// key `k` lives in `<dir>/k.json`. Reads fail soft (missing or malformed
/// content yields the caller's default); writes surface their errors because
/// the in-memory mutation has already happened by the time we persist.
pub struct PersistentStore {
    dir: PathBuf,
}

impl PersistentStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = fs::read(self.path(key)).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, %err, "discarding malformed persisted value");
                None
            }
        }
    }

    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        self.load(key).unwrap_or_else(|| {
            debug!(key, "no usable persisted value, using default");
            default()
        })
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })?;
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        fs::write(self.path(key), bytes).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })
    }

    /// Delete the entry for `key` if present. Missing entries are fine.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Write {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Approximate byte footprint of the whole namespace: per entry,
    /// key length plus value length, doubled to approximate two-byte
    /// character storage. Display only.
    pub fn usage(&self) -> u64 {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return 0;
        };
        let mut total = 0u64;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let key_len = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.len() as u64)
                .unwrap_or(0);
            let value_len = entry.metadata().map(|m| m.len()).unwrap_or(0);
            total += (key_len + value_len) * 2;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PersistentStore) {
        let dir = TempDir::new().unwrap();
        let store = PersistentStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn missing_key_yields_default() {
        let (_dir, store) = store();
        let v = store.load_or("notes", Vec::<String>::new);
        assert!(v.is_empty());
    }

    #[test]
    fn malformed_content_yields_default() {
        let (dir, store) = store();
        fs::write(dir.path().join("notes.json"), b"{not json").unwrap();
        let v = store.load_or("notes", || vec!["fallback".to_string()]);
        assert_eq!(v, vec!["fallback".to_string()]);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let (_dir, store) = store();
        store.save("shortcuts", &vec![1u32, 2, 3]).unwrap();
        let v: Vec<u32> = store.load("shortcuts").unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn save_into_missing_dir_creates_it() {
        let dir = TempDir::new().unwrap();
        let store = PersistentStore::new(dir.path().join("nested").join("data"));
        store.save("theme", &"light").unwrap();
        assert_eq!(store.load::<String>("theme").unwrap(), "light");
    }

    #[test]
    fn save_fails_when_namespace_path_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocked = dir.path().join("blocked");
        fs::write(&blocked, b"").unwrap();
        let store = PersistentStore::new(blocked);
        assert!(matches!(
            store.save("theme", &"light"),
            Err(StoreError::Write { .. })
        ));
    }

    #[test]
    fn remove_deletes_entry_and_tolerates_absence() {
        let (_dir, store) = store();
        store.save("theme", &"dark").unwrap();
        store.remove("theme").unwrap();
        assert!(store.load::<String>("theme").is_none());
        store.remove("theme").unwrap();
    }

    #[test]
    fn usage_counts_key_and_value_doubled() {
        let (dir, store) = store();
        fs::write(dir.path().join("ab.json"), b"1234").unwrap();
        assert_eq!(store.usage(), (2 + 4) * 2);
    }

    #[test]
    fn usage_ignores_foreign_files() {
        let (dir, store) = store();
        fs::write(dir.path().join("readme.txt"), b"hello").unwrap();
        assert_eq!(store.usage(), 0);
    }
}
