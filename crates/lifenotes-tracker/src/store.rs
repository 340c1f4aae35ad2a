//! Key-value stores backing the trackers
//!
//! Values are opaque strings keyed by tracker name. [`MemoryStore`] keeps
//! them in process; [`FileStore`] mirrors them into one JSON object file,
//! rewritten through a temp file and a rename on every change.

use crate::error::{StoreError, StoreResult};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Synchronous string store
pub trait KeyValueStore: Send + Sync {
    /// Value under `key`, if any
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Drop `key`
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `entries`
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Whether no key is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Store persisted as a JSON object file
///
/// The file is read once on [`FileStore::open`]; a missing file starts
/// empty, and an unreadable JSON body is logged and replaced on the next
/// write. Non-string members are ignored.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or start) the store file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(body) => decode_file(&path, &body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::io(path, e)),
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "opened store");
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> StoreResult<()> {
        let body = serde_json::to_string_pretty(values)
            .map_err(|e| StoreError::encode(self.path.display().to_string(), e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, body).map_err(|e| StoreError::io(&temp, e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }
}

fn decode_file(path: &Path, body: &str) -> BTreeMap<String, String> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect(),
        Ok(_) | Err(_) => {
            tracing::warn!(path = %path.display(), "store file is not a JSON object, starting empty");
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self.values.lock();
        let previous = values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush(&values) {
            match previous {
                Some(old) => values.insert(key.to_string(), old),
                None => values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut values = self.values.lock();
        if let Some(old) = values.remove(key) {
            if let Err(e) = self.flush(&values) {
                values.insert(key.to_string(), old);
                return Err(e);
            }
        }
        Ok(())
    }
}
