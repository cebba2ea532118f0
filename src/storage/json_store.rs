//! Store implementations: a JSON-file-backed store for the CLI and an
//! in-memory store for tests and ephemeral use.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;
use tracing::warn;

use super::{KeyValueStore, StorageError};

/// Key-value store persisted as a single JSON object file. The whole file is
/// rewritten on every `set`; state volumes here are tiny.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, Value>>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file starts empty; a corrupt file
    /// also starts empty, with a warning (persisted defaults are always
    /// recoverable, per the snapshot-load contract).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, Value>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt store file, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|source| StorageError::Encode {
            key: "<store file>".to_string(),
            source,
        })?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).map(Value::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let parsed: Value = serde_json::from_str(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), parsed);
        self.flush(&entries)
    }
}

/// In-memory store. Holds values verbatim, so tests can inject corrupt
/// payloads directly.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
