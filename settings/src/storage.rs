//! Durable key-value storage for the configuration record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Key the configuration record is stored under.
pub const CONFIG_STORAGE_KEY: &str = "restaurant-config";

/// Synchronous key-value storage.
///
/// Values are written wholesale; a successful `write` is durable before it
/// returns.
pub trait ConfigStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> SettingsResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> SettingsResult<()>;
}

/// Stores each key as `<key>.json` in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the file a key is stored in.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn storage_error(key: &str, source: io::Error) -> SettingsError {
        SettingsError::Storage {
            key: key.to_string(),
            source,
        }
    }
}

impl ConfigStorage for FileStorage {
    fn read(&self, key: &str) -> SettingsResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored value");
                Ok(None)
            }
            Err(e) => Err(Self::storage_error(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> SettingsResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Self::storage_error(key, e))?;

        // Write beside the target and rename so readers never see a partial record.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|e| Self::storage_error(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| Self::storage_error(key, e))?;

        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage holding one value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    /// Get the raw stored value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.clone())
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigStorage for MemoryStorage {
    fn read(&self, key: &str) -> SettingsResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> SettingsResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
