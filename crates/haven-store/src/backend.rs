//! Persistence collaborator: a flat string-keyed mapping of sealed records.
//!
//! [`MemoryBackend`] keeps the mapping in process memory; [`FileBackend`]
//! persists it as one JSON object file under the platform data directory,
//! durable across restarts and scoped to the local user profile.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BackendError;

/// Flat string-keyed mapping: account key → sealed record envelope.
pub trait StorageBackend {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Upsert `value` under `key`. Whole-value replace, no merge.
    fn set(&mut self, key: &str, value: String) -> Result<(), BackendError>;
}

/// In-memory backend for tests and RAM-only use.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no account has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), BackendError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed mapping: one JSON object in the platform data directory.
///
/// Writes go through a temp file and rename so a crash mid-save leaves the
/// previous mapping intact, and the file is restricted to the owning user
/// on Unix.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Open the backend in the default per-user data directory.
    pub fn new() -> Result<Self, BackendError> {
        Self::with_dir(default_data_dir())
    }

    /// Open the backend in an explicit directory (used by tests).
    pub fn with_dir(base_dir: PathBuf) -> Result<Self, BackendError> {
        fs::create_dir_all(&base_dir)
            .map_err(|e| BackendError(format!("cannot create data directory: {e}")))?;
        Ok(Self {
            path: base_dir.join("accounts.json"),
        })
    }

    /// Path of the accounts file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<HashMap<String, String>, BackendError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| BackendError(format!("failed to read {}: {e}", self.path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| BackendError(format!("failed to parse {}: {e}", self.path.display())))
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), BackendError> {
        let content = serde_json::to_string_pretty(map)
            .map_err(|e| BackendError(format!("failed to serialize account map: {e}")))?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, &content)
            .map_err(|e| BackendError(format!("failed to write: {e}")))?;
        fs::rename(&tmp_path, &self.path)
            .map_err(|e| BackendError(format!("failed to commit write: {e}")))?;

        set_restrictive_permissions(&self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), BackendError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "haven", "haven") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        dirs_fallback()
    }
}

fn dirs_fallback() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".haven")
}

#[cfg(unix)]
fn set_restrictive_permissions(path: &Path) -> Result<(), BackendError> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms)
        .map_err(|e| BackendError(format!("failed to set file permissions: {e}")))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_restrictive_permissions(_path: &Path) -> Result<(), BackendError> {
    Ok(())
}
