//! Settings Persistence
//!
//! A small durable key-value store for application-wide state that outlives a
//! single project: the last selected project directory, the last opened
//! path file and the recent-projects list.
//!
//! The store is an explicit handle with an open/close lifecycle. It is passed
//! to whoever needs it instead of being reached through a global.

use crate::error::{SettingsError, SettingsResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Fixed keys used by the project manager.
pub mod keys {
    /// The directory the user last selected, before resolution.
    pub const LAST_PROJECT_DIR: &str = "project/last_project_dir";
    /// File name of the last opened path.
    pub const LAST_PATH_FILE: &str = "project/last_path_file";
    /// JSON array of recently used, resolved project directories.
    pub const RECENT_PROJECTS: &str = "project/recent_projects";
}

/// Durable key-value settings store.
pub trait SettingsStore: std::fmt::Debug {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> SettingsResult<()>;

    /// Remove `key`; removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> SettingsResult<()>;
}

/// In-memory store, for tests and sessions that should not touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SettingsResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed store holding a flat JSON object of string values.
///
/// Every `set`/`remove` writes the file through, so the store is durable at
/// each call; [`close`](Self::close) performs a final flush.
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonSettingsStore {
    /// Open the store at `path`.
    ///
    /// A missing file opens an empty store. A corrupt file also opens an empty
    /// store (and is overwritten on the next write) so a damaged settings file
    /// never blocks startup.
    pub fn open(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring unreadable settings file {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(SettingsError::LoadError(format!("{}: {}", path.display(), e))),
        };
        tracing::debug!("Opened settings store {} ({} keys)", path.display(), values.len());
        Ok(Self { path, values })
    }

    /// Open the store in the platform configuration directory.
    pub fn open_default() -> SettingsResult<Self> {
        Self::open(Self::default_path()?)
    }

    /// `<config dir>/ptpkit/settings.json`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("ptpkit").join("settings.json"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform configuration directory".to_string())
            })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all values to disk.
    pub fn flush(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }

    /// Flush and release the store.
    pub fn close(self) -> SettingsResult<()> {
        self.flush()
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> SettingsResult<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
