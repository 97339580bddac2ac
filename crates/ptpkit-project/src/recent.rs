//! Recent projects tracker
//!
//! The list lives in the settings store under
//! [`keys::RECENT_PROJECTS`] as a JSON array of directory strings, most
//! recently used first. It is filtered every time it is read: entries that no
//! longer exist are dropped and survivors are re-resolved, so a repository
//! whose layout changed since it was recorded points at its new project folder.

use crate::resolver::{resolve_project_dir, DirProbe};
use ptpkit_settings::{keys, SettingsResult, SettingsStore};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Maximum number of remembered projects.
pub const MAX_RECENT_PROJECTS: usize = 10;

/// Recent projects manager
#[derive(Debug, Clone, Copy)]
pub struct RecentProjects {
    max_entries: usize,
}

impl RecentProjects {
    pub fn new() -> Self {
        Self::with_max_entries(MAX_RECENT_PROJECTS)
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self { max_entries }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Read the list: existing, re-resolved, unique, at most `max_entries`.
    ///
    /// A missing or malformed stored value reads as an empty list.
    pub fn list(&self, store: &dyn SettingsStore, probe: &dyn DirProbe) -> Vec<PathBuf> {
        let Some(raw) = store.get(keys::RECENT_PROJECTS) else {
            return Vec::new();
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                tracing::warn!("Recent projects entry is not a list, ignoring it");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Recent projects entry is not valid JSON, ignoring it: {}", e);
                Vec::new()
            }
        };

        let mut projects: Vec<PathBuf> = Vec::new();
        for item in items {
            let Some(dir) = item.as_str().map(PathBuf::from) else {
                continue;
            };
            if !probe.is_dir(&dir) {
                continue;
            }
            let effective = resolve_project_dir(&dir, probe);
            if probe.is_dir(&effective) && !projects.contains(&effective) {
                projects.push(effective);
            }
        }
        projects.truncate(self.max_entries);
        projects
    }

    /// Move `dir` to the front of the list, adding it if absent.
    pub fn add(
        &self,
        store: &mut dyn SettingsStore,
        probe: &dyn DirProbe,
        dir: &Path,
    ) -> SettingsResult<()> {
        let mut projects = self.list(store, probe);
        projects.retain(|existing| existing != dir);
        projects.insert(0, dir.to_path_buf());
        projects.truncate(self.max_entries);

        let raw: Vec<String> = projects
            .iter()
            .map(|dir| dir.to_string_lossy().into_owned())
            .collect();
        store.set(keys::RECENT_PROJECTS, &serde_json::to_string(&raw)?)
    }
}

impl Default for RecentProjects {
    fn default() -> Self {
        Self::new()
    }
}
