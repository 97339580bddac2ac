//! Project manager
//!
//! Owns the selected project directory, the in-memory [`ProjectConfig`] and
//! the name of the currently open path file, and remembers the last project,
//! last path and recent projects in a [`SettingsStore`].
//!
//! The implementation is split by concern:
//! - [`bootstrap`]: creating the directory structure and seeding examples
//! - [`config_io`]: `config.json` load/save
//! - [`path_io`]: listing, loading, saving and deleting path files

mod bootstrap;
mod config_io;
mod path_io;

use crate::recent::RecentProjects;
use crate::resolver::{absolutize, resolve_project_dir, DirProbe, FsProbe};
use ptpkit_core::{JsonPathCodec, PathCodec};
use ptpkit_settings::{keys, ProjectConfig, SettingsStore};
use std::path::{Path, PathBuf};

/// File name of the project configuration, directly under the project directory.
pub const CONFIG_FILE: &str = "config.json";

/// Name of the directory holding path files, directly under the project directory.
pub const PATHS_DIR: &str = "paths";

/// Name used when a path is saved without one and none is open.
pub const DEFAULT_PATH_FILE: &str = "untitled.json";

/// Handles the project directory, `config.json`, and path file load/save.
pub struct ProjectManager {
    settings: Box<dyn SettingsStore>,
    codec: Box<dyn PathCodec>,
    probe: Box<dyn DirProbe>,
    recents: RecentProjects,
    project_dir: Option<PathBuf>,
    config: ProjectConfig,
    current_path_file: Option<String>,
}

impl ProjectManager {
    /// Create a manager with no project selected, using the JSON path codec.
    pub fn new(settings: Box<dyn SettingsStore>) -> Self {
        Self {
            settings,
            codec: Box::new(JsonPathCodec::new()),
            probe: Box::new(FsProbe),
            recents: RecentProjects::new(),
            project_dir: None,
            config: ProjectConfig::default(),
            current_path_file: None,
        }
    }

    /// Replace the path codec.
    pub fn with_codec(mut self, codec: Box<dyn PathCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// Replace the recent-projects policy.
    pub fn with_recent_projects(mut self, recents: RecentProjects) -> Self {
        self.recents = recents;
        self
    }

    /// Switch to the project at `directory`.
    ///
    /// The selection is made absolute and remembered as given; the project
    /// directory actually used is the resolved one, which is returned. The
    /// structure is bootstrapped, the project is recorded as most recent and
    /// its config is loaded over the built-in defaults.
    pub fn set_project_dir(&mut self, directory: impl AsRef<Path>) -> PathBuf {
        let selected = absolutize(directory.as_ref());
        let effective = resolve_project_dir(&selected, self.probe.as_ref());

        self.project_dir = Some(effective.clone());
        self.config = ProjectConfig::default();
        self.current_path_file = None;
        self.store_setting(keys::LAST_PROJECT_DIR, &selected.to_string_lossy());

        self.ensure_project_structure();
        if let Err(e) = self
            .recents
            .add(self.settings.as_mut(), self.probe.as_ref(), &effective)
        {
            tracing::warn!("Failed to record recent project {}: {}", effective.display(), e);
        }
        self.load_config();

        tracing::info!(
            "Opened project {} (selected {})",
            effective.display(),
            selected.display()
        );
        effective
    }

    /// Reopen the last selected project, if it is still a valid project.
    ///
    /// Never creates anything on disk: a remembered directory that no longer
    /// holds a config file and a paths directory is left alone.
    pub fn load_last_project(&mut self) -> bool {
        let Some(last_dir) = self.settings.get(keys::LAST_PROJECT_DIR) else {
            return false;
        };
        let selected = PathBuf::from(last_dir);
        let effective = resolve_project_dir(&absolutize(&selected), self.probe.as_ref());

        if is_valid_project_dir(&effective) {
            self.set_project_dir(&selected);
            true
        } else {
            tracing::debug!(
                "Last project {} is no longer a valid project",
                effective.display()
            );
            false
        }
    }

    /// The resolved project directory, if one is selected.
    pub fn project_dir(&self) -> Option<&Path> {
        self.project_dir.as_deref()
    }

    /// `<project dir>/paths`, if a project is selected.
    pub fn paths_dir(&self) -> Option<PathBuf> {
        self.project_dir.as_ref().map(|dir| dir.join(PATHS_DIR))
    }

    /// `<project dir>/config.json`, if a project is selected.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.project_dir.as_ref().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Whether the selected project has its directory, config file and paths directory.
    pub fn has_valid_project(&self) -> bool {
        self.project_dir
            .as_deref()
            .is_some_and(is_valid_project_dir)
    }

    /// Recently used projects, most recent first.
    pub fn recent_projects(&self) -> Vec<PathBuf> {
        self.recents
            .list(self.settings.as_ref(), self.probe.as_ref())
    }

    /// Name of the currently open path file.
    pub fn current_path_file(&self) -> Option<&str> {
        self.current_path_file.as_deref()
    }

    /// The settings store backing this manager.
    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }

    fn store_setting(&mut self, key: &str, value: &str) {
        if let Err(e) = self.settings.set(key, value) {
            tracing::warn!("Failed to store setting {}: {}", key, e);
        }
    }

    fn remove_setting(&mut self, key: &str) {
        if let Err(e) = self.settings.remove(key) {
            tracing::warn!("Failed to remove setting {}: {}", key, e);
        }
    }
}

impl std::fmt::Debug for ProjectManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectManager")
            .field("project_dir", &self.project_dir)
            .field("config", &self.config)
            .field("current_path_file", &self.current_path_file)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

fn is_valid_project_dir(dir: &Path) -> bool {
    dir.is_dir() && dir.join(CONFIG_FILE).is_file() && dir.join(PATHS_DIR).is_dir()
}
