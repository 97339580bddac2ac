//! Path file operations (list, load, save, delete) for the project manager.

use super::{ProjectManager, DEFAULT_PATH_FILE};
use crate::error::{ProjectError, ProjectResult};
use ptpkit_core::Path as RobotPath;
use ptpkit_settings::keys;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const PATH_FILE_SUFFIX: &str = ".json";

impl ProjectManager {
    /// Names of the path files in the paths directory, sorted.
    ///
    /// A missing project or paths directory yields an empty list.
    pub fn list_paths(&self) -> Vec<String> {
        let Some(paths_dir) = self.paths_dir() else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(&paths_dir) else {
            return Vec::new();
        };

        let mut files: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| has_path_extension(name))
            .collect();
        files.sort();
        files
    }

    /// Load the path file `name` from the paths directory.
    ///
    /// On success the file becomes the currently open one and is remembered as
    /// the last opened path. On failure nothing changes.
    pub fn load_path(&mut self, name: &str) -> ProjectResult<RobotPath> {
        let file = self.path_file(name)?;
        if !file.is_file() {
            return Err(ProjectError::PathNotFound(name.to_string()));
        }

        let content = fs::read_to_string(&file)?;
        let document: Value = serde_json::from_str(&content)?;
        let config = self.config;
        let defaults = move |key: &str| config.get_default_optional_value(key);
        let path = self.codec.deserialize(&document, &defaults)?;

        self.mark_open(name);
        tracing::debug!("Loaded path {} ({} elements)", name, path.len());
        Ok(path)
    }

    /// Save `path` into the paths directory and return the file name used.
    ///
    /// Without a `name`, the currently open file is overwritten, or
    /// [`DEFAULT_PATH_FILE`] is used when nothing is open. On success the file
    /// becomes the currently open one. On failure nothing changes.
    pub fn save_path(&mut self, path: &RobotPath, name: Option<&str>) -> ProjectResult<String> {
        let name = name
            .map(str::to_string)
            .or_else(|| self.current_path_file.clone())
            .unwrap_or_else(|| DEFAULT_PATH_FILE.to_string());

        let file = self.path_file(&name)?;
        if let Some(paths_dir) = file.parent() {
            fs::create_dir_all(paths_dir)?;
        }
        self.write_path_file(&file, path)?;

        self.mark_open(&name);
        tracing::debug!("Saved path {} ({} elements)", name, path.len());
        Ok(name)
    }

    /// Delete the path file `name`.
    ///
    /// Deleting the currently open file also forgets it as the last opened path.
    pub fn delete_path(&mut self, name: &str) -> ProjectResult<()> {
        let file = self.path_file(name)?;
        if !file.is_file() {
            return Err(ProjectError::PathNotFound(name.to_string()));
        }
        fs::remove_file(&file)?;

        if self.current_path_file.as_deref() == Some(name) {
            self.current_path_file = None;
            self.remove_setting(keys::LAST_PATH_FILE);
        }
        tracing::debug!("Deleted path {}", name);
        Ok(())
    }

    /// Load the path to start editing with.
    ///
    /// Tries the last opened path, then the first path file in sort order,
    /// and finally creates an empty path saved as [`DEFAULT_PATH_FILE`].
    /// Always returns a usable path together with its file name.
    pub fn load_last_or_first_or_create(&mut self) -> (RobotPath, String) {
        if let Some(last) = self.settings.get(keys::LAST_PATH_FILE) {
            match self.load_path(&last) {
                Ok(path) => return (path, last),
                Err(e) => tracing::debug!("Last path {} unavailable: {}", last, e),
            }
        }

        if let Some(first) = self.list_paths().into_iter().next() {
            match self.load_path(&first) {
                Ok(path) => return (path, first),
                Err(e) => tracing::warn!("Could not load path {}: {}", first, e),
            }
        }

        let path = RobotPath::new();
        let name = match self.save_path(&path, Some(DEFAULT_PATH_FILE)) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Could not create {}: {}", DEFAULT_PATH_FILE, e);
                DEFAULT_PATH_FILE.to_string()
            }
        };
        (path, name)
    }

    pub(super) fn write_path_file(&self, file: &Path, path: &RobotPath) -> ProjectResult<()> {
        let document = self.codec.serialize(path)?;
        let content = serde_json::to_string_pretty(&document)?;
        fs::write(file, content)?;
        Ok(())
    }

    /// Full path of the file `name` in the paths directory.
    fn path_file(&self, name: &str) -> ProjectResult<PathBuf> {
        let paths_dir = self.paths_dir().ok_or(ProjectError::NoProject)?;
        let is_plain_name = Path::new(name)
            .file_name()
            .is_some_and(|file_name| file_name == name);
        if !is_plain_name {
            return Err(ProjectError::InvalidFileName(name.to_string()));
        }
        Ok(paths_dir.join(name))
    }

    fn mark_open(&mut self, name: &str) {
        self.current_path_file = Some(name.to_string());
        self.store_setting(keys::LAST_PATH_FILE, name);
    }
}

fn has_path_extension(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(PATH_FILE_SUFFIX)
}
