//! Project structure bootstrap.

use super::{ProjectManager, CONFIG_FILE, PATHS_DIR};
use ptpkit_core::example_paths;
use std::fs;
use std::path::Path;

impl ProjectManager {
    /// Create the project directory, its paths directory and a default
    /// `config.json` if they are missing, and seed example paths into an
    /// empty paths directory.
    ///
    /// Every step is best effort: a read-only or half-initialized directory is
    /// logged and otherwise ignored. Calling this again is harmless.
    pub fn ensure_project_structure(&mut self) {
        let Some(project_dir) = self.project_dir.clone() else {
            return;
        };

        if let Err(e) = fs::create_dir_all(&project_dir) {
            tracing::warn!(
                "Could not create project directory {}: {}",
                project_dir.display(),
                e
            );
        }

        let paths_dir = project_dir.join(PATHS_DIR);
        if let Err(e) = fs::create_dir_all(&paths_dir) {
            tracing::warn!(
                "Could not create paths directory {}: {}",
                paths_dir.display(),
                e
            );
        }

        if !project_dir.join(CONFIG_FILE).exists() {
            self.save_config(None);
        }

        match fs::read_dir(&paths_dir) {
            Ok(mut entries) => {
                if entries.next().is_none() {
                    self.seed_example_paths(&paths_dir);
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Could not list paths directory {}: {}",
                    paths_dir.display(),
                    e
                );
            }
        }
    }

    fn seed_example_paths(&self, paths_dir: &Path) {
        for (name, path) in example_paths() {
            let file = paths_dir.join(name);
            match self.write_path_file(&file, &path) {
                Ok(()) => tracing::debug!("Seeded example path {}", file.display()),
                Err(e) => tracing::warn!("Could not seed example path {}: {}", file.display(), e),
            }
        }
    }
}
