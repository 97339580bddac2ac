//! `config.json` load and save.

use super::ProjectManager;
use ptpkit_settings::{ConfigPatch, ProjectConfig};

impl ProjectManager {
    /// Merge the on-disk config into the in-memory one.
    ///
    /// Only fields present and numeric in the file are taken; everything else
    /// keeps its current value. A missing, unreadable or malformed file leaves
    /// the in-memory config untouched.
    pub fn load_config(&mut self) -> &ProjectConfig {
        let Some(config_path) = self.config_path() else {
            return &self.config;
        };
        if !config_path.exists() {
            return &self.config;
        }

        match self.config.merge_from_file(&config_path) {
            Ok(updated) => tracing::debug!(
                "Loaded {} config fields from {}",
                updated,
                config_path.display()
            ),
            Err(e) => tracing::warn!("Keeping previous config: {}", e),
        }
        &self.config
    }

    /// Merge `patch` into the in-memory config (if given), then write every
    /// field to `config.json`.
    ///
    /// Without a selected project only the in-memory merge happens. Write
    /// failures are logged.
    pub fn save_config(&mut self, patch: Option<&ConfigPatch>) {
        if let Some(patch) = patch {
            self.config.update_from_map(patch);
        }
        let Some(config_path) = self.config_path() else {
            return;
        };

        match self.config.save_to_file(&config_path) {
            Ok(()) => tracing::debug!("Saved config to {}", config_path.display()),
            Err(e) => tracing::warn!("Could not save config: {}", e),
        }
    }

    /// The in-memory config.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Replace the in-memory config without persisting it.
    ///
    /// Non-finite fields fall back to their defaults so memory always matches
    /// what [`save_config`](Self::save_config) writes.
    pub fn set_config(&mut self, config: ProjectConfig) {
        self.config = config.sanitized();
    }

    /// Every config field as a JSON number, keyed by field name.
    pub fn config_as_map(&self) -> ConfigPatch {
        self.config.to_map()
    }

    /// Project-wide default for a per-path value; see
    /// [`ProjectConfig::get_default_optional_value`].
    pub fn get_default_optional_value(&self, key: &str) -> Option<f64> {
        self.config.get_default_optional_value(key)
    }
}
