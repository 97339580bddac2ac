//! Config edit command

use crate::callback::invoke_isolated;
use crate::command::Command;
use ptpkit_core::{ChangeCallback, Shared};
use ptpkit_project::ProjectManager;
use ptpkit_settings::ProjectConfig;

/// Swaps the project config between two snapshots and persists it each time.
///
/// Both `execute` and `undo` overwrite the manager's in-memory config, write
/// `config.json` and then fire the callback, so the file always matches the
/// state the history is in. Snapshots are sanitized on construction. If the
/// manager is already borrowed nothing is applied and the callback is skipped.
pub struct ConfigCommand {
    project: Shared<ProjectManager>,
    old_config: ProjectConfig,
    new_config: ProjectConfig,
    description: String,
    on_change: Option<ChangeCallback>,
}

impl ConfigCommand {
    pub fn new(
        project: Shared<ProjectManager>,
        old_config: ProjectConfig,
        new_config: ProjectConfig,
        description: impl Into<String>,
    ) -> Self {
        Self {
            project,
            old_config: old_config.sanitized(),
            new_config: new_config.sanitized(),
            description: description.into(),
            on_change: None,
        }
    }

    pub fn with_callback(mut self, on_change: ChangeCallback) -> Self {
        self.on_change = Some(on_change);
        self
    }

    pub fn old_config(&self) -> &ProjectConfig {
        &self.old_config
    }

    pub fn new_config(&self) -> &ProjectConfig {
        &self.new_config
    }

    fn apply(&self, config: ProjectConfig) {
        match self.project.try_borrow_mut() {
            Ok(mut project) => {
                project.set_config(config);
                project.save_config(None);
            }
            Err(_) => {
                tracing::warn!(
                    "Project manager is busy, could not apply '{}'",
                    self.description
                );
                return;
            }
        }
        if let Some(on_change) = &self.on_change {
            invoke_isolated(on_change.as_ref(), &self.description);
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&mut self) {
        self.apply(self.new_config);
    }

    fn undo(&mut self) {
        self.apply(self.old_config);
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Debug for ConfigCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigCommand")
            .field("description", &self.description)
            .field("old_config", &self.old_config)
            .field("new_config", &self.new_config)
            .finish_non_exhaustive()
    }
}
