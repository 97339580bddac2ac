//! Path edit command

use crate::callback::invoke_isolated;
use crate::command::Command;
use ptpkit_core::{ChangeCallback, Path, Shared};

/// Replaces the live path's elements and constraints with a snapshot.
///
/// The command keeps its own copies of the before and after states, so later
/// edits to the live path never reach a recorded snapshot.
pub struct PathCommand {
    target: Shared<Path>,
    old_state: Path,
    new_state: Path,
    description: String,
    on_change: Option<ChangeCallback>,
    suppress_first_callback: bool,
    has_executed_once: bool,
}

impl PathCommand {
    pub fn new(
        target: Shared<Path>,
        old_state: &Path,
        new_state: &Path,
        description: impl Into<String>,
    ) -> Self {
        Self {
            target,
            old_state: old_state.clone(),
            new_state: new_state.clone(),
            description: description.into(),
            on_change: None,
            suppress_first_callback: false,
            has_executed_once: false,
        }
    }

    /// Callback fired after every state change.
    pub fn with_callback(mut self, on_change: ChangeCallback) -> Self {
        self.on_change = Some(on_change);
        self
    }

    /// Skip the callback on the very first `execute`.
    ///
    /// For commands recorded after the live path already shows the new state.
    /// Redo and undo still notify.
    pub fn suppress_first_callback(mut self) -> Self {
        self.suppress_first_callback = true;
        self
    }

    pub fn old_state(&self) -> &Path {
        &self.old_state
    }

    pub fn new_state(&self) -> &Path {
        &self.new_state
    }

    /// Write `snapshot` into the live path. Returns `false` if the path was busy.
    fn apply(&self, snapshot: &Path) -> bool {
        match self.target.try_borrow_mut() {
            Ok(mut live) => {
                live.path_elements = snapshot.path_elements.clone();
                live.constraints = snapshot.constraints.clone();
                live.ranged_constraints = snapshot.ranged_constraints.clone();
                true
            }
            Err(_) => {
                tracing::warn!("Path is busy, could not apply '{}'", self.description);
                false
            }
        }
    }

    fn notify(&self) {
        if let Some(on_change) = &self.on_change {
            invoke_isolated(on_change.as_ref(), &self.description);
        }
    }
}

impl Command for PathCommand {
    fn execute(&mut self) {
        let applied = self.apply(&self.new_state);
        let first = !self.has_executed_once;
        self.has_executed_once = true;
        if applied && !(first && self.suppress_first_callback) {
            self.notify();
        }
    }

    fn undo(&mut self) {
        if self.apply(&self.old_state) {
            self.notify();
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Debug for PathCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathCommand")
            .field("description", &self.description)
            .field("old_elements", &self.old_state.len())
            .field("new_elements", &self.new_state.len())
            .field("suppress_first_callback", &self.suppress_first_callback)
            .field("has_executed_once", &self.has_executed_once)
            .finish_non_exhaustive()
    }
}
