//! Undo/Redo manager
//!
//! Two stacks of [`EditCommand`]s, most recent last. New commands execute and
//! land on the undo stack, which is bounded: past `max_history` entries the
//! oldest is dropped for good. Any new command clears the redo stack.
//!
//! Observers are plain `Fn()` callbacks, invoked after each transition's stack
//! changes are complete. A panicking observer is logged and skipped.
//!
//! While observers run the manager itself is still mutably borrowed, so an
//! observer reads the outcome from the [`HistoryState`] published through
//! [`UndoRedoManager::state_handle`] rather than from the manager.

use crate::callback::{invoke_isolated, CallbackId};
use crate::command::{Command, EditCommand};
use ptpkit_core::{shared, Shared};
use std::collections::HashMap;

/// Default bound on the undo stack.
pub const DEFAULT_MAX_HISTORY: usize = 50;

type Observer = Box<dyn Fn()>;

/// What an undo/redo UI needs to refresh, as of the last transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_description: Option<String>,
    pub redo_description: Option<String>,
    pub undo_count: usize,
    pub redo_count: usize,
}

/// Manages the undo and redo stacks
pub struct UndoRedoManager {
    undo_stack: Vec<EditCommand>,
    redo_stack: Vec<EditCommand>,
    max_history: usize,
    callbacks: HashMap<CallbackId, Observer>,
    state: Shared<HistoryState>,
}

impl UndoRedoManager {
    pub fn new(max_history: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_history,
            callbacks: HashMap::new(),
            state: shared(HistoryState::default()),
        }
    }

    /// Shared view of the current [`HistoryState`], updated before observers
    /// are notified.
    pub fn state_handle(&self) -> Shared<HistoryState> {
        self.state.clone()
    }

    /// Snapshot of the current stacks.
    pub fn state(&self) -> HistoryState {
        HistoryState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            undo_description: self.get_undo_description().map(str::to_string),
            redo_description: self.get_redo_description().map(str::to_string),
            undo_count: self.undo_stack.len(),
            redo_count: self.redo_stack.len(),
        }
    }

    /// Register an observer for every history transition.
    pub fn add_callback<F>(&mut self, callback: F) -> CallbackId
    where
        F: Fn() + 'static,
    {
        let id = CallbackId::new();
        self.callbacks.insert(id, Box::new(callback));
        tracing::debug!("History observer {} added", id);
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn remove_callback(&mut self, id: CallbackId) -> bool {
        let removed = self.callbacks.remove(&id).is_some();
        if removed {
            tracing::debug!("History observer {} removed", id);
        }
        removed
    }

    /// Execute `command` and record it as the newest undoable edit.
    pub fn execute_command(&mut self, command: impl Into<EditCommand>) {
        let mut command = command.into();
        command.execute();
        tracing::debug!("Executed '{}'", command.description());

        self.undo_stack.push(command);
        if self.undo_stack.len() > self.max_history {
            let evicted = self.undo_stack.remove(0);
            tracing::debug!("History full, dropped '{}'", evicted.description());
        }
        self.redo_stack.clear();

        self.notify_state_changed();
    }

    /// Undo the newest edit, returning it, or `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<&EditCommand> {
        let mut command = self.undo_stack.pop()?;
        command.undo();
        tracing::debug!("Undid '{}'", command.description());
        self.redo_stack.push(command);

        self.notify_state_changed();
        self.redo_stack.last()
    }

    /// Redo the most recently undone edit, returning it, or `None` if there is
    /// nothing to redo.
    pub fn redo(&mut self) -> Option<&EditCommand> {
        let mut command = self.redo_stack.pop()?;
        command.execute();
        tracing::debug!("Redid '{}'", command.description());
        self.undo_stack.push(command);

        self.notify_state_changed();
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Description of the edit [`undo`](Self::undo) would revert.
    pub fn get_undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(Command::description)
    }

    /// Description of the edit [`redo`](Self::redo) would reapply.
    pub fn get_redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(Command::description)
    }

    /// Drop all history, e.g. when switching projects.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notify_state_changed();
    }

    /// `(undo entries, redo entries)`
    pub fn history_size(&self) -> (usize, usize) {
        (self.undo_stack.len(), self.redo_stack.len())
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    fn notify_state_changed(&self) {
        match self.state.try_borrow_mut() {
            Ok(mut state) => *state = self.state(),
            Err(_) => tracing::warn!("History state is borrowed, observers see the previous state"),
        }
        for callback in self.callbacks.values() {
            invoke_isolated(callback.as_ref(), "history observer");
        }
    }
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl std::fmt::Debug for UndoRedoManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoRedoManager")
            .field("undo_stack", &self.undo_stack)
            .field("redo_stack", &self.redo_stack)
            .field("max_history", &self.max_history)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
