//! # PTPKit History
//!
//! Command-based undo/redo for path and config edits.
//!
//! An edit is captured as an [`EditCommand`] holding independent before/after
//! snapshots. The [`UndoRedoManager`] executes it, keeps it on a bounded undo
//! stack and moves it between the undo and redo stacks on request, notifying
//! registered observers after every transition.

pub mod callback;
pub mod command;
pub mod compound;
pub mod config_command;
pub mod path_command;
pub mod undo_manager;

pub use callback::CallbackId;
pub use command::{Command, EditCommand};
pub use compound::CompoundCommand;
pub use config_command::ConfigCommand;
pub use path_command::PathCommand;
pub use undo_manager::{HistoryState, UndoRedoManager, DEFAULT_MAX_HISTORY};
