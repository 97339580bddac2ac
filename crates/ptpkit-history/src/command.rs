use crate::compound::CompoundCommand;
use crate::config_command::ConfigCommand;
use crate::path_command::PathCommand;

/// An undoable unit of state change.
///
/// `undo` is only called after a prior `execute` on the same instance. Neither
/// call reports failure; problems are logged and contained.
pub trait Command {
    /// Apply the captured new state.
    fn execute(&mut self);

    /// Restore the captured old state.
    fn undo(&mut self);

    /// Human-readable label, stable for the life of the command.
    fn description(&self) -> &str;
}

/// Every kind of edit the history can hold.
#[derive(Debug)]
pub enum EditCommand {
    Path(PathCommand),
    Config(ConfigCommand),
    Compound(CompoundCommand),
}

impl Command for EditCommand {
    fn execute(&mut self) {
        match self {
            EditCommand::Path(cmd) => cmd.execute(),
            EditCommand::Config(cmd) => cmd.execute(),
            EditCommand::Compound(cmd) => cmd.execute(),
        }
    }

    fn undo(&mut self) {
        match self {
            EditCommand::Path(cmd) => cmd.undo(),
            EditCommand::Config(cmd) => cmd.undo(),
            EditCommand::Compound(cmd) => cmd.undo(),
        }
    }

    fn description(&self) -> &str {
        match self {
            EditCommand::Path(cmd) => cmd.description(),
            EditCommand::Config(cmd) => cmd.description(),
            EditCommand::Compound(cmd) => cmd.description(),
        }
    }
}

impl From<PathCommand> for EditCommand {
    fn from(cmd: PathCommand) -> Self {
        EditCommand::Path(cmd)
    }
}

impl From<ConfigCommand> for EditCommand {
    fn from(cmd: ConfigCommand) -> Self {
        EditCommand::Config(cmd)
    }
}

impl From<CompoundCommand> for EditCommand {
    fn from(cmd: CompoundCommand) -> Self {
        EditCommand::Compound(cmd)
    }
}
