use crate::command::{Command, EditCommand};

/// Several commands recorded as one history entry.
///
/// Sub-commands execute in order and undo in reverse order.
#[derive(Debug)]
pub struct CompoundCommand {
    commands: Vec<EditCommand>,
    description: String,
}

impl CompoundCommand {
    pub fn new(commands: Vec<EditCommand>, description: impl Into<String>) -> Self {
        Self {
            commands,
            description: description.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[EditCommand] {
        &self.commands
    }
}

impl Command for CompoundCommand {
    fn execute(&mut self) {
        for cmd in &mut self.commands {
            cmd.execute();
        }
    }

    fn undo(&mut self) {
        for cmd in self.commands.iter_mut().rev() {
            cmd.undo();
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}
