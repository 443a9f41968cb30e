//! Undo and redo command implementations.
//!
//! Both move the `current` cursor one step and print the snapshot that is
//! now current. Having nothing to undo or redo is a warning, not a failure.

use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// Direction of a cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards older entries.
    Undo,
    /// Towards newer entries.
    Redo,
}

impl Direction {
    fn name(self) -> &'static str {
        match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

/// The undo/redo command implementation.
pub struct NavigateCommand<'a> {
    ctx: &'a CommandContext,
    direction: Direction,
}

impl<'a> NavigateCommand<'a> {
    /// Create an undo command.
    pub fn undo(ctx: &'a CommandContext) -> Self {
        Self {
            ctx,
            direction: Direction::Undo,
        }
    }

    /// Create a redo command.
    pub fn redo(ctx: &'a CommandContext) -> Self {
        Self {
            ctx,
            direction: Direction::Redo,
        }
    }

    /// Get the direction of this command.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Command for NavigateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut history = self.ctx.open_history()?;
        let moved = match self.direction {
            Direction::Undo => history.undo()?,
            Direction::Redo => history.redo()?,
        };

        let Some(snapshot) = moved else {
            ui.warning(&format!("Nothing to {}", self.direction.name()));
            return Ok(CommandResult::success());
        };

        if let Some(position) = history.current_index()? {
            ui.success(&format!("Moved to position {}", position));
        }
        ui.data(&serde_json::to_string_pretty(&snapshot)?);
        Ok(CommandResult::success())
    }
}
