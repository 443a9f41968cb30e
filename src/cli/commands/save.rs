//! Save command implementation.
//!
//! The `rewind save <file|->` command reads a JSON state, strips the
//! configured exclusions, and saves it as the newest history entry.

use crate::cli::args::InputArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::input::read_state;

/// The save command implementation.
pub struct SaveCommand<'a> {
    ctx: &'a CommandContext,
    args: InputArgs,
}

impl<'a> SaveCommand<'a> {
    /// Create a new save command.
    pub fn new(ctx: &'a CommandContext, args: InputArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for SaveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let state = read_state(&self.args.input)?;
        let snapshot = self.ctx.filter().snapshot(&state)?;

        let mut history = self.ctx.open_history()?;
        let before = history.current_index()?;
        let had_redo = history.can_redo()?;
        history.save(&snapshot, None)?;
        let after = history.current_index()?;

        if let Some(position) = after {
            if before == after {
                ui.message(&format!("State unchanged at position {}", position));
            } else {
                if had_redo {
                    ui.detail("Redo entries discarded");
                }
                ui.success(&format!("Saved position {}", position));
            }
        }

        Ok(CommandResult::success())
    }
}
