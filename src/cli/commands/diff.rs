//! Diff command implementation.

use crate::cli::args::DiffArgs;
use crate::error::Result;
use crate::history::diff_snapshots;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The diff command implementation.
pub struct DiffCommand<'a> {
    ctx: &'a CommandContext,
    args: DiffArgs,
}

impl<'a> DiffCommand<'a> {
    /// Create a new diff command.
    pub fn new(ctx: &'a CommandContext, args: DiffArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for DiffCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let history = self.ctx.open_history()?;

        let from = history.get_state(self.args.from)?;
        let to = history.get_state(self.args.to)?;
        let (Some(from), Some(to)) = (&from, &to) else {
            for (position, snapshot) in [(self.args.from, &from), (self.args.to, &to)] {
                if snapshot.is_none() {
                    ui.error(&format!("No entry at position {}", position));
                }
            }
            return Ok(CommandResult::failure(1));
        };

        let changes = diff_snapshots(from, to);
        if changes.is_empty() {
            ui.message("No differences");
        }
        for change in changes {
            ui.data(&change.to_string());
        }

        Ok(CommandResult::success())
    }
}
