//! Reset command implementation.

use crate::cli::args::InputArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::input::read_state;

/// The reset command implementation.
pub struct ResetCommand<'a> {
    ctx: &'a CommandContext,
    args: InputArgs,
}

impl<'a> ResetCommand<'a> {
    /// Create a new reset command.
    pub fn new(ctx: &'a CommandContext, args: InputArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ResetCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let state = read_state(&self.args.input)?;
        let snapshot = self.ctx.filter().snapshot(&state)?;

        let mut history = self.ctx.open_history()?;
        let discarded = history.len()?;
        history.reset(&snapshot)?;

        ui.detail(&format!("Discarded {} entries", discarded));
        ui.success("History reset to position 0");
        Ok(CommandResult::success())
    }
}
