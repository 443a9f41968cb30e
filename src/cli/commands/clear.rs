//! Clear command implementation.

use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The clear command implementation.
pub struct ClearCommand<'a> {
    ctx: &'a CommandContext,
}

impl<'a> ClearCommand<'a> {
    /// Create a new clear command.
    pub fn new(ctx: &'a CommandContext) -> Self {
        Self { ctx }
    }
}

impl Command for ClearCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut history = self.ctx.open_history()?;
        history.erase()?;
        ui.success(&format!(
            "Cleared history in {}",
            self.ctx.store_dir().display()
        ));
        Ok(CommandResult::success())
    }
}
