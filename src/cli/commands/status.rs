//! Status command implementation.
//!
//! The `rewind status` command shows cursor positions and what undo/redo
//! would do.

use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand<'a> {
    ctx: &'a CommandContext,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(ctx: &'a CommandContext) -> Self {
        Self { ctx }
    }
}

fn availability(available: bool) -> &'static str {
    if available {
        "available"
    } else {
        "unavailable"
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let history = self.ctx.open_history()?;

        ui.show_header("History status");
        ui.detail(&format!("Store: {}", self.ctx.store_dir().display()));
        ui.detail(&format!(
            "Max history: {}",
            history.options().max_history
        ));

        let Some(current) = history.current_index()? else {
            ui.data("No history saved");
            return Ok(CommandResult::success());
        };
        let oldest = history.oldest_index()?.unwrap_or(0);
        let highest = history.highest_index()?.unwrap_or(current);

        ui.data(&format!("Current position: {}", current));
        ui.data(&format!("Oldest position:  {}", oldest));
        ui.data(&format!("Newest position:  {}", highest));
        ui.data(&format!("Entries:          {}", history.len()?));
        ui.data(&format!("Undo:             {}", availability(history.can_undo()?)));
        ui.data(&format!("Redo:             {}", availability(history.can_redo()?)));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RewindConfig;
    use crate::snapshot::Snapshot;
    use crate::ui::MockUI;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn empty_history() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), RewindConfig::default(), None);
        let mut ui = MockUI::new();

        let result = StatusCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_data("No history saved"));
    }

    #[test]
    fn reports_positions() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), RewindConfig::default(), None);
        let mut history = ctx.open_history().unwrap();
        for n in 0..3 {
            history
                .save(&Snapshot::from_value(json!({"n": n})).unwrap(), None)
                .unwrap();
        }
        history.undo().unwrap();

        let mut ui = MockUI::new();
        StatusCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(ui.has_data("Current position: 1"));
        assert!(ui.has_data("Newest position:  2"));
        assert!(ui.has_data("Entries:          3"));
        assert!(ui.has_data("Redo:             available"));
    }
}
