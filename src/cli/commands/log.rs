//! Log command implementation.
//!
//! The `rewind log` command lists every retained position, marking the
//! current one. In verbose mode each entry is followed by its changes
//! relative to the previous entry.

use crate::error::Result;
use crate::history::diff_snapshots;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The log command implementation.
pub struct LogCommand<'a> {
    ctx: &'a CommandContext,
}

impl<'a> LogCommand<'a> {
    /// Create a new log command.
    pub fn new(ctx: &'a CommandContext) -> Self {
        Self { ctx }
    }
}

impl Command for LogCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let history = self.ctx.open_history()?;
        let current = history.current_index()?;
        let entries = history.entries()?;

        if entries.is_empty() {
            ui.message("No history saved");
            return Ok(CommandResult::success());
        }

        let mut previous = None;
        for (position, snapshot) in &entries {
            let fields = snapshot.len();
            let line = format!(
                "{:>4}  {} field{}",
                position,
                fields,
                if fields == 1 { "" } else { "s" }
            );
            if Some(*position) == current {
                let marked = ui.highlight(&format!("* {}  (current)", line));
                ui.data(&marked);
            } else {
                ui.data(&format!("  {}", line));
            }

            if ui.output_mode().shows_details() {
                if let Some(prev) = previous {
                    for change in diff_snapshots(prev, snapshot) {
                        ui.detail(&format!("        {}", change));
                    }
                }
            }
            previous = Some(snapshot);
        }

        Ok(CommandResult::success())
    }
}
