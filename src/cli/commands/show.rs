//! Show command implementation.

use crate::cli::args::ShowArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand<'a> {
    ctx: &'a CommandContext,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(ctx: &'a CommandContext, args: ShowArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let history = self.ctx.open_history()?;
        match history.get_state(self.args.position)? {
            Some(snapshot) => {
                ui.data(&serde_json::to_string_pretty(&snapshot)?);
                Ok(CommandResult::success())
            }
            None => {
                ui.error(&format!("No entry at position {}", self.args.position));
                Ok(CommandResult::failure(1))
            }
        }
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
    fn prints_pretty_json() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), RewindConfig::default(), None);
        ctx.open_history()
            .unwrap()
            .save(&Snapshot::from_value(json!({"count": 3})).unwrap(), None)
            .unwrap();

        let mut ui = MockUI::new();
        let result = ShowCommand::new(&ctx, ShowArgs { position: 0 })
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.data_lines(), ["{\n  \"count\": 3\n}"]);
    }

    #[test]
    fn missing_position_fails() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path(), RewindConfig::default(), None);
        let mut ui = MockUI::new();

        let result = ShowCommand::new(&ctx, ShowArgs { position: 7 })
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("position 7"));
    }
}
