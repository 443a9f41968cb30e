//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Commands::Completions(args) = &cli.command {
            let cmd = super::completions::CompletionsCommand::new(args.clone());
            return cmd.execute(ui);
        }

        let ctx = CommandContext::load(
            &self.project_root,
            cli.config.as_deref(),
            cli.store.as_deref(),
        )?;
        self.dispatch_with(&ctx, &cli.command, ui)
    }

    /// Execute a history command against an already loaded context.
    pub fn dispatch_with(
        &self,
        ctx: &CommandContext,
        command: &Commands,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match command {
            Commands::Status => super::status::StatusCommand::new(ctx).execute(ui),
            Commands::Log => super::log::LogCommand::new(ctx).execute(ui),
            Commands::Show(args) => super::show::ShowCommand::new(ctx, args.clone()).execute(ui),
            Commands::Save(args) => super::save::SaveCommand::new(ctx, args.clone()).execute(ui),
            Commands::Reset(args) => {
                super::reset::ResetCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Undo => super::navigate::NavigateCommand::undo(ctx).execute(ui),
            Commands::Redo => super::navigate::NavigateCommand::redo(ctx).execute(ui),
            Commands::Diff(args) => super::diff::DiffCommand::new(ctx, args.clone()).execute(ui),
            Commands::Clear => super::clear::ClearCommand::new(ctx).execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
