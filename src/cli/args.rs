//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Rewind - inspect and drive a persisted undo/redo history.
#[derive(Debug, Parser)]
#[command(name = "rewind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .rewind/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// History store directory (overrides store.dir from config)
    #[arg(short, long, global = true, env = "REWIND_STORE")]
    pub store: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print command results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show cursor positions and undo/redo availability
    Status,

    /// List retained history positions
    Log,

    /// Print the snapshot stored at a position
    Show(ShowArgs),

    /// Save a JSON state as the newest history entry
    Save(InputArgs),

    /// Discard history and start over from a JSON state
    Reset(InputArgs),

    /// Step back one position
    Undo,

    /// Step forward one position
    Redo,

    /// Show field changes between two positions
    Diff(DiffArgs),

    /// Erase the history store
    Clear,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// History position
    pub position: usize,
}

/// Arguments for commands reading a JSON state.
#[derive(Debug, Clone, clap::Args)]
pub struct InputArgs {
    /// JSON file holding the state, or `-` for stdin
    pub input: String,
}

/// Arguments for the `diff` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DiffArgs {
    /// Older position
    pub from: usize,

    /// Newer position
    pub to: usize,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
