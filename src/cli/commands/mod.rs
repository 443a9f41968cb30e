//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands that touch history share a
//! [`CommandContext`] holding the loaded configuration and store location.

pub mod clear;
pub mod completions;
pub mod context;
pub mod diff;
pub mod dispatcher;
pub mod input;
pub mod log;
pub mod navigate;
pub mod reset;
pub mod save;
pub mod show;
pub mod status;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
