//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for command tests
//!
//! # Example
//!
//! ```
//! use rewind::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.show_header("History");
//! ui.success("Saved position 3");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, RewindTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a line only shown in verbose mode.
    fn detail(&mut self, msg: &str);

    /// Print a command's result. Shown in every mode.
    fn data(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Emphasize `text` for inclusion in a line.
    fn highlight(&self, text: &str) -> String;
}
