//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use rewind::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Undo complete");
//! ui.warning("Nothing to redo");
//!
//! assert!(ui.has_message("Undo complete"));
//! assert!(ui.has_warning("redo"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    details: Vec<String>,
    data: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all captured result output.
    pub fn data_lines(&self) -> &[String] {
        &self.data
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Check if any message contains the given text.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Check if any result output contains the given text.
    pub fn has_data(&self, text: &str) -> bool {
        self.data.iter().any(|d| d.contains(text))
    }

    /// Check if any success message contains the given text.
    pub fn has_success(&self, text: &str) -> bool {
        self.successes.iter().any(|m| m.contains(text))
    }

    /// Check if any warning contains the given text.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(text))
    }

    /// Check if any error contains the given text.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn data(&mut self, text: &str) {
        self.data.push(text.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }
}
