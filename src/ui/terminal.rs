//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, RewindTheme, UserInterface};

/// Terminal UI writing results to stdout and diagnostics to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: RewindTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            RewindTheme::new()
        } else {
            RewindTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.out, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn data(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn highlight(&self, text: &str) -> String {
        self.theme.highlight.apply_to(text).to_string()
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
