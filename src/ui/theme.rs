//! Visual theme and styling.

use console::Style;

/// Styles used for terminal output.
#[derive(Debug, Clone)]
pub struct RewindTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for the current position marker (bold).
    pub highlight: Style,
}

impl Default for RewindTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RewindTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().cyan(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("!"), msg)
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), self.error.apply_to(msg))
    }

    /// Format a header.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }
}

/// Check whether stdout should be colored.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
