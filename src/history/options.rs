//! History log options and persisted key layout.

use crate::error::{Result, RewindError};

/// Options for a [`HistoryLog`](super::HistoryLog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryOptions {
    /// Maximum number of undo-reachable entries (`current - oldest + 1`).
    pub max_history: usize,

    /// Prefix for every key the log writes.
    pub key_prefix: String,

    /// Emit a debug event for each field that changed between saves.
    pub log_diffs: bool,
}

impl HistoryOptions {
    /// Default retention limit.
    pub const DEFAULT_MAX_HISTORY: usize = 250;

    /// Default key prefix.
    pub const DEFAULT_KEY_PREFIX: &'static str = "undo-redo";

    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retention limit.
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Set the key prefix.
    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    /// Enable or disable diff logging.
    pub fn with_log_diffs(mut self, log_diffs: bool) -> Self {
        self.log_diffs = log_diffs;
        self
    }

    /// Reject options the log cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_history == 0 {
            return Err(RewindError::ConfigValidationError {
                message: "max_history must be at least 1".to_string(),
            });
        }
        if self.key_prefix.is_empty() {
            return Err(RewindError::ConfigValidationError {
                message: "key_prefix must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            max_history: Self::DEFAULT_MAX_HISTORY,
            key_prefix: Self::DEFAULT_KEY_PREFIX.to_string(),
            log_diffs: false,
        }
    }
}

/// Key names for one history log.
///
/// Entries live at `<prefix>-<position>`; the cursors at
/// `<prefix>-state-current` and `<prefix>-state-oldest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryKeys {
    prefix: String,
}

impl HistoryKeys {
    /// Keys under the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Key of the entry at `position`.
    pub fn entry(&self, position: usize) -> String {
        format!("{}-{}", self.prefix, position)
    }

    /// Key of the `current` cursor.
    pub fn current(&self) -> String {
        format!("{}-state-current", self.prefix)
    }

    /// Key of the `oldest` cursor.
    pub fn oldest(&self) -> String {
        format!("{}-state-oldest", self.prefix)
    }
}
