//! Shared state for history commands.

use std::path::{Path, PathBuf};

use crate::config::{load_config, RewindConfig};
use crate::error::Result;
use crate::filter::StateFilter;
use crate::history::HistoryLog;
use crate::storage::FileStore;

/// Loaded configuration plus the resolved store directory.
#[derive(Debug, Clone)]
pub struct CommandContext {
    project_root: PathBuf,
    config: RewindConfig,
    store_dir: PathBuf,
}

impl CommandContext {
    /// Load configuration for `project_root`.
    ///
    /// `store_override` replaces `store.dir` from the config. Relative store
    /// paths are resolved against the project root.
    pub fn load(
        project_root: &Path,
        config_override: Option<&Path>,
        store_override: Option<&Path>,
    ) -> Result<Self> {
        let config = load_config(project_root, config_override)?;
        Ok(Self::new(project_root, config, store_override))
    }

    /// Build a context from an already loaded configuration.
    pub fn new(project_root: &Path, config: RewindConfig, store_override: Option<&Path>) -> Self {
        let dir = store_override.unwrap_or(config.store.dir.as_path());
        let store_dir = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            project_root.join(dir)
        };
        tracing::debug!(store = %store_dir.display(), "Resolved history store");

        Self {
            project_root: project_root.to_path_buf(),
            config,
            store_dir,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &RewindConfig {
        &self.config
    }

    /// Get the history store directory.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Open the history log on the file store.
    pub fn open_history(&self) -> Result<HistoryLog<FileStore>> {
        HistoryLog::new(
            FileStore::new(&self.store_dir),
            self.config.history_options(),
        )
    }

    /// Filter applying the configured exclusions.
    pub fn filter(&self) -> StateFilter {
        self.config.exclude.to_filter()
    }
}
