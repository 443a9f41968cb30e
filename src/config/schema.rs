//! Configuration schema for `.rewind/config.yml`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::filter::{DerivedFields, FieldPath, StateFilter};
use crate::history::HistoryOptions;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewindConfig {
    /// Maximum number of undo-reachable entries.
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Prefix for every key written to the store.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Log changed fields at debug level on each save.
    #[serde(default, skip_serializing_if = "is_false")]
    pub log_diffs: bool,

    /// Fields that are never persisted.
    pub exclude: ExcludeConfig,

    /// Where the history is stored.
    pub store: StoreConfig,
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
            key_prefix: default_key_prefix(),
            log_diffs: false,
            exclude: ExcludeConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl RewindConfig {
    /// History options described by this configuration.
    pub fn history_options(&self) -> HistoryOptions {
        HistoryOptions::new()
            .with_max_history(self.max_history)
            .with_key_prefix(self.key_prefix.clone())
            .with_log_diffs(self.log_diffs)
    }
}

/// Fields excluded from snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    /// Key names excluded wherever they appear.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,

    /// Dotted paths excluded exactly, e.g. `stats.total`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
}

impl ExcludeConfig {
    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.paths.is_empty()
    }

    /// Build a [`StateFilter`] applying these exclusions.
    pub fn to_filter(&self) -> StateFilter {
        let derived = DerivedFields::declared(self.paths.iter().map(|p| FieldPath::parse(p)));
        let filter = StateFilter::new().with_derived(derived);
        if self.keys.is_empty() {
            return filter;
        }
        let keys: HashSet<String> = self.keys.iter().cloned().collect();
        filter.with_no_save_keys(move |key, _parent| keys.contains(key))
    }
}

/// History store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store directory, relative to the project root unless absolute.
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }
}

fn default_max_history() -> usize {
    HistoryOptions::DEFAULT_MAX_HISTORY
}

fn default_key_prefix() -> String {
    HistoryOptions::DEFAULT_KEY_PREFIX.to_string()
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".rewind").join("history")
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: RewindConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, RewindConfig::default());
        assert_eq!(config.max_history, 250);
        assert_eq!(config.key_prefix, "undo-redo");
        assert_eq!(config.store.dir, PathBuf::from(".rewind/history"));
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
max_history: 20
key_prefix: editor
log_diffs: true
exclude:
  keys: [view, hover]
  paths: [stats.total]
store:
  dir: /tmp/rewind
"#;
        let config: RewindConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.max_history, 20);
        assert_eq!(config.key_prefix, "editor");
        assert!(config.log_diffs);
        assert_eq!(config.exclude.keys, vec!["view", "hover"]);
        assert_eq!(config.exclude.paths, vec!["stats.total"]);
        assert_eq!(config.store.dir, PathBuf::from("/tmp/rewind"));
    }

    #[test]
    fn history_options_follow_config() {
        let config = RewindConfig {
            max_history: 5,
            key_prefix: "doc".to_string(),
            log_diffs: true,
            ..Default::default()
        };
        let options = config.history_options();
        assert_eq!(options.max_history, 5);
        assert_eq!(options.key_prefix, "doc");
        assert!(options.log_diffs);
    }

    #[test]
    fn exclude_filter_strips_keys_at_any_depth_and_exact_paths() {
        let exclude = ExcludeConfig {
            keys: vec!["view".to_string()],
            paths: vec!["stats.total".to_string()],
        };
        let filter = exclude.to_filter();
        let state = json!({
            "view": 1,
            "doc": {"view": 2, "title": "a"},
            "stats": {"total": 3, "count": 4},
            "total": 5
        });

        assert_eq!(
            filter.filter(&state),
            json!({
                "doc": {"title": "a"},
                "stats": {"count": 4},
                "total": 5
            })
        );
    }

    #[test]
    fn empty_exclude_keeps_everything() {
        let exclude = ExcludeConfig::default();
        assert!(exclude.is_empty());
        let state = json!({"a": {"b": 1}});
        assert_eq!(exclude.to_filter().filter(&state), state);
    }
}
