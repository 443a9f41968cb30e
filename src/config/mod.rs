//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use rewind::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".rewind");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "max_history: 10\nexclude:\n  keys: [view]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.max_history, 10);
//! assert_eq!(config.exclude.keys, vec!["view".to_string()]);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_config, load_config, load_config_file, parse_config};
pub use schema::{ExcludeConfig, RewindConfig, StoreConfig};
pub use validator::{validate, validate_config, ValidationError};
