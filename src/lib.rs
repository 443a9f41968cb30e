//! Rewind - persisted undo/redo history for JSON-shaped application state.
//!
//! State snapshots are stored one per history position in a pluggable
//! key-value store, with cursors marking the oldest retained and the current
//! position. Derived and user-excluded fields are filtered out before saving.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`filter`] - Field exclusion for snapshots
//! - [`history`] - The position-addressed history log
//! - [`snapshot`] - The persisted state unit
//! - [`storage`] - Key-value store trait and backends
//! - [`ui`] - Terminal output
//! - [`undo`] - Coordination of live state, grouping, and undo/redo
//!
//! # Example
//!
//! ```
//! use rewind::filter::StateFilter;
//! use rewind::history::{HistoryLog, HistoryOptions};
//! use rewind::storage::MemoryStore;
//! use rewind::undo::UndoRedo;
//! use serde_json::json;
//!
//! let history = HistoryLog::new(MemoryStore::new(), HistoryOptions::default()).unwrap();
//! let mut undo = UndoRedo::new(history, StateFilter::new());
//!
//! let mut state = json!({"todos": []});
//! undo.apply("add", &mut state, |s| s["todos"] = json!(["write docs"])).unwrap();
//! undo.undo(&mut state).unwrap();
//! assert_eq!(state, json!({"todos": []}));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod snapshot;
pub mod storage;
pub mod ui;
pub mod undo;

pub use error::{Result, RewindError};
pub use snapshot::Snapshot;
