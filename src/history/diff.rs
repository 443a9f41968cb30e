//! Field-level differences between snapshots.
//!
//! Used for diagnostics only: diff logging on save and the `diff` command.
//! Unlike [`FieldPath`](crate::filter::FieldPath), diff paths include array
//! indices so a change can be located exactly.

use serde_json::{Map, Value};
use std::fmt;

use crate::snapshot::Snapshot;

/// One changed location.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// Present only in the newer value.
    Added { path: String, value: Value },
    /// Present only in the older value.
    Removed { path: String, value: Value },
    /// Present in both with different scalar contents or types.
    Modified { path: String, from: Value, to: Value },
}

impl Change {
    /// Dotted path of the change.
    pub fn path(&self) -> &str {
        match self {
            Self::Added { path, .. } | Self::Removed { path, .. } | Self::Modified { path, .. } => {
                path
            }
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { path, value } => write!(f, "+ {}: {}", path, value),
            Self::Removed { path, value } => write!(f, "- {}: {}", path, value),
            Self::Modified { path, from, to } => write!(f, "~ {}: {} -> {}", path, from, to),
        }
    }
}

/// Differences from `old` to `new`.
pub fn diff(old: &Value, new: &Value) -> Vec<Change> {
    let mut changes = Vec::new();
    let mut path = Vec::new();
    diff_values(old, new, &mut path, &mut changes);
    changes
}

/// Differences between two snapshots.
pub fn diff_snapshots(old: &Snapshot, new: &Snapshot) -> Vec<Change> {
    let mut changes = Vec::new();
    let mut path = Vec::new();
    diff_objects(old.as_map(), new.as_map(), &mut path, &mut changes);
    changes
}

/// Emit one debug event per change between two consecutive snapshots.
pub fn log_changes(old: &Snapshot, new: &Snapshot) {
    for change in diff_snapshots(old, new) {
        tracing::debug!(path = change.path(), "{}", change);
    }
}

fn diff_values(old: &Value, new: &Value, path: &mut Vec<String>, out: &mut Vec<Change>) {
    match (old, new) {
        (Value::Object(a), Value::Object(b)) => diff_objects(a, b, path, out),
        (Value::Array(a), Value::Array(b)) => {
            for (index, pair) in a.iter().zip(b.iter()).enumerate() {
                path.push(index.to_string());
                diff_values(pair.0, pair.1, path, out);
                path.pop();
            }
            for (index, value) in a.iter().enumerate().skip(b.len()) {
                out.push(Change::Removed {
                    path: joined(path, &index.to_string()),
                    value: value.clone(),
                });
            }
            for (index, value) in b.iter().enumerate().skip(a.len()) {
                out.push(Change::Added {
                    path: joined(path, &index.to_string()),
                    value: value.clone(),
                });
            }
        }
        (a, b) if a != b => out.push(Change::Modified {
            path: path.join("."),
            from: a.clone(),
            to: b.clone(),
        }),
        _ => {}
    }
}

fn diff_objects(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    path: &mut Vec<String>,
    out: &mut Vec<Change>,
) {
    for (key, old_value) in old {
        match new.get(key) {
            Some(new_value) => {
                path.push(key.clone());
                diff_values(old_value, new_value, path, out);
                path.pop();
            }
            None => out.push(Change::Removed {
                path: joined(path, key),
                value: old_value.clone(),
            }),
        }
    }
    for (key, new_value) in new {
        if !old.contains_key(key) {
            out.push(Change::Added {
                path: joined(path, key),
                value: new_value.clone(),
            });
        }
    }
}

fn joined(parent: &[String], key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent.join("."), key)
    }
}
