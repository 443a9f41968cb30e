//! Field filtering for snapshots.
//!
//! Before a state is saved to history, every field that should not be
//! persisted is stripped out:
//! - derived fields, declared through [`DerivedFields`]
//! - fields rejected by a user-supplied `(key, parent_path)` predicate
//!
//! Filtering is a recursive structural copy; the input is never mutated.
//!
//! # Example
//!
//! ```
//! use rewind::filter::{DerivedFields, StateFilter};
//! use serde_json::json;
//!
//! let filter = StateFilter::new()
//!     .with_derived(DerivedFields::declared(["countSquared"]))
//!     .with_no_save_keys(|key, _path| key == "view");
//!
//! let state = json!({"count": 3, "countSquared": 9, "panel": {"view": 2, "open": true}});
//! let filtered = filter.filter(&state);
//! assert_eq!(filtered, json!({"count": 3, "panel": {"open": true}}));
//! ```

pub mod derived;
pub mod path;

pub use derived::DerivedFields;
pub use path::FieldPath;

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::Result;
use crate::snapshot::Snapshot;

/// Predicate over `(key, parent_path)`; `true` means "do not persist".
pub type KeyPathFilter = Box<dyn Fn(&str, &[String]) -> bool + Send + Sync>;

/// Return a copy of `src` without the object fields `exclude` rejects.
///
/// `exclude` receives the field's value, its key, and the path of the object
/// that holds it. Array elements are always kept and walked with the array's
/// own path.
pub fn copy_filtered<F>(src: &Value, exclude: F) -> Value
where
    F: Fn(&Value, &str, &[String]) -> bool,
{
    let mut path = Vec::new();
    copy_recurse(src, &exclude, &mut path)
}

fn copy_recurse<F>(value: &Value, exclude: &F, path: &mut Vec<String>) -> Value
where
    F: Fn(&Value, &str, &[String]) -> bool,
{
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| copy_recurse(item, exclude, path))
                .collect(),
        ),
        Value::Object(fields) => {
            let mut copy = Map::new();
            for (key, field) in fields {
                if exclude(field, key, path) {
                    continue;
                }
                path.push(key.clone());
                let filtered = copy_recurse(field, exclude, path);
                path.pop();
                copy.insert(key.clone(), filtered);
            }
            Value::Object(copy)
        }
        scalar => scalar.clone(),
    }
}

/// Decides which parts of a state belong in a snapshot.
#[derive(Default)]
pub struct StateFilter {
    derived: DerivedFields,
    no_save_keys: Option<KeyPathFilter>,
}

impl StateFilter {
    /// A filter that keeps every field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the derived fields to strip.
    pub fn with_derived(mut self, derived: DerivedFields) -> Self {
        self.derived = derived;
        self
    }

    /// Set the user predicate; fields for which it returns `true` are stripped.
    pub fn with_no_save_keys<F>(mut self, no_save_keys: F) -> Self
    where
        F: Fn(&str, &[String]) -> bool + Send + Sync + 'static,
    {
        self.no_save_keys = Some(Box::new(no_save_keys));
        self
    }

    /// Whether the field `key` under `parent` is excluded from snapshots.
    pub fn excludes(&self, key: &str, parent: &[String]) -> bool {
        self.derived.contains(parent, key)
            || self
                .no_save_keys
                .as_ref()
                .is_some_and(|no_save| no_save(key, parent))
    }

    /// Copy `state` without excluded fields.
    pub fn filter(&self, state: &Value) -> Value {
        copy_filtered(state, |_value, key, path| self.excludes(key, path))
    }

    /// Filter `state` into a snapshot.
    pub fn snapshot(&self, state: &Value) -> Result<Snapshot> {
        Snapshot::from_value(self.filter(state))
    }

    /// Serialize a typed state and filter it into a snapshot.
    pub fn snapshot_of<T: Serialize>(&self, state: &T) -> Result<Snapshot> {
        self.snapshot(&crate::snapshot::state_to_value(state)?)
    }

    /// The derived field declarations.
    pub fn derived(&self) -> &DerivedFields {
        &self.derived
    }

    /// Re-resolve derived field paths on the next filter call.
    pub fn rediscover(&mut self) {
        self.derived.rediscover();
    }
}

impl fmt::Debug for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateFilter")
            .field("derived", &self.derived)
            .field("no_save_keys", &self.no_save_keys.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn copy_filtered_removes_matching_fields_at_every_depth() {
        let src = json!({
            "foo": "bar",
            "fun": null,
            "deep": {"fi": "fi", "fun": null},
            "deepArray": [{"fo": "fo", "fun": null}],
        });
        let filtered = copy_filtered(&src, |value, _key, _path| value.is_null());
        assert_eq!(
            filtered,
            json!({"foo": "bar", "deep": {"fi": "fi"}, "deepArray": [{"fo": "fo"}]})
        );
    }

    #[test]
    fn copy_filtered_does_not_touch_input() {
        let src = json!({"a": 1, "b": 2});
        let before = src.clone();
        let _ = copy_filtered(&src, |_value, key, _path| key == "a");
        assert_eq!(src, before);
    }

    #[test]
    fn copy_filtered_passes_parent_path() {
        let src = json!({"outer": {"inner": {"leaf": 1}}, "leaf": 2});
        let filtered = copy_filtered(&src, |_value, key, path| {
            key == "leaf" && path == ["outer".to_string(), "inner".to_string()]
        });
        assert_eq!(filtered, json!({"outer": {"inner": {}}, "leaf": 2}));
    }

    #[test]
    fn array_elements_share_array_path() {
        let src = json!({"items": [{"total": 1, "n": 1}, {"total": 2, "n": 2}]});
        let filter = StateFilter::new().with_derived(DerivedFields::declared(["items.total"]));
        assert_eq!(
            filter.filter(&src),
            json!({"items": [{"n": 1}, {"n": 2}]})
        );
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(copy_filtered(&json!(5), |_, _, _| true), json!(5));
    }

    #[test]
    fn derived_and_user_rules_combine() {
        let filter = StateFilter::new()
            .with_derived(DerivedFields::declared(["d"]))
            .with_no_save_keys(|key, _path| key == "view");

        let state = json!({
            "count": 1,
            "d": 1,
            "view": 7,
            "nested": {"view": 3, "d": 4, "keep": [{"view": 1, "x": 2}]},
        });

        assert_eq!(
            filter.filter(&state),
            json!({"count": 1, "nested": {"d": 4, "keep": [{"x": 2}]}})
        );
    }

    #[test]
    fn derived_paths_match_only_full_path() {
        let filter = StateFilter::new().with_derived(DerivedFields::declared(["stats.total"]));
        let state = json!({"total": 1, "stats": {"total": 2, "count": 3}});
        assert_eq!(
            filter.filter(&state),
            json!({"total": 1, "stats": {"count": 3}})
        );
    }

    #[test]
    fn snapshot_requires_object() {
        let filter = StateFilter::new();
        assert!(filter.snapshot(&json!("text")).is_err());
        assert!(filter.snapshot(&json!({})).is_ok());
    }

    #[test]
    fn snapshot_of_typed_state() {
        #[derive(Serialize)]
        struct Model {
            count: u32,
            view: u32,
        }

        let filter = StateFilter::new().with_no_save_keys(|key, _| key == "view");
        let snap = filter.snapshot_of(&Model { count: 4, view: 8 }).unwrap();
        assert_eq!(snap.into_value(), json!({"count": 4}));
    }

    #[test]
    fn snapshot_of_rejects_nan() {
        #[derive(Serialize)]
        struct Model {
            scale: f32,
        }

        let err = StateFilter::new()
            .snapshot_of(&Model { scale: f32::NAN })
            .unwrap_err();
        assert!(matches!(err, crate::error::RewindError::Serialization(_)));
    }
}
