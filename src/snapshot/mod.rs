//! Immutable state snapshots.
//!
//! A [`Snapshot`] is the persisted form of application state at one point in
//! time: a JSON object with every excluded field already removed. The history
//! log owns snapshots once saved; callers keep their own mutable live state
//! and merge snapshots back into it on undo/redo.

mod finite;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, RewindError};

/// A filtered copy of application state, stored whole in the history log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Map<String, Value>);

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap a JSON value. Only objects are valid snapshots.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(RewindError::NotAnObject {
                kind: value_kind(&other),
            }),
        }
    }

    /// Serialize any state type into a snapshot.
    ///
    /// Fails if the type cannot be represented as JSON (for example a map with
    /// non-string keys or a NaN float) or does not serialize to an object.
    pub fn from_state<T: Serialize>(state: &T) -> Result<Self> {
        Self::from_value(state_to_value(state)?)
    }

    /// Parse a snapshot from its stored text form.
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Render the stored text form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Borrow the underlying field map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a plain JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Merge this snapshot into live state by top-level key assignment.
    ///
    /// Every key in the snapshot overwrites the same key in `live`. Keys that
    /// the snapshot does not carry (filtered or derived fields) are left as
    /// they are. A non-object `live` is replaced by the snapshot's object.
    pub fn merge_into(&self, live: &mut Value) {
        match live {
            Value::Object(target) => {
                for (key, value) in &self.0 {
                    target.insert(key.clone(), value.clone());
                }
            }
            other => *other = Value::Object(self.0.clone()),
        }
    }

    /// Merge this snapshot into a typed live state.
    ///
    /// The state is round-tripped through JSON, so fields absent from the
    /// snapshot keep their current values.
    pub fn restore_into<T>(&self, live: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut value = serde_json::to_value(&*live)?;
        self.merge_into(&mut value);
        *live = serde_json::from_value(value)?;
        Ok(())
    }
}

impl From<Map<String, Value>> for Snapshot {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Snapshot {
    type Error = RewindError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

/// Serialize a state into JSON, rejecting values JSON cannot hold exactly.
pub(crate) fn state_to_value<T: Serialize + ?Sized>(state: &T) -> Result<Value> {
    Ok(serde_json::to_value(finite::Finite(state))?)
}

/// Name of a JSON value's variant, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
