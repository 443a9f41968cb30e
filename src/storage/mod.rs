//! Key-value backing stores for history.
//!
//! The history log persists through a minimal synchronous interface:
//! [`KeyValueStore`] with `get`/`set`/`delete`/`clear` over string keys and
//! string values. Two media are provided:
//! - [`MemoryStore`] keeps everything in an ordered in-memory map
//! - [`FileStore`] keeps one file per key inside a directory
//!
//! Stores are injected into [`HistoryLog::new`](crate::history::HistoryLog::new),
//! so independent histories can coexist and be tested in isolation.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Synchronous string key-value medium.
///
/// Writes to different keys are not grouped into transactions.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;

    /// Remove every key.
    fn clear(&mut self) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
