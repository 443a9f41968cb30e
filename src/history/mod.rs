//! Position-addressed undo/redo history.
//!
//! [`HistoryLog`] stores snapshots in a key-value store, one key per position,
//! plus two cursors:
//! - `oldest`: lowest retained position
//! - `current`: position of the snapshot representing "now"
//!
//! Positions `[oldest, current]` are undo-reachable. Positions above `current`
//! are redo-reachable until the next save with new content, which deletes
//! them (branch discard). Saving content equal to the current entry is a
//! no-op, and once `current - oldest + 1` exceeds `max_history` the oldest
//! entries are evicted.
//!
//! All state lives in the store, so a log reopened on the same store resumes
//! where it left off.
//!
//! # Usage
//!
//! ```
//! use rewind::history::{HistoryLog, HistoryOptions};
//! use rewind::storage::MemoryStore;
//! use rewind::Snapshot;
//! use serde_json::json;
//!
//! let mut history = HistoryLog::new(MemoryStore::new(), HistoryOptions::default()).unwrap();
//! let a = Snapshot::from_value(json!({"count": 0})).unwrap();
//! let b = Snapshot::from_value(json!({"count": 1})).unwrap();
//!
//! history.save(&a, None).unwrap();
//! history.save(&b, None).unwrap();
//! assert_eq!(history.undo().unwrap(), Some(a));
//! assert_eq!(history.redo().unwrap(), Some(b));
//! ```
//!
//! # Consistency
//!
//! The store has no multi-key transactions. A snapshot is written before the
//! cursor that points at it, so a crash in between leaves an orphaned entry
//! just above `current`. Undo is unaffected, redo would reach the orphan, and
//! the next save with new content deletes it.

pub mod diff;
pub mod options;

pub use diff::{diff, diff_snapshots, Change};
pub use options::{HistoryKeys, HistoryOptions};

use crate::error::{Result, RewindError};
use crate::snapshot::Snapshot;
use crate::storage::KeyValueStore;

/// Snapshot history persisted in a key-value store.
#[derive(Debug)]
pub struct HistoryLog<S> {
    store: S,
    keys: HistoryKeys,
    options: HistoryOptions,
}

impl<S: KeyValueStore> HistoryLog<S> {
    /// Open a history log over `store`.
    ///
    /// Fails if the options are invalid (for example `max_history == 0`).
    pub fn new(store: S, options: HistoryOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            store,
            keys: HistoryKeys::new(options.key_prefix.clone()),
            options,
        })
    }

    /// The options this log was opened with.
    pub fn options(&self) -> &HistoryOptions {
        &self.options
    }

    /// The key layout of this log.
    pub fn keys(&self) -> &HistoryKeys {
        &self.keys
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Discard all history and start over with `snapshot` at position 0.
    pub fn reset(&mut self, snapshot: &Snapshot) -> Result<()> {
        let text = snapshot.to_json()?;
        let removed = self.delete_all_entries()?;

        self.write_entry(0, &text)?;
        self.set_cursor(&self.keys.oldest(), 0)?;
        self.set_cursor(&self.keys.current(), 0)?;

        tracing::debug!(removed, "History reset");
        Ok(())
    }

    /// Record `snapshot` as the new present state.
    ///
    /// On an empty log, `previous` (the state before the first change) is
    /// stored at position 0 and `snapshot` at position 1. On a non-empty log
    /// `previous` is ignored: if `snapshot` equals the current entry nothing
    /// happens, otherwise every redo entry is discarded and `snapshot` is
    /// written just above the cursor.
    ///
    /// Both snapshots are serialized before anything is written, so a
    /// serialization failure leaves the log untouched.
    pub fn save(&mut self, snapshot: &Snapshot, previous: Option<&Snapshot>) -> Result<()> {
        let text = snapshot.to_json()?;

        let current = match self.current_index()? {
            None => self.save_first(snapshot, &text, previous)?,
            Some(current) => {
                let existing = self.read_entry(current)?;
                if existing.as_ref() == Some(snapshot) {
                    tracing::debug!(current, "Save skipped: state unchanged");
                    return Ok(());
                }

                let discarded = self.delete_entries_from(current + 1)?;
                let next = current + 1;
                self.write_entry(next, &text)?;
                self.set_cursor(&self.keys.current(), next)?;

                if self.options.log_diffs {
                    if let Some(existing) = &existing {
                        diff::log_changes(existing, snapshot);
                    }
                }

                tracing::debug!(current = next, discarded, "History entry saved");
                next
            }
        };

        self.enforce_retention(current)
    }

    fn save_first(
        &mut self,
        snapshot: &Snapshot,
        text: &str,
        previous: Option<&Snapshot>,
    ) -> Result<usize> {
        let baseline = match previous {
            Some(prev) if prev != snapshot => Some(prev.to_json()?),
            _ => None,
        };

        // Leftovers from an interrupted write have no cursor pointing at them.
        self.delete_entries_from(0)?;

        let current = match baseline {
            Some(baseline) => {
                self.write_entry(0, &baseline)?;
                self.write_entry(1, text)?;
                1
            }
            None => {
                self.write_entry(0, text)?;
                0
            }
        };
        self.set_cursor(&self.keys.oldest(), 0)?;
        self.set_cursor(&self.keys.current(), current)?;

        tracing::debug!(current, "History started");
        Ok(current)
    }

    /// Step back one position and return the snapshot there.
    ///
    /// Returns `None` when the log is empty or already at the oldest retained
    /// entry. A missing entry is logged and also yields `None`; the cursor
    /// does not move.
    pub fn undo(&mut self) -> Result<Option<Snapshot>> {
        let Some(current) = self.current_index()? else {
            return Ok(None);
        };
        let oldest = self.oldest_index()?.unwrap_or(0);
        if current <= oldest {
            return Ok(None);
        }

        let target = current - 1;
        match self.read_entry(target)? {
            Some(snapshot) => {
                self.set_cursor(&self.keys.current(), target)?;
                tracing::debug!(current = target, "Undo");
                Ok(Some(snapshot))
            }
            None => {
                tracing::warn!(position = target, "Unexpected missing history entry");
                Ok(None)
            }
        }
    }

    /// Step forward one position and return the snapshot there.
    ///
    /// Returns `None` when there is no entry above the cursor.
    pub fn redo(&mut self) -> Result<Option<Snapshot>> {
        let Some(current) = self.current_index()? else {
            return Ok(None);
        };

        let target = current + 1;
        match self.read_entry(target)? {
            Some(snapshot) => {
                self.set_cursor(&self.keys.current(), target)?;
                tracing::debug!(current = target, "Redo");
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    /// Whether [`undo`](Self::undo) has an entry to move to.
    pub fn can_undo(&self) -> Result<bool> {
        match self.current_index()? {
            Some(current) => Ok(current > self.oldest_index()?.unwrap_or(0)),
            None => Ok(false),
        }
    }

    /// Whether [`redo`](Self::redo) has an entry to move to.
    pub fn can_redo(&self) -> Result<bool> {
        match self.current_index()? {
            Some(current) => self.entry_exists(current + 1),
            None => Ok(false),
        }
    }

    /// Position of the present state, or `None` for an empty log.
    pub fn current_index(&self) -> Result<Option<usize>> {
        self.cursor(&self.keys.current())
    }

    /// Lowest retained position, or `None` for an empty log.
    pub fn oldest_index(&self) -> Result<Option<usize>> {
        if self.current_index()?.is_none() {
            return Ok(None);
        }
        Ok(Some(self.cursor(&self.keys.oldest())?.unwrap_or(0)))
    }

    /// Highest stored position, including redo entries.
    pub fn highest_index(&self) -> Result<Option<usize>> {
        let Some(current) = self.current_index()? else {
            return Ok(None);
        };
        let mut highest = current;
        while self.entry_exists(highest + 1)? {
            highest += 1;
        }
        Ok(Some(highest))
    }

    /// The snapshot stored at `position`, if any.
    pub fn get_state(&self, position: usize) -> Result<Option<Snapshot>> {
        self.read_entry(position)
    }

    /// Every retained entry with its position, oldest first, redo entries included.
    pub fn entries(&self) -> Result<Vec<(usize, Snapshot)>> {
        let (Some(oldest), Some(highest)) = (self.oldest_index()?, self.highest_index()?) else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::with_capacity((highest + 1).saturating_sub(oldest));
        for position in oldest..=highest {
            if let Some(snapshot) = self.read_entry(position)? {
                entries.push((position, snapshot));
            }
        }
        Ok(entries)
    }

    /// Every retained snapshot, oldest first, redo entries included.
    pub fn all_saved(&self) -> Result<Vec<Snapshot>> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|(_, snapshot)| snapshot)
            .collect())
    }

    /// Number of stored entries, redo entries included.
    pub fn len(&self) -> Result<usize> {
        match (self.oldest_index()?, self.highest_index()?) {
            (Some(oldest), Some(highest)) => Ok((highest + 1).saturating_sub(oldest)),
            _ => Ok(0),
        }
    }

    /// Whether the log holds no history.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.current_index()?.is_none())
    }

    /// Clear the entire backing store.
    pub fn erase(&mut self) -> Result<()> {
        self.store.clear()?;
        tracing::debug!("History erased");
        Ok(())
    }

    fn enforce_retention(&mut self, current: usize) -> Result<()> {
        let max = self.options.max_history;
        let start = self.oldest_index()?.unwrap_or(0);
        let mut oldest = start;

        while (current + 1).saturating_sub(oldest) > max {
            self.store.delete(&self.keys.entry(oldest))?;
            oldest += 1;
        }

        if oldest != start {
            self.set_cursor(&self.keys.oldest(), oldest)?;
            tracing::debug!(evicted = oldest - start, oldest, "Oldest history evicted");
        }
        Ok(())
    }

    /// Delete all entries at or above `start`, stopping at the first gap.
    fn delete_entries_from(&mut self, start: usize) -> Result<usize> {
        let mut position = start;
        while self.entry_exists(position)? {
            self.store.delete(&self.keys.entry(position))?;
            position += 1;
        }
        Ok(position - start)
    }

    fn delete_all_entries(&mut self) -> Result<usize> {
        let start = self.oldest_index()?.unwrap_or(0);
        let removed = self.delete_entries_from(start)?;
        self.store.delete(&self.keys.current())?;
        self.store.delete(&self.keys.oldest())?;
        Ok(removed)
    }

    fn entry_exists(&self, position: usize) -> Result<bool> {
        Ok(self.store.get(&self.keys.entry(position))?.is_some())
    }

    /// Read and parse an entry. Unparseable text is logged and treated as absent.
    fn read_entry(&self, position: usize) -> Result<Option<Snapshot>> {
        let Some(text) = self.store.get(&self.keys.entry(position))? else {
            return Ok(None);
        };
        match Snapshot::from_json(&text) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(position, error = %e, "Unreadable history entry");
                Ok(None)
            }
        }
    }

    fn write_entry(&mut self, position: usize, text: &str) -> Result<()> {
        self.store.set(&self.keys.entry(position), text)
    }

    fn cursor(&self, key: &str) -> Result<Option<usize>> {
        match self.store.get(key)? {
            Some(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| RewindError::InvalidCursor {
                    key: key.to_string(),
                    value,
                }),
            None => Ok(None),
        }
    }

    fn set_cursor(&mut self, key: &str, position: usize) -> Result<()> {
        self.store.set(key, &position.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn snap(count: i64) -> Snapshot {
        Snapshot::from_value(json!({ "count": count })).unwrap()
    }

    fn log(max_history: usize) -> HistoryLog<MemoryStore> {
        HistoryLog::new(
            MemoryStore::new(),
            HistoryOptions::default().with_max_history(max_history),
        )
        .unwrap()
    }

    #[test]
    fn new_log_is_empty() {
        let h = log(10);
        assert_eq!(h.current_index().unwrap(), None);
        assert_eq!(h.oldest_index().unwrap(), None);
        assert_eq!(h.len().unwrap(), 0);
        assert!(h.is_empty().unwrap());
        assert!(!h.can_undo().unwrap());
        assert!(!h.can_redo().unwrap());
    }

    #[test]
    fn zero_max_history_is_rejected() {
        let result = HistoryLog::new(MemoryStore::new(), HistoryOptions::new().with_max_history(0));
        assert!(matches!(
            result,
            Err(RewindError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn first_save_without_previous() {
        let mut h = log(10);
        h.save(&snap(0), None).unwrap();
        assert_eq!(h.current_index().unwrap(), Some(0));
        assert_eq!(h.oldest_index().unwrap(), Some(0));
        assert_eq!(h.all_saved().unwrap(), vec![snap(0)]);
    }

    #[test]
    fn first_save_with_previous_seeds_baseline() {
        let mut h = log(10);
        h.save(&snap(1), Some(&snap(0))).unwrap();
        assert_eq!(h.current_index().unwrap(), Some(1));
        assert_eq!(h.all_saved().unwrap(), vec![snap(0), snap(1)]);
    }

    #[test]
    fn first_save_with_identical_previous_stores_once() {
        let mut h = log(10);
        h.save(&snap(0), Some(&snap(0))).unwrap();
        assert_eq!(h.current_index().unwrap(), Some(0));
        assert_eq!(h.len().unwrap(), 1);
    }

    #[test]
    fn previous_is_ignored_once_history_exists() {
        let mut h = log(10);
        h.save(&snap(0), None).unwrap();
        h.save(&snap(2), Some(&snap(1))).unwrap();
        assert_eq!(h.all_saved().unwrap(), vec![snap(0), snap(2)]);
    }

    #[test]
    fn idempotent_save() {
        let mut h = log(10);
        h.save(&snap(0), None).unwrap();
        h.save(&snap(1), None).unwrap();

        h.save(&snap(1), None).unwrap();

        assert_eq!(h.current_index().unwrap(), Some(1));
        assert_eq!(h.oldest_index().unwrap(), Some(0));
        assert_eq!(h.len().unwrap(), 2);
    }

    #[test]
    fn duplicate_save_keeps_redo_branch() {
        let mut h = log(10);
        h.save(&snap(0), None).unwrap();
        h.save(&snap(1), None).unwrap();
        h.undo().unwrap();

        h.save(&snap(0), None).unwrap();

        assert!(h.can_redo().unwrap());
        assert_eq!(h.redo().unwrap(), Some(snap(1)));
    }

    #[test]
    fn scenario_undo_then_new_edit() {
        let mut h = log(10);
        h.save(&snap(0), None).unwrap();
        assert_eq!(h.current_index().unwrap(), Some(0));
        assert_eq!(h.len().unwrap(), 1);

        h.save(&snap(1), None).unwrap();
        assert_eq!(h.current_index().unwrap(), Some(1));
        assert_eq!(h.len().unwrap(), 2);

        assert_eq!(h.undo().unwrap(), Some(snap(0)));
        assert_eq!(h.current_index().unwrap(), Some(0));

        h.save(&snap(2), None).unwrap();
        assert_eq!(h.current_index().unwrap(), Some(1));
        assert_eq!(h.len().unwrap(), 2);
        assert_eq!(h.get_state(1).unwrap(), Some(snap(2)));

        assert_eq!(h.redo().unwrap(), None);
    }

    #[test]
    fn branch_discard_deletes_every_redo_entry() {
        let mut h = log(10);
        for i in 0..=5 {
            h.save(&snap(i), None).unwrap();
        }
        assert_eq!(h.current_index().unwrap(), Some(5));

        h.undo().unwrap();
        h.undo().unwrap();
        h.save(&snap(40), None).unwrap();

        assert_eq!(h.current_index().unwrap(), Some(4));
        assert_eq!(h.get_state(4).unwrap(), Some(snap(40)));
        assert_eq!(h.get_state(5).unwrap(), None);
        assert_eq!(h.redo().unwrap(), None);
    }

    #[test]
    fn undo_stops_at_oldest() {
        let mut h = log(10);
        h.save(&snap(0), None).unwrap();
        h.save(&snap(1), None).unwrap();

        assert_eq!(h.undo().unwrap(), Some(snap(0)));
        assert_eq!(h.undo().unwrap(), None);
        assert_eq!(h.current_index().unwrap(), Some(0));
    }

    #[test]
    fn undo_and_redo_on_empty_log() {
        let mut h = log(10);
        assert_eq!(h.undo().unwrap(), None);
        assert_eq!(h.redo().unwrap(), None);
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let mut h = log(10);
        for i in 0..3 {
            h.save(&snap(i), None).unwrap();
        }
        let before = h.get_state(h.current_index().unwrap().unwrap()).unwrap();

        h.undo().unwrap();
        assert_eq!(h.redo().unwrap(), before);
        assert_eq!(h.current_index().unwrap(), Some(2));
    }

    #[test]
    fn multiple_undo_redo_cycles() {
        let mut h = log(10);
        for i in 0..3 {
            h.save(&snap(i), None).unwrap();
        }

        assert_eq!(h.undo().unwrap(), Some(snap(1)));
        assert_eq!(h.undo().unwrap(), Some(snap(0)));
        assert_eq!(h.undo().unwrap(), None);

        assert_eq!(h.redo().unwrap(), Some(snap(1)));
        assert_eq!(h.redo().unwrap(), Some(snap(2)));
        assert_eq!(h.redo().unwrap(), None);
    }

    #[test]
    fn eviction_scenario() {
        let mut h = log(2);
        h.save(&snap(0), None).unwrap();
        h.save(&snap(1), None).unwrap();
        h.save(&snap(2), None).unwrap();

        assert_eq!(h.oldest_index().unwrap(), Some(1));
        assert_eq!(h.get_state(0).unwrap(), None);
        assert_eq!(h.get_state(1).unwrap(), Some(snap(1)));
        assert_eq!(h.get_state(2).unwrap(), Some(snap(2)));
    }

    #[test]
    fn eviction_bound_holds_after_every_save() {
        for k in 1..=4 {
            let mut h = log(k);
            for i in 0..12 {
                h.save(&snap(i), None).unwrap();
                let current = h.current_index().unwrap().unwrap();
                let oldest = h.oldest_index().unwrap().unwrap();
                assert!(current - oldest + 1 <= k, "k={k} i={i}");
            }
        }
    }

    #[test]
    fn undo_cannot_pass_evicted_entries() {
        let mut h = log(2);
        for i in 0..4 {
            h.save(&snap(i), None).unwrap();
        }
        assert_eq!(h.undo().unwrap(), Some(snap(2)));
        assert_eq!(h.undo().unwrap(), None);
    }

    #[test]
    fn max_history_one_keeps_only_present() {
        let mut h = log(1);
        h.save(&snap(1), Some(&snap(0))).unwrap();
        assert_eq!(h.oldest_index().unwrap(), Some(1));
        assert_eq!(h.all_saved().unwrap(), vec![snap(1)]);
        assert!(!h.can_undo().unwrap());
    }

    #[test]
    fn reset_discards_everything() {
        let mut h = log(10);
        for i in 0..4 {
            h.save(&snap(i), None).unwrap();
        }
        h.undo().unwrap();

        h.reset(&snap(9)).unwrap();

        assert_eq!(h.current_index().unwrap(), Some(0));
        assert_eq!(h.oldest_index().unwrap(), Some(0));
        assert_eq!(h.all_saved().unwrap(), vec![snap(9)]);
        assert_eq!(h.redo().unwrap(), None);
    }

    #[test]
    fn reset_after_eviction_clears_retained_entries() {
        let mut h = log(2);
        for i in 0..5 {
            h.save(&snap(i), None).unwrap();
        }
        h.reset(&snap(0)).unwrap();
        assert_eq!(h.store().len(), 3);
        assert_eq!(h.all_saved().unwrap(), vec![snap(0)]);
    }

    #[test]
    fn missing_entry_returns_none_without_moving() {
        let mut h = log(10);
        for i in 0..3 {
            h.save(&snap(i), None).unwrap();
        }
        let key = h.keys().entry(1);
        let mut store = h.into_store();
        store.delete(&key).unwrap();
        let mut h = HistoryLog::new(store, HistoryOptions::default()).unwrap();

        assert_eq!(h.undo().unwrap(), None);
        assert_eq!(h.current_index().unwrap(), Some(2));
    }

    #[test]
    fn corrupt_entry_is_treated_as_missing() {
        let mut store = MemoryStore::new();
        store.set("undo-redo-0", "not json").unwrap();
        store.set("undo-redo-1", r#"{"count":1}"#).unwrap();
        store.set("undo-redo-state-current", "1").unwrap();
        let mut h = HistoryLog::new(store, HistoryOptions::default()).unwrap();

        assert_eq!(h.undo().unwrap(), None);
        assert_eq!(h.current_index().unwrap(), Some(1));
    }

    #[test]
    fn invalid_cursor_is_an_error() {
        let mut store = MemoryStore::new();
        store.set("undo-redo-state-current", "banana").unwrap();
        let h = HistoryLog::new(store, HistoryOptions::default()).unwrap();
        assert!(matches!(
            h.current_index(),
            Err(RewindError::InvalidCursor { .. })
        ));
    }

    #[test]
    fn missing_oldest_cursor_defaults_to_zero() {
        let mut store = MemoryStore::new();
        store.set("undo-redo-0", r#"{"count":0}"#).unwrap();
        store.set("undo-redo-1", r#"{"count":1}"#).unwrap();
        store.set("undo-redo-state-current", "1").unwrap();
        let mut h = HistoryLog::new(store, HistoryOptions::default()).unwrap();

        assert_eq!(h.oldest_index().unwrap(), Some(0));
        assert_eq!(h.undo().unwrap(), Some(snap(0)));
    }

    #[test]
    fn orphan_above_cursor_is_discarded_by_next_save() {
        let mut h = log(10);
        h.save(&snap(0), None).unwrap();
        let orphan_key = h.keys().entry(1);
        let mut store = h.into_store();
        store.set(&orphan_key, r#"{"count":99}"#).unwrap();
        let mut h = HistoryLog::new(store, HistoryOptions::default()).unwrap();

        h.save(&snap(1), None).unwrap();

        assert_eq!(h.get_state(1).unwrap(), Some(snap(1)));
        assert_eq!(h.len().unwrap(), 2);
    }

    #[test]
    fn reopened_log_resumes() {
        let mut h = log(10);
        h.save(&snap(0), None).unwrap();
        h.save(&snap(1), None).unwrap();
        let store = h.into_store();

        let mut h = HistoryLog::new(store, HistoryOptions::default()).unwrap();
        assert_eq!(h.current_index().unwrap(), Some(1));
        assert_eq!(h.undo().unwrap(), Some(snap(0)));
    }

    #[test]
    fn prefixes_isolate_logs_in_one_store() {
        let mut store = MemoryStore::new();
        {
            let mut a =
                HistoryLog::new(&mut store, HistoryOptions::new().with_key_prefix("a")).unwrap();
            a.save(&snap(1), None).unwrap();
        }
        let mut b = HistoryLog::new(&mut store, HistoryOptions::new().with_key_prefix("b")).unwrap();
        assert!(b.is_empty().unwrap());
        b.save(&snap(2), None).unwrap();
        drop(b);

        assert_eq!(store.get("a-0").unwrap(), Some(r#"{"count":1}"#.to_string()));
        assert_eq!(store.get("b-0").unwrap(), Some(r#"{"count":2}"#.to_string()));
    }

    #[test]
    fn erase_clears_store() {
        let mut h = log(10);
        h.save(&snap(0), None).unwrap();
        h.erase().unwrap();
        assert!(h.is_empty().unwrap());
        assert!(h.store().is_empty());
    }

    #[test]
    fn persisted_layout() {
        let mut h = log(10);
        h.save(&snap(1), Some(&snap(0))).unwrap();
        let store = h.store();
        assert_eq!(store.get("undo-redo-0").unwrap(), Some(r#"{"count":0}"#.to_string()));
        assert_eq!(store.get("undo-redo-1").unwrap(), Some(r#"{"count":1}"#.to_string()));
        assert_eq!(store.get("undo-redo-state-current").unwrap(), Some("1".to_string()));
        assert_eq!(store.get("undo-redo-state-oldest").unwrap(), Some("0".to_string()));
    }

    #[test]
    fn log_diffs_does_not_change_state() {
        let mut h = HistoryLog::new(
            MemoryStore::new(),
            HistoryOptions::default().with_log_diffs(true),
        )
        .unwrap();
        h.save(&snap(0), None).unwrap();
        h.save(&snap(1), None).unwrap();
        assert_eq!(h.all_saved().unwrap(), vec![snap(0), snap(1)]);
    }
}
