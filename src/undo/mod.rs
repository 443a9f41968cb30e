//! Undo/redo coordination for live application state.
//!
//! [`UndoRedo`] sits between an application's mutable state and its
//! [`HistoryLog`]:
//! - every state-changing action is wrapped so the filtered result is saved
//! - grouping (`group_start` / `group_complete` / `group_ignore`) collapses
//!   many actions into one history entry
//! - undo/redo snapshots are merged back into live state, leaving filtered
//!   fields untouched
//!
//! # Usage
//!
//! ```
//! use rewind::filter::{DerivedFields, StateFilter};
//! use rewind::history::{HistoryLog, HistoryOptions};
//! use rewind::storage::MemoryStore;
//! use rewind::undo::UndoRedo;
//! use serde_json::json;
//!
//! let history = HistoryLog::new(MemoryStore::new(), HistoryOptions::default()).unwrap();
//! let filter = StateFilter::new().with_derived(DerivedFields::declared(["doubled"]));
//! let mut undo = UndoRedo::new(history, filter);
//!
//! let mut state = json!({"count": 0, "doubled": 0});
//! undo.apply("increment", &mut state, |s| {
//!     s["count"] = json!(1);
//!     s["doubled"] = json!(2);
//! }).unwrap();
//!
//! assert!(undo.undo(&mut state).unwrap());
//! assert_eq!(state["count"], json!(0));
//! // derived fields are not restored; the application recomputes them
//! assert_eq!(state["doubled"], json!(2));
//! ```

use serde_json::Value;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::Result;
use crate::filter::StateFilter;
use crate::history::HistoryLog;
use crate::snapshot::Snapshot;
use crate::storage::KeyValueStore;

/// Predicate over `(state_after, action)`; `true` means "do not save".
pub type ActionFilter = Box<dyn Fn(&Value, &str) -> bool + Send + Sync>;

/// Action names used by the coordinator itself. They never trigger a save.
pub const RESERVED_ACTIONS: &[&str] = &[
    "@rewind.init",
    "@rewind.save",
    "@rewind.reset",
    "@rewind.undo",
    "@rewind.redo",
];

/// Whether `action` is one of the coordinator's own actions.
pub fn is_reserved_action(action: &str) -> bool {
    RESERVED_ACTIONS.contains(&action)
}

/// Saves filtered state after each action and restores it on undo/redo.
pub struct UndoRedo<S> {
    history: HistoryLog<S>,
    filter: StateFilter,
    skip_action: Option<ActionFilter>,
    group_depth: usize,
    /// Filtered state captured when the outermost group started.
    group_baseline: Option<Snapshot>,
}

impl<S: KeyValueStore> UndoRedo<S> {
    /// Coordinate `history` using `filter` to decide what is persisted.
    pub fn new(history: HistoryLog<S>, filter: StateFilter) -> Self {
        Self {
            history,
            filter,
            skip_action: None,
            group_depth: 0,
            group_baseline: None,
        }
    }

    /// Veto saving for specific transitions.
    pub fn with_skip_action<F>(mut self, skip_action: F) -> Self
    where
        F: Fn(&Value, &str) -> bool + Send + Sync + 'static,
    {
        self.skip_action = Some(Box::new(skip_action));
        self
    }

    /// The underlying history log.
    pub fn history(&self) -> &HistoryLog<S> {
        &self.history
    }

    /// Mutable access to the underlying history log.
    pub fn history_mut(&mut self) -> &mut HistoryLog<S> {
        &mut self.history
    }

    /// The state filter.
    pub fn filter(&self) -> &StateFilter {
        &self.filter
    }

    /// Mutable access to the state filter, e.g. to call
    /// [`StateFilter::rediscover`] after the model shape changed.
    pub fn filter_mut(&mut self) -> &mut StateFilter {
        &mut self.filter
    }

    /// Current grouping depth; `0` outside any group.
    pub fn group_depth(&self) -> usize {
        self.group_depth
    }

    /// Whether saves are currently suppressed by a group.
    pub fn is_grouping(&self) -> bool {
        self.group_depth > 0
    }

    /// Run `mutate` on the live state as action `action`, then save the result.
    pub fn apply<F, T>(&mut self, action: &str, live: &mut Value, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut Value) -> T,
    {
        let before = self.capture_before(action, live)?;
        let output = mutate(live);
        self.save_after(action, before.as_ref(), live)?;
        Ok(output)
    }

    /// Save the transition `before -> after` produced by `action`.
    ///
    /// For callers that mutate state themselves; `before` only matters for the
    /// very first save, where it becomes the history baseline.
    pub fn record(&mut self, action: &str, before: &Value, after: &Value) -> Result<()> {
        let before = self.capture_before(action, before)?;
        self.save_after(action, before.as_ref(), after)
    }

    /// Save the filtered live state unconditionally (outside of groups).
    pub fn save_current(&mut self, live: &Value) -> Result<()> {
        let snapshot = self.filter.snapshot(live)?;
        self.history.save(&snapshot, None)
    }

    /// Restart history from the filtered live state.
    pub fn reset(&mut self, live: &Value) -> Result<()> {
        let snapshot = self.filter.snapshot(live)?;
        self.history.reset(&snapshot)
    }

    /// Open a group. Saves are suppressed until every open group is closed.
    ///
    /// The outermost group records `live` as the baseline for an empty history.
    pub fn group_start(&mut self, live: &Value) -> Result<()> {
        if self.group_depth == 0 {
            self.group_baseline = Some(self.filter.snapshot(live)?);
        }
        self.group_depth += 1;
        tracing::debug!(depth = self.group_depth, "Group started");
        Ok(())
    }

    /// Close a group. Closing the outermost group saves `live` once.
    pub fn group_complete(&mut self, live: &Value) -> Result<()> {
        if !self.close_group("complete") {
            return Ok(());
        }
        let baseline = self.group_baseline.take();
        if self.group_depth == 0 {
            let snapshot = self.filter.snapshot(live)?;
            self.history.save(&snapshot, baseline.as_ref())?;
            tracing::debug!("Group completed and saved");
        } else {
            self.group_baseline = baseline;
        }
        Ok(())
    }

    /// Close a group without saving. Closing the outermost group this way
    /// leaves history exactly as it was before the group started.
    pub fn group_ignore(&mut self) {
        if !self.close_group("ignore") {
            return;
        }
        if self.group_depth == 0 {
            self.group_baseline = None;
            tracing::debug!("Group ignored");
        }
    }

    /// Run `f` inside a group and complete the group when `f` returns.
    ///
    /// If `f` panics, every group opened since the call is closed without
    /// saving and the panic is resumed.
    pub fn group<F, T>(&mut self, live: &mut Value, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self, &mut Value) -> T,
    {
        let depth_before = self.group_depth;
        self.group_start(live)?;
        match panic::catch_unwind(AssertUnwindSafe(|| f(&mut *self, &mut *live))) {
            Ok(output) => {
                self.group_complete(live)?;
                Ok(output)
            }
            Err(payload) => {
                self.unwind_groups_to(depth_before);
                panic::resume_unwind(payload)
            }
        }
    }

    /// Undo into `live`. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self, live: &mut Value) -> Result<bool> {
        self.abandon_open_groups("undo");
        match self.history.undo()? {
            Some(snapshot) => {
                snapshot.merge_into(live);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Redo into `live`. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self, live: &mut Value) -> Result<bool> {
        self.abandon_open_groups("redo");
        match self.history.redo()? {
            Some(snapshot) => {
                snapshot.merge_into(live);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn should_skip(&self, action: &str, after: &Value) -> bool {
        is_reserved_action(action)
            || self
                .skip_action
                .as_ref()
                .is_some_and(|skip| skip(after, action))
    }

    /// Filtered pre-action state, needed only to seed an empty history.
    fn capture_before(&self, action: &str, before: &Value) -> Result<Option<Snapshot>> {
        if self.is_grouping() || is_reserved_action(action) || !self.history.is_empty()? {
            return Ok(None);
        }
        Ok(Some(self.filter.snapshot(before)?))
    }

    fn save_after(&mut self, action: &str, before: Option<&Snapshot>, after: &Value) -> Result<()> {
        if self.is_grouping() {
            tracing::debug!(action, depth = self.group_depth, "Save suppressed: group in progress");
            return Ok(());
        }
        if self.should_skip(action, after) {
            tracing::debug!(action, "Save skipped for action");
            return Ok(());
        }
        let snapshot = self.filter.snapshot(after)?;
        self.history.save(&snapshot, before)
    }

    /// Decrement the depth; returns `false` for an unbalanced close.
    fn close_group(&mut self, how: &str) -> bool {
        if self.group_depth == 0 {
            tracing::warn!(how, "Group closed without a matching start, ignoring");
            return false;
        }
        self.group_depth -= 1;
        tracing::debug!(how, depth = self.group_depth, "Group closed");
        true
    }

    fn unwind_groups_to(&mut self, depth: usize) {
        if self.group_depth > depth {
            tracing::warn!(
                from = self.group_depth,
                to = depth,
                "Closing groups left open by a panic"
            );
            self.group_depth = depth;
        }
        if self.group_depth == 0 {
            self.group_baseline = None;
        }
    }

    /// Undo/redo inside an open group would save a half-finished state later;
    /// drop the groups instead.
    fn abandon_open_groups(&mut self, during: &str) {
        if self.group_depth > 0 {
            tracing::warn!(during, depth = self.group_depth, "Ending open groups");
            self.group_depth = 0;
            self.group_baseline = None;
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for UndoRedo<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoRedo")
            .field("history", &self.history)
            .field("filter", &self.filter)
            .field("skip_action", &self.skip_action.is_some())
            .field("group_depth", &self.group_depth)
            .finish()
    }
}
