//! Derived (computed) field declarations.
//!
//! Derived fields are recomputed from other state, so they never belong in a
//! snapshot. Their paths are either declared up front or produced by a
//! resolver that runs lazily on the first filter call. The resolved list is
//! cached until [`DerivedFields::rediscover`] is called; a model whose shape
//! changes at runtime must call it explicitly.

use std::fmt;
use std::sync::OnceLock;

use super::FieldPath;

type Resolver = Box<dyn Fn() -> Vec<FieldPath> + Send + Sync>;

enum Source {
    Declared(Vec<FieldPath>),
    Resolver(Resolver),
}

/// Paths of fields that are derived from other state and never persisted.
pub struct DerivedFields {
    source: Source,
    resolved: OnceLock<Vec<FieldPath>>,
}

impl DerivedFields {
    /// No derived fields.
    pub fn none() -> Self {
        Self::declared(Vec::<FieldPath>::new())
    }

    /// A fixed list of derived field paths.
    pub fn declared<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPath>,
    {
        Self {
            source: Source::Declared(paths.into_iter().map(Into::into).collect()),
            resolved: OnceLock::new(),
        }
    }

    /// Derived field paths computed on first use.
    pub fn resolver<F>(resolve: F) -> Self
    where
        F: Fn() -> Vec<FieldPath> + Send + Sync + 'static,
    {
        Self {
            source: Source::Resolver(Box::new(resolve)),
            resolved: OnceLock::new(),
        }
    }

    /// The derived paths, resolving them if this is the first call.
    pub fn paths(&self) -> &[FieldPath] {
        self.resolved.get_or_init(|| {
            let paths = match &self.source {
                Source::Declared(paths) => paths.clone(),
                Source::Resolver(resolve) => resolve(),
            };
            tracing::debug!(count = paths.len(), "Derived fields resolved");
            paths
        })
    }

    /// Whether the field `key` under `parent` is derived.
    pub fn contains(&self, parent: &[String], key: &str) -> bool {
        self.paths().iter().any(|path| path.names(parent, key))
    }

    /// Whether the paths have been resolved since creation or the last
    /// [`rediscover`](Self::rediscover).
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Drop the cached paths so the next filter call resolves them again.
    pub fn rediscover(&mut self) {
        self.resolved = OnceLock::new();
        tracing::debug!("Derived field cache cleared");
    }
}

impl Default for DerivedFields {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for DerivedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            Source::Declared(_) => "declared",
            Source::Resolver(_) => "resolver",
        };
        f.debug_struct("DerivedFields")
            .field("source", &source)
            .field("resolved", &self.resolved.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn declared_paths_match() {
        let derived = DerivedFields::declared(["countSquared", "stats.total"]);
        assert!(derived.contains(&[], "countSquared"));
        assert!(derived.contains(&["stats".to_string()], "total"));
        assert!(!derived.contains(&[], "total"));
    }

    #[test]
    fn none_matches_nothing() {
        let derived = DerivedFields::none();
        assert!(!derived.contains(&[], "anything"));
    }

    #[test]
    fn resolver_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let derived = DerivedFields::resolver(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![FieldPath::parse("total")]
        });

        assert!(!derived.is_resolved());
        assert!(derived.contains(&[], "total"));
        assert!(derived.contains(&[], "total"));
        assert!(derived.is_resolved());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rediscover_resolves_again() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut derived = DerivedFields::resolver(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                vec![FieldPath::parse("old")]
            } else {
                vec![FieldPath::parse("new")]
            }
        });

        assert!(derived.contains(&[], "old"));
        derived.rediscover();
        assert!(!derived.is_resolved());
        assert!(derived.contains(&[], "new"));
        assert!(!derived.contains(&[], "old"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
