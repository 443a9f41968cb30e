//! Field paths into nested state.

use std::fmt;
use std::str::FromStr;

/// Path of object keys from the state root to a field.
///
/// Array elements add no segment: every element of an array stored at
/// `items` is walked with the parent path `items`, so `items.total` names the
/// `total` field of each element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// The empty (root) path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from its segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse a dot-separated path such as `"stats.total"`.
    ///
    /// Empty segments are dropped, so `"a..b"` and `".a.b"` both parse as `a.b`.
    pub fn parse(dotted: &str) -> Self {
        Self::from_segments(dotted.split('.').filter(|s| !s.is_empty()))
    }

    /// The path's segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of a field named `key` under this path.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    /// Whether this path names the field `key` under `parent`.
    pub fn names(&self, parent: &[String], key: &str) -> bool {
        match self.0.split_last() {
            Some((last, prefix)) => last == key && prefix == parent,
            None => false,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_dots() {
        let path = FieldPath::parse("stats.total");
        assert_eq!(path.segments(), ["stats", "total"]);
        assert_eq!(path.to_string(), "stats.total");
    }

    #[test]
    fn parse_drops_empty_segments() {
        assert_eq!(FieldPath::parse(".a..b"), FieldPath::from_segments(["a", "b"]));
        assert!(FieldPath::parse("").is_empty());
    }

    #[test]
    fn names_matches_parent_and_key() {
        let path = FieldPath::parse("stats.total");
        let parent = vec!["stats".to_string()];
        assert!(path.names(&parent, "total"));
        assert!(!path.names(&parent, "count"));
        assert!(!path.names(&[], "total"));
    }

    #[test]
    fn root_names_nothing() {
        assert!(!FieldPath::root().names(&[], ""));
    }

    #[test]
    fn child_appends_segment() {
        let path = FieldPath::parse("a").child("b");
        assert_eq!(path, FieldPath::parse("a.b"));
    }
}
