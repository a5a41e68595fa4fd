//! Field paths for locating the value a failure refers to.
//!
//! This module provides [`FieldPath`] and [`PathSegment`]. A path renders as
//! a flat, dot-joined *field key* (`users.0.email`), which is the address
//! used for template overrides and for grouping messages in a report.

use std::fmt::{self, Display};

/// A segment of a field path.
///
/// Validation engines report paths as a mix of object keys and array indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g., `user`, `email`)
    Field(String),
    /// An array position (e.g., `0`, `42`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// The location of a failing value inside the validated input.
///
/// `FieldPath` is immutable: the `push_*` builders return a new path and
/// leave the original untouched.
///
/// # Example
///
/// ```rust
/// use errata::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.key(), "users.0.email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path. Its key is the empty string.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from an already-joined field key.
    ///
    /// Every dot-separated part becomes a field segment, so
    /// `FieldPath::from_key(k).key() == k` for any `k`.
    pub fn from_key(key: &str) -> Self {
        if key.is_empty() {
            return Self::root();
        }
        Self {
            segments: key.split('.').map(PathSegment::field).collect(),
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path (all segments except the last), or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Returns the flat field key: all segments joined with `.`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for FieldPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_key_is_empty() {
        let path = FieldPath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.key(), "");
    }

    #[test]
    fn test_single_field() {
        let path = FieldPath::root().push_field("user");
        assert_eq!(path.key(), "user");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_indices_join_with_dots() {
        let path = FieldPath::root()
            .push_field("items")
            .push_index(2)
            .push_field("sku");
        assert_eq!(path.key(), "items.2.sku");
    }

    #[test]
    fn test_leading_index() {
        let path = FieldPath::root().push_index(0).push_field("name");
        assert_eq!(path.key(), "0.name");
    }

    #[test]
    fn test_from_key_round_trips() {
        let path = FieldPath::from_key("address.city");
        assert_eq!(path.len(), 2);
        assert_eq!(path.key(), "address.city");
        assert!(FieldPath::from_key("").is_root());
    }

    #[test]
    fn test_parent_and_last() {
        let path = FieldPath::root().push_field("a").push_index(3);
        assert_eq!(path.last(), Some(&PathSegment::Index(3)));
        assert_eq!(path.parent(), Some(FieldPath::from_field("a")));
        assert_eq!(FieldPath::root().parent(), None);
    }

    #[test]
    fn test_push_does_not_mutate() {
        let base = FieldPath::from_field("items");
        let child = base.push_index(0);
        assert_eq!(base.key(), "items");
        assert_eq!(child.key(), "items.0");
    }
}
