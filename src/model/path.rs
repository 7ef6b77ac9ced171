//! Addressable locations within a value tree.

use serde::Serialize;
use std::fmt;

/// One step into a value tree: a map key or a list index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// Object key, e.g. `neighbors` in `bgp.neighbors`.
    Key(String),
    /// Array index, e.g. `0` in `neighbors[0]`.
    Index(usize),
}

/// An ordered sequence of segments addressing a node in a [`Value`] tree.
///
/// Renders as `bgp.neighbors[0].remote_as`: key segments join with `.`,
/// index segments append as `[i]` with no dot. The root path is the empty
/// sequence and renders as the empty string.
///
/// `Ord` follows segment order so change lists can be sorted
/// deterministically when callers need a path-ordered view.
///
/// [`Value`]: crate::model::Value
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty (root) path.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Nesting depth of the addressed node (root = 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Return a new path extended by an object key.
    #[must_use]
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// Return a new path extended by an array index.
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(PathSegment::Index(index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{key}")?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
