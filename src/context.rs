//! Validation context with a path trail
//!
//! A [`Context`] travels alongside a value through every layer of a
//! refinement chain. It is opaque to refiners: the combinator passes it
//! through unchanged and the failure normalizer reads the path from it so
//! that every failure records *where* in the root input it happened.
//!
//! # Examples
//!
//! ```
//! use sluice::Context;
//!
//! let ctx = Context::root().at("users").at(2usize).at("email");
//!
//! assert_eq!(ctx.path().len(), 3);
//! assert_eq!(ctx.to_string(), "users[2].email");
//! ```

use std::fmt;

/// One step in the path from the root input to a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PathSegment {
    /// A named field or map key
    Key(String),
    /// A position in a sequence
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// The context of a single validation pass.
///
/// Contexts are immutable once handed to a check; [`Context::at`] derives a
/// child rather than mutating the parent, so a context can be shared by every
/// layer of a chain without coordination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    path: Vec<PathSegment>,
}

impl Context {
    /// The context of a root value: an empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Derive the context of a nested value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::{Context, PathSegment};
    ///
    /// let parent = Context::root().at("address");
    /// let child = parent.at("zip");
    ///
    /// assert_eq!(parent.path(), &[PathSegment::Key("address".into())]);
    /// assert_eq!(child.path().len(), 2);
    /// ```
    pub fn at(&self, segment: impl Into<PathSegment>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Context { path }
    }

    /// The path trail, outermost segment first.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Whether this is the context of a root value.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.path.iter().enumerate() {
            match segment {
                PathSegment::Key(_) if i > 0 => write!(f, ".{}", segment)?,
                _ => write!(f, "{}", segment)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        let ctx = Context::root();
        assert!(ctx.is_root());
        assert_eq!(ctx.path(), &[] as &[PathSegment]);
        assert_eq!(ctx.to_string(), "");
    }

    #[test]
    fn test_at_does_not_touch_parent() {
        let parent = Context::root().at("a");
        let _child = parent.at("b");

        assert_eq!(parent.path(), &[PathSegment::Key("a".into())]);
    }

    #[test]
    fn test_display_mixes_keys_and_indexes() {
        let ctx = Context::root().at("items").at(0usize).at("name");
        assert_eq!(ctx.to_string(), "items[0].name");

        let ctx = Context::root().at(3usize).at("x");
        assert_eq!(ctx.to_string(), "[3].x");
    }

    #[test]
    fn test_segment_conversions() {
        assert_eq!(PathSegment::from("k"), PathSegment::Key("k".to_string()));
        assert_eq!(PathSegment::from(String::from("k")), PathSegment::Key("k".to_string()));
        assert_eq!(PathSegment::from(7usize), PathSegment::Index(7));
    }
}
