// src/diff/path.rs

use std::fmt;

use serde::Serialize;

/// One step from a value's root to a changed location: an object key or an
/// array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{k}"),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Render a path as dotted segments; the empty path is the value's root.
pub fn render(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "root".to_string();
    }
    path.iter()
        .map(|seg| seg.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
