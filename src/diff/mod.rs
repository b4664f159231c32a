// src/diff/mod.rs

//! Structural diff between two JSON values.

pub mod engine;
pub mod path;

pub use engine::{diff, Change, ChangeKind, Changelog, DiffError};
pub use path::PathSegment;
