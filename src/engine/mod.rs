// src/engine/mod.rs

//! The snapshot-diff-report loop.

pub mod runtime;

pub use runtime::{Runtime, RuntimeOptions};
