// src/snapshot/mod.rs

//! Baseline snapshot ownership and retention policy.

pub mod manager;

pub use manager::{BaselinePolicy, Consideration, SnapshotError, SnapshotManager};
