// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchdiffError {
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Normalization error: {0}")]
    Normalize(String),

    #[error("Diff error: {0}")]
    Diff(#[from] crate::diff::DiffError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] crate::snapshot::SnapshotError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, WatchdiffError>;
