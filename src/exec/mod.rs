// src/exec/mod.rs

//! Spawning and supervising the external `kubectl get -w` subprocess.

pub mod command;

pub use command::{spawn_watch, wait_and_report};
