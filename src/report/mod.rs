// src/report/mod.rs

//! Rendering a changelog into a human-readable report.

pub mod format;
pub mod paint;

pub use format::{format_changelog, summarize};
pub use paint::Paint;
