// src/normalize/mod.rs

//! Cleanup of raw objects before diffing.
//!
//! Normalization is a pure bytes-in/bytes-out seam: the loop hands each
//! decoded object through a [`Normalizer`] before it is considered for
//! diffing, so noisy server-managed fields never show up in reports.

pub mod neat;

pub use neat::NeatNormalizer;

use anyhow::Result;

/// A pure transform from a raw object encoding to a cleaned one.
pub trait Normalizer {
    fn normalize(&self, raw: &[u8]) -> Result<Vec<u8>>;
}

/// Identity transform, used by `--raw` and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Normalizer for Passthrough {
    fn normalize(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(raw.to_vec())
    }
}
