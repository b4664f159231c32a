// src/engine/runtime.rs

use std::io::Write;

use serde_json::Value;
use tokio::io::AsyncRead;
use tracing::{debug, info, warn};

use crate::diff;
use crate::errors::{Result, WatchdiffError};
use crate::normalize::Normalizer;
use crate::report::{format_changelog, Paint};
use crate::snapshot::{BaselinePolicy, Consideration, SnapshotManager};
use crate::stream::StreamDecoder;

/// Options that influence how the loop behaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeOptions {
    pub policy: BaselinePolicy,
    pub paint: Paint,
}

/// The sequential decode → normalize → diff → report loop.
///
/// Generic over the byte source, the normalizer, and the report sink so tests
/// can drive it with in-memory parts. Strictly one value in flight: the loop
/// blocks on the next decode, and reports come out in stream order.
pub struct Runtime<R, N, W> {
    decoder: StreamDecoder<R>,
    normalizer: N,
    snapshots: SnapshotManager,
    paint: Paint,
    out: W,
}

impl<R, N, W> Runtime<R, N, W>
where
    R: AsyncRead + Unpin,
    N: Normalizer,
    W: Write,
{
    pub fn new(reader: R, normalizer: N, options: RuntimeOptions, out: W) -> Self {
        Self {
            decoder: StreamDecoder::new(reader),
            normalizer,
            snapshots: SnapshotManager::new(options.policy),
            paint: options.paint,
            out,
        }
    }

    /// Run until the underlying stream ends.
    ///
    /// Every per-item failure is logged exactly once and skipped; a skipped
    /// item never moves the baseline.
    pub async fn run(mut self) -> Result<()> {
        while let Some(item) = self.decoder.next_object().await {
            let raw = match item {
                Ok(value) => value,
                Err(err) => {
                    warn!(error = %err, "skipping undecodable chunk");
                    continue;
                }
            };

            if let Err(err) = self.process(raw) {
                warn!(error = %err, "skipping update");
            }
        }

        debug!("watch stream ended");
        Ok(())
    }

    fn process(&mut self, raw: Value) -> Result<()> {
        let value = self.normalize(raw)?;

        match self.snapshots.consider(&value) {
            Consideration::Seeded => {
                info!("watching resource, waiting for changes");
            }
            Consideration::DiffRequested => {
                let changelog = diff::diff(self.snapshots.current()?, &value)?;
                let report = format_changelog(&changelog, &self.paint);
                self.out.write_all(report.as_bytes())?;
                self.out.flush()?;
                // Baseline moves only after the full cycle succeeded.
                self.snapshots.commit(&value);
            }
        }

        Ok(())
    }

    fn normalize(&self, raw: Value) -> Result<Value> {
        let bytes = serde_json::to_vec(&raw)?;
        let cleaned = self
            .normalizer
            .normalize(&bytes)
            .map_err(|err| WatchdiffError::Normalize(err.to_string()))?;
        Ok(serde_json::from_slice(&cleaned)?)
    }
}
