// src/snapshot/manager.rs

use serde_json::Value;
use thiserror::Error;

/// Which snapshot each new observation is diffed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaselinePolicy {
    /// Rolling reference: the baseline becomes the latest snapshot after
    /// every diff.
    #[default]
    Previous,
    /// Fixed reference: the baseline stays at the first snapshot forever.
    First,
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("no baseline snapshot yet")]
    Empty,
}

/// What the manager decided about an incoming value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consideration {
    /// First value observed; it became the baseline and there is nothing to
    /// diff yet.
    Seeded,
    /// A baseline exists; the caller should diff `current()` against the
    /// value and `commit` it once the cycle succeeds.
    DiffRequested,
}

/// Owns the single mutable baseline value.
///
/// Stored values are deep copies (`Value::clone`), so mutating a value after
/// handing it to the manager never alters the stored baseline.
#[derive(Debug)]
pub struct SnapshotManager {
    policy: BaselinePolicy,
    baseline: Option<Value>,
}

impl SnapshotManager {
    pub fn new(policy: BaselinePolicy) -> Self {
        Self {
            policy,
            baseline: None,
        }
    }

    /// The current baseline; fails while no value has been observed.
    pub fn current(&self) -> Result<&Value, SnapshotError> {
        self.baseline.as_ref().ok_or(SnapshotError::Empty)
    }

    /// Feed the next observed value through the baseline state machine.
    pub fn consider(&mut self, value: &Value) -> Consideration {
        match self.baseline {
            None => {
                self.baseline = Some(value.clone());
                Consideration::Seeded
            }
            Some(_) => Consideration::DiffRequested,
        }
    }

    /// Apply the retention policy after a successful diff cycle.
    ///
    /// Must not be called for a skipped item: the baseline only ever moves on
    /// a completed cycle.
    pub fn commit(&mut self, value: &Value) {
        if self.policy == BaselinePolicy::Previous {
            self.baseline = Some(value.clone());
        }
    }
}
