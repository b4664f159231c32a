// src/normalize/neat.rs

use anyhow::{Context, Result};
use serde_json::Value;

use crate::normalize::Normalizer;

/// Metadata fields the API server rewrites on its own; diffing them is noise.
const NOISY_METADATA_FIELDS: &[&str] = &[
    "managedFields",
    "resourceVersion",
    "uid",
    "selfLink",
    "creationTimestamp",
    "generation",
];

const LAST_APPLIED_ANNOTATION: &str = "kubectl.kubernetes.io/last-applied-configuration";

/// Strips server-managed noise from a Kubernetes object: the whole `status`
/// subtree, bookkeeping `metadata` fields, and the last-applied-configuration
/// annotation.
///
/// Non-object values pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeatNormalizer;

impl Normalizer for NeatNormalizer {
    fn normalize(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let mut value: Value =
            serde_json::from_slice(raw).context("parsing object for cleanup")?;

        if let Value::Object(obj) = &mut value {
            obj.remove("status");

            if let Some(Value::Object(metadata)) = obj.get_mut("metadata") {
                for field in NOISY_METADATA_FIELDS {
                    metadata.remove(*field);
                }
                let drop_annotations = match metadata.get_mut("annotations") {
                    Some(Value::Object(annotations)) => {
                        annotations.remove(LAST_APPLIED_ANNOTATION);
                        annotations.is_empty()
                    }
                    _ => false,
                };
                if drop_annotations {
                    metadata.remove("annotations");
                }
            }
        }

        serde_json::to_vec(&value).context("re-encoding cleaned object")
    }
}
