// src/diff/engine.rs

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::diff::path::{self, PathSegment};

/// Maximum nesting depth the engine will descend into.
///
/// `serde_json` refuses to parse anything deeper than 128 levels, so decoded
/// values never get near this; the guard turns a hand-built pathological tree
/// into a whole-item error instead of a partially reported changelog.
pub const MAX_DEPTH: usize = 512;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("value nesting exceeds {MAX_DEPTH} levels at '{path}'")]
    TooDeep { path: String },
}

/// What happened at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

/// One difference between the old and new value.
///
/// `from` is absent for a Create, `to` is absent for a Delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    pub path: Vec<PathSegment>,
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Value>,
}

pub type Changelog = Vec<Change>;

/// Compute the ordered changelog turning `old` into `new`.
///
/// Objects are recursed over the union of their keys in lexicographic order
/// (which is also `serde_json::Map`'s own iteration order), arrays by
/// position; anything else that differs is a single Update at the current
/// path. Equality is deep and type-sensitive, so `1` and `"1"` are never
/// equal. The ordering is deterministic: the same two values always produce
/// the same changelog.
pub fn diff(old: &Value, new: &Value) -> Result<Changelog, DiffError> {
    let mut changes = Vec::new();
    let mut path = Vec::new();
    walk(old, new, &mut path, &mut changes, 0)?;
    Ok(changes)
}

fn walk(
    old: &Value,
    new: &Value,
    path: &mut Vec<PathSegment>,
    out: &mut Changelog,
    depth: usize,
) -> Result<(), DiffError> {
    if depth > MAX_DEPTH {
        return Err(DiffError::TooDeep {
            path: path::render(path),
        });
    }

    match (old, new) {
        (Value::Object(a), Value::Object(b)) => {
            let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
            for key in keys {
                path.push(PathSegment::Key(key.clone()));
                match (a.get(key.as_str()), b.get(key.as_str())) {
                    (Some(ov), Some(nv)) => walk(ov, nv, path, out, depth + 1)?,
                    (None, Some(nv)) => out.push(Change {
                        path: path.clone(),
                        kind: ChangeKind::Create,
                        from: None,
                        to: Some(nv.clone()),
                    }),
                    (Some(ov), None) => out.push(Change {
                        path: path.clone(),
                        kind: ChangeKind::Delete,
                        from: Some(ov.clone()),
                        to: None,
                    }),
                    (None, None) => unreachable!("key came from the union of both maps"),
                }
                path.pop();
            }
        }

        (Value::Array(a), Value::Array(b)) => {
            let shared = a.len().min(b.len());
            for i in 0..shared {
                path.push(PathSegment::Index(i));
                walk(&a[i], &b[i], path, out, depth + 1)?;
                path.pop();
            }
            for (i, nv) in b.iter().enumerate().skip(shared) {
                out.push(Change {
                    path: with_index(path, i),
                    kind: ChangeKind::Create,
                    from: None,
                    to: Some(nv.clone()),
                });
            }
            for (i, ov) in a.iter().enumerate().skip(shared) {
                out.push(Change {
                    path: with_index(path, i),
                    kind: ChangeKind::Delete,
                    from: Some(ov.clone()),
                    to: None,
                });
            }
        }

        // Scalars, or a kind mismatch (object vs array, number vs string, ...).
        (a, b) => {
            if a != b {
                out.push(Change {
                    path: path.clone(),
                    kind: ChangeKind::Update,
                    from: Some(a.clone()),
                    to: Some(b.clone()),
                });
            }
        }
    }

    Ok(())
}

fn with_index(path: &[PathSegment], index: usize) -> Vec<PathSegment> {
    let mut p = path.to_vec();
    p.push(PathSegment::Index(index));
    p
}
