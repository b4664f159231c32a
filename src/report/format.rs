// src/report/format.rs

use serde_json::Value;

use crate::diff::{path, Change, ChangeKind};
use crate::report::paint::Paint;

/// Rendered summaries longer than this get cut to [`TRUNCATE_AT`] characters
/// plus an ellipsis.
const MAX_SUMMARY_CHARS: usize = 100;
const TRUNCATE_AT: usize = 97;

/// How many object keys a summary shows before collapsing to a key count.
const MAX_SUMMARY_KEYS: usize = 3;

/// Render a changelog as a numbered, optionally colorized report.
///
/// An empty changelog is a single "No changes detected" line; otherwise a
/// header with the total count followed by one block per change, numbered
/// from 1, in changelog order.
pub fn format_changelog(changelog: &[Change], paint: &Paint) -> String {
    if changelog.is_empty() {
        return format!("{}\n", paint.yellow("No changes detected"));
    }

    let separator = "=".repeat(60);
    let mut out = String::new();
    out.push_str(&paint.cyan(&separator));
    out.push('\n');
    out.push_str(&paint.bold_white(&format!("Found {} changes:", changelog.len())));
    out.push('\n');
    out.push_str(&paint.cyan(&separator));
    out.push('\n');

    for (i, change) in changelog.iter().enumerate() {
        let path = path::render(&change.path);
        out.push_str(&paint.bold_white(&format!("{}. ", i + 1)));

        match change.kind {
            ChangeKind::Create => {
                out.push_str(&paint.bold_green("+ CREATED: "));
                out.push_str(&paint.green(&path));
                out.push('\n');
                out.push_str(&paint.green("  + Value: "));
                out.push_str(&paint.bold_green(&summarize_opt(change.to.as_ref())));
                out.push('\n');
            }
            ChangeKind::Update => {
                out.push_str(&paint.bold_yellow("~ UPDATED: "));
                out.push_str(&paint.yellow(&path));
                out.push('\n');
                out.push_str(&paint.red("  - Old: "));
                out.push_str(&paint.bold_red(&summarize_opt(change.from.as_ref())));
                out.push('\n');
                out.push_str(&paint.green("  + New: "));
                out.push_str(&paint.bold_green(&summarize_opt(change.to.as_ref())));
                out.push('\n');
            }
            ChangeKind::Delete => {
                out.push_str(&paint.bold_red("- DELETED: "));
                out.push_str(&paint.red(&path));
                out.push('\n');
                out.push_str(&paint.red("  - Value: "));
                out.push_str(&paint.bold_red(&summarize_opt(change.from.as_ref())));
                out.push('\n');
            }
        }
    }

    out.push('\n');
    out.push_str(&paint.cyan(&separator));
    out.push('\n');
    out
}

fn summarize_opt(value: Option<&Value>) -> String {
    value.map(summarize).unwrap_or_else(|| "null".to_string())
}

/// One-line summary of a value for the report.
///
/// Long strings are truncated, objects show at most three keys plus a key
/// count, arrays show only their length.
pub fn summarize(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => {
            if s.chars().count() > MAX_SUMMARY_CHARS {
                format!("{}...", take_chars(s, TRUNCATE_AT))
            } else {
                format!("\"{s}\"")
            }
        }
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            if keys.len() > MAX_SUMMARY_KEYS {
                format!(
                    "map[{}... ({} keys)]",
                    keys[..MAX_SUMMARY_KEYS].join(", "),
                    keys.len()
                )
            } else {
                format!("map[{}]", keys.join(", "))
            }
        }
        Value::Array(items) => format!("array[{} items]", items.len()),
        other => {
            let s = other.to_string();
            if s.chars().count() > MAX_SUMMARY_CHARS {
                format!("{}...", take_chars(&s, TRUNCATE_AT))
            } else {
                s
            }
        }
    }
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
