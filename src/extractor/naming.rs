//! Identifier derivation for generated task methods
//!
//! Names are valid Python identifiers: ASCII alphanumerics and single
//! underscores, never starting with a digit, never a keyword.

use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::models::HttpMethod;

static INVALID_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("identifier regex is valid"));

static PYTHON_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
        "return", "try", "while", "with", "yield",
    ]
    .into_iter()
    .collect()
});

/// Names a task method must not shadow inside the generated class body.
/// `task` is looked up by every later `@task(N)` decorator.
static CLASS_BODY_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "task", "abstract", "client", "context", "environment", "fixed_count", "host",
        "on_start", "on_stop", "run", "stop", "tasks", "wait", "wait_time", "weight",
    ]
    .into_iter()
    .collect()
});

pub fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(name)
}

/// Replace every run of non-alphanumeric characters with one underscore
/// and trim underscores at both ends
fn collapse(input: &str) -> String {
    INVALID_CHARS_RE
        .replace_all(input, "_")
        .trim_matches('_')
        .to_string()
}

/// `collapse`, then guard against a leading digit
fn clean(input: &str) -> String {
    let collapsed = collapse(input);

    if collapsed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("op_{}", collapsed)
    } else {
        collapsed
    }
}

/// Identifier from an `operationId`; the author's casing is kept
pub fn from_operation_id(operation_id: &str) -> Option<String> {
    Some(clean(operation_id)).filter(|s| !s.is_empty())
}

/// Lower-case identifier from a free-text summary
pub fn from_summary(summary: &str) -> Option<String> {
    Some(clean(&summary.to_lowercase())).filter(|s| !s.is_empty())
}

/// Fallback identifier built from the method and path, e.g. `get_items_item_id`
pub fn from_route(method: HttpMethod, path: &str) -> String {
    // The method prefix already keeps the name from starting with a digit
    let path = collapse(&path.to_lowercase());
    let path = if path.is_empty() { "root" } else { path.as_str() };
    format!("{}_{}", method.as_lower_str(), path)
}

/// Append an underscore to names Python or Locust would choke on
pub fn avoid_reserved(name: String) -> String {
    if is_python_keyword(&name) || CLASS_BODY_NAMES.contains(name.as_str()) {
        format!("{}_", name)
    } else {
        name
    }
}

/// Derive the base name of an operation: operationId, then summary, then route
pub fn derive_name(operation: &Map<String, Value>, method: HttpMethod, path: &str) -> String {
    let name = operation
        .get("operationId")
        .and_then(Value::as_str)
        .and_then(from_operation_id)
        .or_else(|| {
            operation
                .get("summary")
                .and_then(Value::as_str)
                .and_then(from_summary)
        })
        .unwrap_or_else(|| from_route(method, path));

    avoid_reserved(name)
}

/// Hands out unique names in the order they are requested.
///
/// The first claim of a base name gets it unchanged; later claims get
/// `_2`, `_3`, ... skipping any suffix that is already taken.
#[derive(Debug, Default)]
pub struct NameRegistry {
    taken: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, base: String) -> String {
        if !self.taken.contains(&base) {
            self.taken.insert(base.clone());
            return base;
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{}_{}", base, suffix);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
