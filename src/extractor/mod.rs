//! Operation discovery over the OpenAPI `paths` object
//!
//! The walk is best-effort: anything that is not shaped like a path item or
//! an operation object is skipped and extraction carries on.

pub mod naming;

pub use naming::NameRegistry;

use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::models::{HttpMethod, OperationDescriptor};

/// Extract operations from a whole OpenAPI document
pub fn extract_operations(document: &Value) -> Vec<OperationDescriptor> {
    match document.get("paths") {
        Some(paths) => extract_paths(paths),
        None => {
            tracing::debug!("Document has no paths object");
            Vec::new()
        }
    }
}

/// Extract operations from a `paths` mapping, in document order
pub fn extract_paths(paths: &Value) -> Vec<OperationDescriptor> {
    let Some(paths) = paths.as_object() else {
        tracing::debug!("Ignoring paths value that is not a mapping");
        return Vec::new();
    };

    let mut registry = NameRegistry::new();
    let mut operations = Vec::new();

    for (path, path_item) in paths {
        let Some(path_item) = path_item.as_object() else {
            tracing::debug!(path = %path, "Skipping path item that is not a mapping");
            continue;
        };

        let shared_params = path_item.get("parameters");

        for (key, operation) in path_item {
            let Some(method) = HttpMethod::from_key(key) else {
                continue;
            };

            let Some(operation) = operation.as_object() else {
                tracing::debug!(
                    path = %path,
                    method = %method,
                    "Skipping operation that is not a mapping"
                );
                continue;
            };

            let name = registry.claim(naming::derive_name(operation, method, path));
            let (path_params, query_params) =
                collect_parameters(shared_params, operation.get("parameters"));

            operations.push(OperationDescriptor {
                path: path.clone(),
                method,
                name,
                summary: summary_of(operation),
                has_request_body: operation.contains_key("requestBody"),
                path_params,
                query_params,
            });
        }
    }

    tracing::debug!(count = operations.len(), "Extracted operations");
    operations
}

/// Non-empty `summary`, else non-empty `description`
fn summary_of(operation: &Map<String, Value>) -> Option<String> {
    ["summary", "description"].iter().find_map(|key| {
        operation
            .get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Path and query parameter names, path-item level first, deduplicated
fn collect_parameters(
    shared: Option<&Value>,
    own: Option<&Value>,
) -> (Vec<String>, Vec<String>) {
    let mut seen: IndexSet<(String, String)> = IndexSet::new();

    for params in [shared, own].into_iter().flatten() {
        let Some(params) = params.as_array() else {
            continue;
        };

        for param in params {
            // $ref parameters carry no name and are left out
            let name = param.get("name").and_then(Value::as_str);
            let location = param.get("in").and_then(Value::as_str);
            if let (Some(name), Some(location)) = (name, location) {
                seen.insert((name.to_string(), location.to_string()));
            }
        }
    }

    let by_location = |wanted: &str| {
        seen.iter()
            .filter(|(_, location)| location == wanted)
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>()
    };

    (by_location("path"), by_location("query"))
}
