use crate::error::{LocustGenError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load an OpenAPI document (YAML or JSON) from a file.
///
/// The document stays untyped so that extraction can skip malformed
/// operations instead of rejecting the whole file. Key order is kept.
pub fn load_openapi<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();

    // Read the file
    let content = fs::read_to_string(path).map_err(|e| {
        LocustGenError::OpenApiLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    // YAML is a superset of JSON, so one parser covers both
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
        LocustGenError::OpenApiLoadError(format!("Failed to parse OpenAPI document: {}", e))
    })?;

    let document = yaml_to_json(yaml);
    validate_openapi(&document)?;

    Ok(document)
}

/// Convert a YAML tree to JSON, stringifying non-string keys such as
/// unquoted response codes (`200:`).
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .map(|(k, v)| (key_to_string(k), yaml_to_json(v)))
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn key_to_string(key: serde_yaml::Value) -> String {
    match yaml_to_json(key) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Version field as text; YAML reads `openapi: 3.1` as a number
fn version_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validate the document shape and version
fn validate_openapi(document: &Value) -> Result<()> {
    if !document.is_object() {
        return Err(LocustGenError::OpenApiLoadError(
            "OpenAPI document must be a mapping".to_string(),
        ));
    }

    if let Some(version) = document.get("openapi") {
        let version = version_text(version);
        if !version.starts_with("3.0") && !version.starts_with("3.1") {
            return Err(LocustGenError::OpenApiLoadError(format!(
                "Unsupported OpenAPI version: {}. Only 3.0.x and 3.1.x are supported.",
                version
            )));
        }
    } else if document.get("swagger").map(version_text).as_deref() != Some("2.0") {
        return Err(LocustGenError::OpenApiLoadError(
            "Document has no 'openapi' version field".to_string(),
        ));
    }

    Ok(())
}

/// First server URL declared by the document, if any
pub fn server_url(document: &Value) -> Option<String> {
    document
        .get("servers")
        .and_then(Value::as_array)
        .and_then(|servers| servers.first())
        .and_then(|server| server.get("url"))
        .and_then(Value::as_str)
        .map(|url| url.trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
}
