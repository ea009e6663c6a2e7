//! Locust script converter for OpenAPI operations
//!
//! This module generates Python locustfiles with one `@task` stub per
//! operation.

use crate::error::Result;
use crate::models::OperationDescriptor;

use super::{ConvertOptions, Converter};

/// Converter for generating Locust test scripts
#[derive(Debug, Clone, Default)]
pub struct LocustConverter;

impl LocustConverter {
    /// Create a new LocustConverter
    pub fn new() -> Self {
        Self
    }

    /// Escape a value for use inside a double-quoted Python string
    fn py_string(value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                _ => out.push(c),
            }
        }
        out.push('"');
        out
    }

    /// Fold whitespace so free text fits on one line
    fn single_line(value: &str) -> String {
        value.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Render a one-line docstring body that cannot close the literal early
    fn docstring(value: &str) -> String {
        Self::single_line(value)
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
    }

    /// Generate imports, class declaration and class attributes
    fn generate_preamble(options: &ConvertOptions) -> Vec<String> {
        vec![
            "from typing import Any, Dict".to_string(),
            String::new(),
            "from locust import FastHttpUser, HttpUser, between, task".to_string(),
            String::new(),
            String::new(),
            format!(
                "class {}({}):",
                options.user_class_name,
                options.client_type.base_class()
            ),
            "    \"\"\"".to_string(),
            "    Auto-generated skeleton tasks.".to_string(),
            String::new(),
            "    Fill in payloads and sequencing based on your domain logic.".to_string(),
            "    You can move validated data between tasks using shared attributes.".to_string(),
            "    \"\"\"".to_string(),
            String::new(),
            "    wait_time = between(1, 5)".to_string(),
            format!("    host = {}", Self::py_string(&options.host)),
            String::new(),
        ]
    }

    /// `path: a, b; query: c`, or None when the operation has no parameters
    fn parameter_comment(operation: &OperationDescriptor) -> Option<String> {
        let mut parts = Vec::new();
        if !operation.path_params.is_empty() {
            parts.push(format!("path: {}", operation.path_params.join(", ")));
        }
        if !operation.query_params.is_empty() {
            parts.push(format!("query: {}", operation.query_params.join(", ")));
        }

        if parts.is_empty() {
            None
        } else {
            Some(Self::single_line(&parts.join("; ")))
        }
    }

    /// Generate the task stub for one operation
    fn generate_task(operation: &OperationDescriptor, weight: u32) -> Vec<String> {
        let doc = operation
            .summary
            .as_deref()
            .map(Self::docstring)
            .unwrap_or_else(|| Self::docstring(&operation.request_name()));

        let mut lines = vec![
            format!("    @task({})", weight),
            format!("    def {}(self) -> None:", operation.name),
            format!("        \"\"\"{}\"\"\"", doc),
            "        # TODO: Replace placeholder payloads with schema-aware data".to_string(),
        ];

        if operation.has_request_body {
            lines.push("        payload: Dict[str, Any] = {".to_string());
            lines.push(
                "            # populate request body using the schema in the OpenAPI document"
                    .to_string(),
            );
            lines.push("        }".to_string());
        } else {
            lines.push("        payload = None".to_string());
        }

        if let Some(comment) = Self::parameter_comment(operation) {
            lines.push(format!("        # Parameters: {}", comment));
        }

        lines.extend([
            "        with self.client.request(".to_string(),
            format!("            {},", Self::py_string(operation.method.as_str())),
            format!("            {},", Self::py_string(&operation.path)),
            format!(
                "            name={},",
                Self::py_string(&operation.request_name())
            ),
            "            json=payload,".to_string(),
            "            params={},".to_string(),
            "            catch_response=True,".to_string(),
            "        ) as response:".to_string(),
            "            response.raise_for_status()".to_string(),
            "            # TODO: capture response data to chain into subsequent tasks".to_string(),
            String::new(),
        ]);

        lines
    }
}

impl Converter for LocustConverter {
    type Output = String;

    fn convert_operations(
        &self,
        operations: &[OperationDescriptor],
        options: &ConvertOptions,
    ) -> Result<Self::Output> {
        options.validate()?;

        let mut lines = Self::generate_preamble(options);

        for operation in operations {
            lines.extend(Self::generate_task(operation, options.task_weight));
        }

        if operations.is_empty() {
            lines.push(
                "    # No operations were discovered in the provided OpenAPI document.".to_string(),
            );
        } else {
            // Drop the blank line after the last task
            lines.pop();
        }

        tracing::debug!(
            tasks = operations.len(),
            client_type = %options.client_type,
            "Rendered locustfile"
        );

        Ok(lines.join("\n") + "\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::ClientType;
    use crate::models::HttpMethod;

    fn operation(method: HttpMethod, path: &str, name: &str) -> OperationDescriptor {
        OperationDescriptor {
            path: path.to_string(),
            method,
            name: name.to_string(),
            summary: None,
            has_request_body: false,
            path_params: vec![],
            query_params: vec![],
        }
    }

    #[test]
    fn test_py_string_escapes() {
        assert_eq!(LocustConverter::py_string("/a"), "\"/a\"");
        assert_eq!(
            LocustConverter::py_string("say \"hi\"\\ \n"),
            "\"say \\\"hi\\\"\\\\ \\n\""
        );
    }

    #[test]
    fn test_docstring_folds_and_escapes() {
        assert_eq!(
            LocustConverter::docstring("List\n   all \"users\""),
            "List all \\\"users\\\""
        );
    }

    #[test]
    fn test_preamble_uses_client_type() {
        let options = ConvertOptions {
            host: "https://api.example.com".to_string(),
            client_type: ClientType::Http,
            user_class_name: "ShopUser".to_string(),
            task_weight: 1,
        };
        let script = LocustConverter::new()
            .convert_operations(&[], &options)
            .unwrap();

        assert!(script.contains("class ShopUser(HttpUser):"));
        assert!(script.contains("    host = \"https://api.example.com\""));
        assert!(script.contains("wait_time = between(1, 5)"));
        assert!(script.ends_with("document.\n"));
    }

    #[test]
    fn test_task_stub_contents() {
        let mut op = operation(HttpMethod::Post, "/items/{item_id}", "create_item");
        op.summary = Some("Create item".to_string());
        op.has_request_body = true;
        op.path_params = vec!["item_id".to_string()];
        op.query_params = vec!["dry_run".to_string(), "trace".to_string()];

        let options = ConvertOptions {
            task_weight: 3,
            ..Default::default()
        };
        let script = LocustConverter::new()
            .convert_operations(&[op], &options)
            .unwrap();

        assert!(script.contains("    @task(3)\n    def create_item(self) -> None:"));
        assert!(script.contains("        \"\"\"Create item\"\"\""));
        assert!(script.contains("        payload: Dict[str, Any] = {"));
        assert!(script.contains("        # Parameters: path: item_id; query: dry_run, trace"));
        assert!(script.contains("            \"POST\",\n            \"/items/{item_id}\","));
        assert!(script.contains("            name=\"POST /items/{item_id}\","));
        assert!(script.contains("# TODO: capture response data"));
        assert!(!script.contains("No operations were discovered"));
        assert!(script.ends_with("subsequent tasks\n"));
    }

    #[test]
    fn test_task_without_body_or_summary() {
        let op = operation(HttpMethod::Get, "/health", "get_health");
        let script = LocustConverter::new()
            .convert_operations(&[op], &ConvertOptions::default())
            .unwrap();

        assert!(script.contains("        \"\"\"GET /health\"\"\""));
        assert!(script.contains("        payload = None"));
        assert!(!script.contains("# Parameters:"));
    }

    #[test]
    fn test_keyword_class_name_is_rejected() {
        let options = ConvertOptions {
            user_class_name: "class".to_string(),
            ..Default::default()
        };
        let result = LocustConverter::new().convert_operations(&[], &options);

        assert!(matches!(
            result,
            Err(crate::LocustGenError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let ops = vec![
            operation(HttpMethod::Get, "/a", "get_a"),
            operation(HttpMethod::Delete, "/b/{id}", "delete_b_id"),
        ];
        let options = ConvertOptions::default();
        let converter = LocustConverter::new();

        let first = converter.convert_operations(&ops, &options).unwrap();
        let second = converter.convert_operations(&ops, &options).unwrap();
        assert_eq!(first, second);
    }
}
