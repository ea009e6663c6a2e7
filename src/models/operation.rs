use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods that may appear as keys of an OpenAPI path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    /// Match a path item key against the known verbs (case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "patch" => Some(Self::Patch),
            "delete" => Some(Self::Delete),
            "options" => Some(Self::Options),
            "head" => Some(Self::Head),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Trace => "TRACE",
        }
    }

    pub fn as_lower_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (path, method) pair discovered in an OpenAPI document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// The literal path template, e.g. `/users/{id}`
    pub path: String,

    pub method: HttpMethod,

    /// Python identifier used as the task method name, unique per run
    pub name: String,

    /// Operation summary, falling back to its description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Whether the operation declares a `requestBody`
    #[serde(default)]
    pub has_request_body: bool,

    /// Names of `in: path` parameters in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_params: Vec<String>,

    /// Names of `in: query` parameters in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_params: Vec<String>,
}

impl OperationDescriptor {
    /// Request label used by Locust statistics, e.g. `GET /users/{id}`
    pub fn request_name(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}
