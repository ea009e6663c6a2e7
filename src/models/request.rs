use serde::{Deserialize, Serialize};

fn default_user_class_name() -> String {
    "GeneratedUser".to_string()
}

fn default_client_type() -> String {
    "fast_http".to_string()
}

fn default_task_weight() -> u32 {
    1
}

/// Body of `POST /generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Parsed OpenAPI document
    pub openapi: serde_json::Value,

    /// Target host for Locust, e.g. `https://api.example.com`
    pub host: String,

    /// `fast_http` or `http`; validated when the render options are built
    #[serde(default = "default_client_type")]
    pub client_type: String,

    /// Name of the generated Locust user class
    #[serde(default = "default_user_class_name")]
    pub user_class_name: String,

    /// Weight applied to every generated task
    #[serde(default = "default_task_weight")]
    pub task_weight: u32,
}

/// Response of `POST /generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Python source of the generated locustfile
    pub locustfile: String,
}
