//! Converters for generating load test scripts from OpenAPI documents
//!
//! This module provides the converter trait, the configuration shared by
//! all converters and the Locust implementation.

pub mod locust;

pub use locust::LocustConverter;

use crate::error::{LocustGenError, Result};
use crate::extractor::{self, naming};
use crate::models::{GenerationRequest, OperationDescriptor};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Which Locust user base class the generated script extends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ClientType {
    /// `FastHttpUser`, backed by geventhttpclient
    #[default]
    #[value(name = "fast_http")]
    FastHttp,
    /// `HttpUser`, backed by requests
    #[value(name = "http", alias = "requests")]
    Http,
}

impl ClientType {
    /// Locust base class for the generated user
    pub fn base_class(&self) -> &'static str {
        match self {
            Self::FastHttp => "FastHttpUser",
            Self::Http => "HttpUser",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FastHttp => "fast_http",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = LocustGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fast_http" => Ok(Self::FastHttp),
            "http" | "requests" => Ok(Self::Http),
            other => Err(LocustGenError::InvalidConfiguration(format!(
                "Unsupported client_type '{}'. Supported: fast_http, http",
                other
            ))),
        }
    }
}

/// Configuration options for converters
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Host the generated user targets
    pub host: String,
    pub client_type: ClientType,
    /// Name of the generated user class
    pub user_class_name: String,
    /// Weight applied to every task
    pub task_weight: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            host: "http://localhost:8080".to_string(),
            client_type: ClientType::default(),
            user_class_name: "GeneratedUser".to_string(),
            task_weight: 1,
        }
    }
}

impl ConvertOptions {
    /// Check the values a script cannot be rendered without
    pub fn validate(&self) -> Result<()> {
        if self.task_weight == 0 {
            return Err(LocustGenError::InvalidConfiguration(
                "task_weight must be a positive integer".to_string(),
            ));
        }

        if !is_python_identifier(&self.user_class_name) {
            return Err(LocustGenError::InvalidConfiguration(format!(
                "user_class_name '{}' is not a valid Python class name",
                self.user_class_name
            )));
        }

        Ok(())
    }
}

impl TryFrom<&GenerationRequest> for ConvertOptions {
    type Error = LocustGenError;

    fn try_from(request: &GenerationRequest) -> Result<Self> {
        Ok(Self {
            host: request.host.clone(),
            client_type: request.client_type.parse()?,
            user_class_name: request.user_class_name.clone(),
            task_weight: request.task_weight,
        })
    }
}

fn is_python_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let well_formed = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    well_formed && !naming::is_python_keyword(name)
}

/// Trait for converting OpenAPI operations to test scripts
pub trait Converter {
    /// The output type of the conversion (usually String for script content)
    type Output;

    /// Convert an already extracted operation list; options are validated here
    fn convert_operations(
        &self,
        operations: &[OperationDescriptor],
        options: &ConvertOptions,
    ) -> Result<Self::Output>;

    /// Extract the operations of a whole document and convert them
    fn convert_document(
        &self,
        document: &serde_json::Value,
        options: &ConvertOptions,
    ) -> Result<Self::Output> {
        let operations = extractor::extract_operations(document);
        self.convert_operations(&operations, options)
    }
}

/// Generate a locustfile for a service request
pub fn generate_locustfile(request: &GenerationRequest) -> Result<String> {
    let options = ConvertOptions::try_from(request)?;
    LocustConverter::new().convert_document(&request.openapi, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(client_type: &str) -> GenerationRequest {
        GenerationRequest {
            openapi: serde_json::json!({"paths": {}}),
            host: "https://api.example.com".to_string(),
            client_type: client_type.to_string(),
            user_class_name: "GeneratedUser".to_string(),
            task_weight: 1,
        }
    }

    #[test]
    fn test_client_type_from_str() {
        assert_eq!("fast_http".parse::<ClientType>().unwrap(), ClientType::FastHttp);
        assert_eq!("http".parse::<ClientType>().unwrap(), ClientType::Http);
        assert_eq!("requests".parse::<ClientType>().unwrap(), ClientType::Http);
    }

    #[test]
    fn test_bogus_client_type_is_invalid_configuration() {
        let result = generate_locustfile(&request("bogus"));
        match result {
            Err(LocustGenError::InvalidConfiguration(message)) => {
                assert!(message.contains("bogus"), "unexpected message: {message}");
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_weight_is_rejected() {
        let mut req = request("http");
        req.task_weight = 0;
        assert!(matches!(
            generate_locustfile(&req),
            Err(LocustGenError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_user_class_name_must_be_identifier() {
        for bad in ["", "1User", "My User", "user-class", "class", "None"] {
            let mut req = request("http");
            req.user_class_name = bad.to_string();
            assert!(
                matches!(
                    generate_locustfile(&req),
                    Err(LocustGenError::InvalidConfiguration(_))
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_empty_paths_renders_skeleton() {
        let script = generate_locustfile(&request("fast_http")).unwrap();
        assert!(script.contains("class GeneratedUser(FastHttpUser):"));
        assert!(script.contains("No operations were discovered"));
        assert!(!script.contains("@task"));
    }
}
