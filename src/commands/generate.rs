//! Generate command implementation
//!
//! Renders a locustfile from an OpenAPI file on disk.

use crate::converters::{ClientType, ConvertOptions, Converter, LocustConverter};
use crate::error::Result;
use crate::loader::{load_openapi, server_url};
use colored::Colorize;
use std::fs;
use std::path::Path;

const FALLBACK_HOST: &str = "http://localhost:8080";

/// Arguments of the generate command
pub struct GenerateCommandArgs<'a> {
    pub openapi_path: &'a Path,
    pub output_path: Option<&'a Path>,
    pub host: Option<&'a str>,
    pub client_type: ClientType,
    pub user_class_name: &'a str,
    pub task_weight: u32,
}

/// Execute the generate command and return the rendered script
pub fn execute_generate(args: GenerateCommandArgs<'_>) -> Result<String> {
    let document = load_openapi(args.openapi_path)?;
    eprintln!(
        "{} Loaded OpenAPI file: {}",
        "✓".green(),
        args.openapi_path.display()
    );

    let host = args
        .host
        .map(str::to_string)
        .or_else(|| server_url(&document))
        .unwrap_or_else(|| FALLBACK_HOST.to_string());

    let options = ConvertOptions {
        host,
        client_type: args.client_type,
        user_class_name: args.user_class_name.to_string(),
        task_weight: args.task_weight,
    };

    let script = LocustConverter::new().convert_document(&document, &options)?;

    // Output result
    if let Some(path) = args.output_path {
        fs::write(path, &script)?;
        eprintln!(
            "{} Generated locustfile: {}",
            "✓".green(),
            path.display()
        );
    } else {
        print!("{}", script);
    }

    Ok(script)
}
