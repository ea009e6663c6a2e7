use crate::{Result, extractor, loader};
use colored::*;
use std::path::Path;

pub fn execute_list(openapi_path: &Path) -> Result<()> {
    println!("{}", "Loading OpenAPI file...".bright_blue());
    println!("  Path: {}", openapi_path.display());

    let document = loader::load_openapi(openapi_path)?;

    println!("\n{}", "✓ OpenAPI loaded successfully".green());
    if let Some(title) = document
        .get("info")
        .and_then(|info| info.get("title"))
        .and_then(|title| title.as_str())
    {
        println!("  Title: {}", title.bold());
    }
    if let Some(host) = loader::server_url(&document) {
        println!("  Server: {}", host);
    }
    println!();

    let operations = extractor::extract_operations(&document);

    if operations.is_empty() {
        println!("{}", "No operations found".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Operations ({}):", operations.len()).bold()
    );
    for (idx, op) in operations.iter().enumerate() {
        println!();
        println!(
            "  {}. {} {}",
            idx + 1,
            format!("{:<7}", op.method.as_str()).bright_cyan(),
            op.path.bold()
        );
        println!("     Task: {}", op.name);

        if let Some(ref summary) = op.summary {
            println!("     Summary: {}", summary);
        }

        if !op.path_params.is_empty() || !op.query_params.is_empty() {
            let mut params: Vec<String> = op.path_params.iter().map(|p| format!("{{{}}}", p)).collect();
            params.extend(op.query_params.iter().map(|q| format!("?{}", q)));
            println!("     Parameters: {}", params.join(", "));
        }
    }

    Ok(())
}
