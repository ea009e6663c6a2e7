use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::converters::ClientType;

#[derive(Parser)]
#[command(name = "locustgen")]
#[command(version)]
#[command(about = "Generate Locust load test skeletons from OpenAPI documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List operations discovered in an OpenAPI file
    List {
        /// Path to OpenAPI file (YAML or JSON)
        #[arg(short, long)]
        openapi: PathBuf,
    },

    /// Generate a locustfile from an OpenAPI file
    Generate {
        /// Path to OpenAPI file (YAML or JSON)
        #[arg(short, long)]
        openapi: PathBuf,

        /// Target host (defaults to the first server URL in the document)
        #[arg(long)]
        host: Option<String>,

        /// Locust user base class
        #[arg(short, long, default_value = "fast_http")]
        client_type: ClientType,

        /// Name of the generated user class
        #[arg(short, long, default_value = "GeneratedUser")]
        user_class_name: String,

        /// Weight applied to every generated task
        #[arg(short = 'w', long, default_value = "1")]
        task_weight: u32,

        /// Output file (stdout if not specified)
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },

    /// Start the generation HTTP service
    Serve {
        /// Address to bind (overrides LOCUSTGEN_BIND)
        #[arg(short, long)]
        bind: Option<IpAddr>,

        /// Port number (overrides LOCUSTGEN_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
