pub mod cli;
pub mod commands;
pub mod converters;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod models;
pub mod server;
pub mod telemetry;

pub use converters::generate_locustfile;
pub use error::{LocustGenError, Result};
