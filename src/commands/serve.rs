use crate::server::{self, ServerConfig};
use crate::Result;
use colored::*;
use std::net::IpAddr;

pub async fn execute_serve(bind: Option<IpAddr>, port: Option<u16>) -> Result<()> {
    let config = ServerConfig::from_env().with_overrides(bind, port);

    println!("{}", "Starting locustgen service...".bright_blue());
    println!("  Address: {}", config.socket_addr());
    println!("  Endpoints: POST /generate, GET /health");
    println!();

    server::start_server(config.socket_addr()).await?;

    Ok(())
}
