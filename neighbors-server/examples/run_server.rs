//! Example to run the bot server standalone
//!
//! Run with: cargo run -p neighbors-server --example run_server

use neighbors_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting bot server on {}:{}", config.host, config.port);
    println!("POST a snapshot to /ai_attack or /ai_upgrade");

    run_server(config).await
}
