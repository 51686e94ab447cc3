//! Serve command - start the bot HTTP server
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to neighbors-server crate)
//! - Level 4: configuration validation

use anyhow::Result;
use clap::Args;

use neighbors_core::PlannerConfig;
use neighbors_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run serve command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs, planner: PlannerConfig) -> Result<()> {
    let config = configure_server(&args, planner)?;

    tracing::info!("Starting bot server on {}:{}", config.host, config.port);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs, planner: PlannerConfig) -> Result<ServerConfig> {
    validate_host(&args.host)?;

    Ok(ServerConfig {
        host: args.host.clone(),
        port: args.port,
        planner,
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    // Create tokio runtime for async server
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Validate that the bind host is an IP address
fn validate_host(host: &str) -> Result<()> {
    if host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("Host must be an IP address, got: {}", host);
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
