//! Neighbors Force Server - HTTP API for the bot player
//!
//! This crate provides the web boundary around the core evaluator:
//! - `POST /ai_attack` and `POST /ai_upgrade` taking a turn snapshot
//! - Status endpoint
//! - Rejection of snapshots the core cannot evaluate

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use neighbors_core::PlannerConfig;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub planner: PlannerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            planner: PlannerConfig::default(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Bot API
        .route("/ai_attack", post(routes::bot::ai_attack))
        .route("/ai_upgrade", post(routes::bot::ai_upgrade))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let ip: IpAddr = config.host.parse()?;
    let addr = SocketAddr::new(ip, config.port);
    let state = Arc::new(ServerState::new(config.planner));
    let router = create_router(state);

    tracing::info!("Neighbors Force bot starting on http://{}", addr);
    tracing::info!(
        "Attack strategy: {:?}, upgrade strategy: {:?}, tie break: {:?}",
        config.planner.attack_strategy,
        config.planner.upgrade_strategy,
        config.planner.tie_break
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
