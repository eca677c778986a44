//! Racing Server - HTTP API for running and listing races
//!
//! This crate provides the web backend:
//! - `POST /plays` runs a race and stores the result
//! - `GET /plays` lists stored races
//! - `GET /api/status` health check

mod error;
mod routes;
mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use error::ApiError;
pub use state::{GameRecord, ServerState};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Seed for power draws (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            seed: None,
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/status", get(routes::status::status_handler))
        .route(
            "/plays",
            get(routes::plays::list_plays).post(routes::plays::create_play),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.seed));
    let router = create_router(state);

    tracing::info!("Racing server starting on http://0.0.0.0:{}", config.port);
    if let Some(seed) = config.seed {
        tracing::info!("Power draws seeded with {}", seed);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
