//! Example to run the racing server standalone
//!
//! Run with: cargo run -p racing-server --example run_server

use racing_server::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::default();

    println!("Starting racing server on port {}", config.port);
    println!("Try: curl -X POST localhost:{}/plays -H 'content-type: application/json' -d '{{\"names\":\"pobi,woni\",\"count\":\"5\"}}'", config.port);

    run_server(config).await
}
