//! Server command - start the HTTP server
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to racing-server crate)

use anyhow::Result;
use clap::Args;

use racing_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8080")]
    pub port: u16,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
pub fn run(args: ServerArgs, seed: Option<u64>) -> Result<()> {
    let config = configure_server(&args, seed);

    tracing::info!("Starting racing server on port {}", config.port);

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn configure_server(args: &ServerArgs, seed: Option<u64>) -> ServerConfig {
    ServerConfig {
        port: args.port,
        seed,
    }
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_server() {
        let args = ServerArgs { port: 9000 };

        let config = configure_server(&args, Some(3));
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed, Some(3));
    }
}
