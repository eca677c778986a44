//! Racing CLI - Command-line interface
//!
//! Commands:
//! - race: Run a single race in the terminal
//! - serve: Start the HTTP server

mod race_cmd;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "racing")]
#[command(about = "Turn-based car racing game")]
struct Cli {
    /// Seed for power draws (omit for a random race)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single race
    Race(race_cmd::RaceArgs),
    /// Start the HTTP server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Race(args) => race_cmd::run(args, cli.seed),
        Commands::Serve(args) => server::run(args, cli.seed),
    }
}
