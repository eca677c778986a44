//! Race command - run one race and print the standings
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_race(), report_results()
//! - Level 3: formatting utilities

use anyhow::{Context, Result};
use clap::Args;

use racing_core::{play, RaceOutcome, RandomPower};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct RaceArgs {
    /// Car names separated by commas (each at most 5 characters)
    #[arg(long)]
    pub names: String,

    /// Number of turns to play
    #[arg(long)]
    pub count: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run race command
pub fn run(args: RaceArgs, seed: Option<u64>) -> Result<()> {
    tracing::info!("Starting race: names={}, count={}", args.names, args.count);

    let outcome = run_race(&args, seed)?;

    report_results(&outcome, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn run_race(args: &RaceArgs, seed: Option<u64>) -> Result<RaceOutcome> {
    let mut power = RandomPower::from_seed_option(seed);
    play(&args.names, &args.count, &mut power).context("Invalid race setup")
}

fn report_results(outcome: &RaceOutcome, args: &RaceArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        print!("{}", format_standings(outcome));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - UTILITIES
// ============================================================================

/// Render each car as `name : ---` followed by the winner line
fn format_standings(outcome: &RaceOutcome) -> String {
    let mut out = String::new();
    for car in &outcome.positions {
        out.push_str(&format!(
            "{} : {}\n",
            car.name,
            "-".repeat(car.position as usize)
        ));
    }
    out.push_str(&format!("\nwinners: {}\n", outcome.winners.join(", ")));
    out
}

// ============================================================================
// TESTS
// ============================================================================
