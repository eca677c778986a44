//! Racing Core - Turn-based car race engine
//!
//! This crate provides the core race logic:
//! - Power sources (random and scripted) deciding each move
//! - Cars with validated names and non-decreasing positions
//! - Car lineups that advance turn by turn and report winners
//! - Turn counting and name splitting for raw input
//!
//! The engine performs no I/O; adapters live in `racing-server` and `racing-cli`.

pub mod error;
pub mod power;
pub mod car;
pub mod cars;
pub mod game_count;
pub mod names;
pub mod race;

// Re-exports for convenient access
pub use error::{RaceError, Result};
pub use power::{PowerSource, RandomPower, ScriptedPower, MAX_POWER};
pub use car::{Car, MAX_NAME_LENGTH, MOVE_THRESHOLD};
pub use cars::Cars;
pub use game_count::GameCount;
pub use names::{split_names, NAME_DELIMITER};
pub use race::{play, simulate, CarPosition, RaceOutcome};
