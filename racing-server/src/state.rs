//! Server state management
//!
//! Holds the power source shared by all requests and the history of played games.

use chrono::{DateTime, Utc};
use racing_core::{CarPosition, RaceOutcome, RandomPower};
use serde::Serialize;
use std::sync::{Mutex, PoisonError, RwLock};

/// A stored race result
#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    pub id: u64,
    #[serde(rename = "count")]
    pub turns: u32,
    /// Winner names joined with ','
    pub winners: String,
    #[serde(rename = "racingCars")]
    pub racing_cars: Vec<CarPosition>,
    #[serde(rename = "playedAt")]
    pub played_at: DateTime<Utc>,
}

/// Server-wide shared state
pub struct ServerState {
    pub power: Mutex<RandomPower>,
    pub games: RwLock<Vec<GameRecord>>,
}

impl ServerState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            power: Mutex::new(RandomPower::from_seed_option(seed)),
            games: RwLock::new(Vec::new()),
        }
    }

    /// Store a finished race and return its record
    pub fn record_game(&self, outcome: RaceOutcome) -> GameRecord {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);

        let record = GameRecord {
            id: games.len() as u64 + 1,
            turns: outcome.turns,
            winners: outcome.winners_joined(),
            racing_cars: outcome.positions,
            played_at: Utc::now(),
        };
        games.push(record.clone());

        tracing::info!("Stored game {} (winners: {})", record.id, record.winners);
        record
    }

    /// Number of stored games
    pub fn games_played(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// All stored games in play order
    pub fn games(&self) -> Vec<GameRecord> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(winners: &[&str]) -> RaceOutcome {
        RaceOutcome {
            turns: 3,
            positions: winners
                .iter()
                .map(|name| CarPosition { name: name.to_string(), position: 3 })
                .collect(),
            winners: winners.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn test_record_game_assigns_increasing_ids() {
        let state = ServerState::new(Some(1));
        let first = state.record_game(outcome(&["pobi"]));
        let second = state.record_game(outcome(&["pobi", "woni"]));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.winners, "pobi,woni");
        assert_eq!(state.games().len(), 2);
        assert_eq!(state.games_played(), 2);
    }
}
