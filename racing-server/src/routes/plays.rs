//! Race API endpoints
//!
//! Runs a race per request and keeps every result in server memory.

use crate::error::ApiError;
use crate::state::{GameRecord, ServerState};
use axum::{extract::State, Json};
use racing_core::play;
use serde::Deserialize;
use std::sync::{Arc, PoisonError};

#[derive(Deserialize)]
pub struct PlayRequest {
    /// Comma-separated car names
    pub names: String,
    /// Number of turns, as entered
    pub count: String,
}

/// Run a race and store its result
pub async fn create_play(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<PlayRequest>,
) -> Result<Json<GameRecord>, ApiError> {
    let outcome = {
        let mut power = state.power.lock().unwrap_or_else(PoisonError::into_inner);
        play(&req.names, &req.count, &mut *power)?
    };

    Ok(Json(state.record_game(outcome)))
}

/// List every stored race
pub async fn list_plays(State(state): State<Arc<ServerState>>) -> Json<Vec<GameRecord>> {
    Json(state.games())
}
