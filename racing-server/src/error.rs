//! Mapping of race validation errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use racing_core::RaceError;
use serde_json::json;

/// Error returned from API handlers
#[derive(Debug)]
pub struct ApiError(pub RaceError);

impl From<RaceError> for ApiError {
    fn from(err: RaceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected race request: {}", self.0);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
