//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::error::Result;
use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of stored guests
    pub guests: usize,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// Health check handler. Opens the store if needed, so an unavailable
/// database reports 503.
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let guests = state.store.count().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        guests,
    }))
}

/// Root handler.
async fn root() -> &'static str {
    "Guestbook Server"
}
