//! Guest endpoint routes.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use guestbook_engine::{Guest, GuestFields, GuestFilter, GuestPatch};

use crate::error::{AppError, Result};
use crate::handlers::{
    handle_add, handle_delete, handle_export, handle_get, handle_list, handle_update, today,
};
use crate::AppState;

/// Create guest routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/guests", get(list_handler).post(add_handler))
        .route("/guests/export", get(export_handler))
        .route(
            "/guests/{id}",
            get(get_handler).patch(update_handler).delete(delete_handler),
        )
}

/// GET /guests - List guests, optionally searched and sorted.
async fn list_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<GuestFilter>, QueryRejection>,
) -> Result<Json<Vec<Guest>>> {
    let Query(filter) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let guests = handle_list(&state.store, filter).await?;
    Ok(Json(guests))
}

/// POST /guests - Record a new guest.
async fn add_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<GuestFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Guest>)> {
    let Json(fields) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let guest = handle_add(&state.store, fields).await?;
    Ok((StatusCode::CREATED, Json(guest)))
}

/// GET /guests/{id} - Fetch one guest.
async fn get_handler(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Guest>> {
    let guest = handle_get(&state.store, &id).await?;
    Ok(Json(guest))
}

/// PATCH /guests/{id} - Update some fields of a guest.
async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<GuestPatch>, JsonRejection>,
) -> Result<Json<Guest>> {
    let Json(patch) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let guest = handle_update(&state.store, &id, patch).await?;
    Ok(Json(guest))
}

/// DELETE /guests/{id} - Remove a guest.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    handle_delete(&state.store, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /guests/export - Download the roster as CSV.
async fn export_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let export = handle_export(&state.store, today()).await?;
    let disposition = format!("attachment; filename=\"{}\"", export.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    ))
}
