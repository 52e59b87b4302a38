//! Guestbook Server - local guest registry.
//!
//! Owns the durable guest store and exposes it to the browser UI as a small
//! JSON API, plus a CSV export of the roster.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod routes;

use crate::config::Config;
use crate::db::GuestStore;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<GuestStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state with a lazily opened store for `config.database_url`.
    pub fn new(config: Config) -> Self {
        let store = GuestStore::new(config.database_url.clone()).with_timeout(config.store_timeout);
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
