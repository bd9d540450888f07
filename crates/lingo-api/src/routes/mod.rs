//! Route definitions
//!
//! All endpoints are mounted at the root; the observed paths are the
//! contract.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, health, translations};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(translation_routes())
        .merge(health_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Translation and history routes
fn translation_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(translations::translate))
        .route(
            "/translations/history",
            get(translations::list_history).delete(translations::clear_history),
        )
        .route(
            "/translations/history/:record_id",
            delete(translations::delete_history_entry),
        )
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
