//! Router configuration.

use super::handlers::{
    add_todo, delete_todo, health_check, list_todos, readiness_check, toggle_todo,
};
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the complete router.
///
/// Toggle and delete are plain GETs so they work as links from the list page.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_todos))
        .route("/add", post(add_todo))
        .route("/update/:id", get(toggle_todo))
        .route("/delete/:id", get(delete_todo))
        // Health checks
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
