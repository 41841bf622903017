//! HTTP request handlers.
//!
//! - GET /             - Render every todo
//! - POST /add         - Create a todo from the `title` form field
//! - GET /update/:id   - Flip a todo's completed flag
//! - GET /delete/:id   - Delete a todo
//!
//! Mutations answer with `303 See Other` back to `/`, so the browser
//! re-requests the list to see the new state.

use crate::server::error::AppError;
use crate::server::state::AppState;
use crate::server::view;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

/// Body of `POST /add`
#[derive(Debug, Deserialize)]
pub struct AddTodoForm {
    /// Missing is treated the same as empty
    pub title: Option<String>,
}

/// Render the list page.
pub async fn list_todos(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let todos = state.db.list_todos().await?;
    Ok(Html(view::render_index(&todos)))
}

/// Create a todo.
///
/// ```bash
/// curl -X POST http://localhost:8000/add -d 'title=Buy milk'
/// ```
pub async fn add_todo(
    State(state): State<AppState>,
    Form(form): Form<AddTodoForm>,
) -> Result<Redirect, AppError> {
    let title = form.title.unwrap_or_default();
    let todo = state.db.create_todo(&title).await?;

    info!(todo_id = todo.id, "Todo created");
    Ok(Redirect::to("/"))
}

/// Toggle a todo's completed flag.
///
/// Read then write, with no lock in between: two concurrent toggles of the
/// same todo can both read the old value and cancel out to one flip.
pub async fn toggle_todo(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let Some(todo) = state.db.get_todo(id).await? else {
        warn!(todo_id = id, "Toggle requested for missing todo");
        return Err(AppError::not_found(id));
    };

    let updated = state.db.update_todo(id, todo.toggled()).await?;

    info!(todo_id = id, completed = updated.completed, "Todo toggled");
    Ok(Redirect::to("/"))
}

/// Delete a todo.
pub async fn delete_todo(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state.db.delete_todo(id).await?;

    info!(todo_id = id, "Todo deleted");
    Ok(Redirect::to("/"))
}

/// Liveness: the process is up. Doesn't touch the store.
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness: the store answers a query.
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, "ready"),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}
