//! Application state for the HTTP handlers.

use crate::db::Database;
use std::sync::Arc;

/// Shared across all handlers. Cloned per request (cheaply, via `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The record store, opened once at startup
    pub db: Arc<Database>,
}

impl AppState {
    /// Wrap an open store.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}
