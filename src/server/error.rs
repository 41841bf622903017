//! Error types for web handlers.
//!
//! Bridges [`TodoError`] to HTTP responses through axum's `IntoResponse`.
//! Client mistakes become 4xx pages; storage trouble becomes 5xx and is logged.

use crate::error::TodoError;
use crate::server::view;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

/// Application error type for web handlers.
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// User-facing message
    message: String,
    /// Stable code, handy in logs
    code: &'static str,
    /// Internal error (for logging, not shown to the client)
    source: Option<TodoError>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Attach the underlying error.
    #[must_use]
    pub fn with_source(mut self, source: TodoError) -> Self {
        self.source = Some(source);
        self
    }

    /// 404 for a todo id that doesn't exist
    #[must_use]
    pub fn not_found(id: i64) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("Todo {} does not exist", id),
            "NOT_FOUND",
        )
    }

    /// 422 for input that failed validation
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message, "VALIDATION_ERROR")
    }

    /// 503 when the store can't be reached
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message, "SERVICE_UNAVAILABLE")
    }

    /// 500 for everything else
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            "INTERNAL_SERVER_ERROR",
        )
    }

    /// Status this error renders with
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Stable error code
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        let message = err.user_message();
        let app_error = match &err {
            TodoError::NotFound(id) => Self::not_found(*id),
            TodoError::Validation(_) => Self::validation(message),
            TodoError::StoreUnavailable(_) => Self::unavailable(message),
            TodoError::Io(_) | TodoError::Config(_) => Self::internal(message),
        };
        app_error.with_source(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(
                    status = %self.status,
                    code = self.code,
                    error = %source,
                    "Request failed"
                ),
                None => tracing::error!(
                    status = %self.status,
                    code = self.code,
                    message = %self.message,
                    "Request failed"
                ),
            }
        } else {
            tracing::debug!(status = %self.status, code = self.code, message = %self.message, "Request rejected");
        }

        let body = view::render_error(self.status, &self.message);
        (self.status, Html(body)).into_response()
    }
}
