//! Error types for the to-do list
//!
//! Every failure a store operation or the bootstrap code can hit ends up here.
//! Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for to-do operations
#[derive(Error, Debug)]
pub enum TodoError {
    /// The backing database could not be reached or rejected a statement
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// No todo exists with the given id
    #[error("Todo not found: {0}")]
    NotFound(i64),

    /// Input failed validation (empty title and friends)
    #[error("Invalid todo: {0}")]
    Validation(String),

    /// I/O errors (creating the database directory, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for to-do operations
pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    /// Message safe to show in a rendered page.
    ///
    /// Storage and I/O details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            TodoError::StoreUnavailable(_) => {
                "The todo store is unavailable right now. Please try again.".to_string()
            }
            TodoError::NotFound(id) => format!("Todo {} does not exist", id),
            TodoError::Validation(reason) => format!("Invalid todo: {}", reason),
            TodoError::Io(_) => "File system error. Check permissions.".to_string(),
            TodoError::Config(msg) => format!("Configuration issue: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = TodoError::NotFound(42);
        assert!(err.user_message().contains("42"));

        let err = TodoError::Validation("title is required".to_string());
        assert!(err.user_message().contains("title is required"));
    }

    #[test]
    fn test_store_details_not_leaked() {
        let err = TodoError::StoreUnavailable(sqlx::Error::PoolClosed);
        assert!(!err.user_message().contains("closed"));
        assert!(err.to_string().contains("Store unavailable"));
    }

    #[test]
    fn test_error_display() {
        let err = TodoError::Validation("empty title".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Invalid todo"));
    }
}
