//! Data models for database entities
//!
//! Maps the `todos` table. Rows are decoded with `sqlx::FromRow`.

use crate::error::{Result, TodoError};
use sqlx::FromRow;
use std::fmt;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Todo {
    /// Assigned by the store on insert, never reused
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// The value `completed` takes after a toggle
    pub fn toggled(&self) -> bool {
        !self.completed
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Todo {}>", self.id)
    }
}

/// Check a title before it goes anywhere near the database.
///
/// Only presence is checked. The title is stored exactly as given.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TodoError::Validation("title is required".to_string()));
    }

    Ok(())
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub total_todos: i64,
    pub completed_todos: i64,
    pub pool_size: u32,
    pub idle_connections: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_toggled() {
        let todo = Todo {
            id: 1,
            title: "Buy milk".to_string(),
            completed: false,
        };

        assert!(todo.toggled());
        assert_eq!(todo.to_string(), "<Todo 1>");
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Buy milk").is_ok());
        assert!(validate_title("  padded  ").is_ok());

        match validate_title("") {
            Err(TodoError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert!(validate_title(" \t\n").is_err());
    }
}
