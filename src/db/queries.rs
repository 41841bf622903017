//! SQL query functions for the record store
//!
//! Each mutation is a single statement in autocommit mode, so it either
//! lands completely and durably or not at all. There is no row locking:
//! two requests toggling the same todo can interleave and the last write wins.

use crate::db::models::*;
use crate::db::Database;
use crate::error::{Result, TodoError};

impl Database {
    /// Every todo, oldest first
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, completed FROM todos ORDER BY id ASC",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(todos)
    }

    /// Get a todo by ID. A missing id is `Ok(None)`, not an error.
    pub async fn get_todo(&self, id: i64) -> Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, title, completed FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(todo)
    }

    /// Insert a new, not yet completed todo
    ///
    /// # Arguments
    /// * `title` - Stored as given; must not be blank
    ///
    /// # Returns
    /// * `Ok(Todo)` - The stored row, with its new id
    /// * `Err(TodoError::Validation)` - Blank title, nothing written
    pub async fn create_todo(&self, title: &str) -> Result<Todo> {
        validate_title(title)?;

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, completed)
            VALUES (?, 0)
            RETURNING id, title, completed
            "#,
        )
        .bind(title)
        .fetch_one(self.pool())
        .await?;

        Ok(todo)
    }

    /// Set the completed flag of an existing todo
    ///
    /// # Returns
    /// * `Ok(Todo)` - The row after the update
    /// * `Err(TodoError::NotFound)` - No todo with that id, nothing written
    pub async fn update_todo(&self, id: i64, completed: bool) -> Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET completed = ? WHERE id = ? RETURNING id, title, completed",
        )
        .bind(completed)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        todo.ok_or(TodoError::NotFound(id))
    }

    /// Delete a todo for good
    ///
    /// # Returns
    /// * `Err(TodoError::NotFound)` - No todo with that id
    pub async fn delete_todo(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id));
        }

        Ok(())
    }
}
