//! Database connection management with connection pooling
//!
//! Provides a thread-safe connection pool to the SQLite database that
//! holds the todos. Construct one `Database` at startup and share it.

use crate::db::models::DatabaseStats;
use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Default number of database connections in the pool
pub const MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = include_str!("../../database/schema.sql");

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl Database {
    /// Open (or create) the database file at `db_path`
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(Database)` - Ready to use, schema in place
    /// * `Err(TodoError)` - If the directory or connection can't be set up
    ///
    /// # Examples
    /// ```no_run
    /// use todo_list_lib::db::Database;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::new("todos.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        Self::with_options(db_path, MAX_CONNECTIONS).await
    }

    /// Same as [`Database::new`] with an explicit pool size
    pub async fn with_options<P: AsRef<Path>>(db_path: P, max_connections: u32) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path,
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    /// Create a fresh in-memory database
    ///
    /// Single connection, kept alive for the life of the pool, so every
    /// query sees the same data. Used heavily by the tests.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path: PathBuf::from(":memory:"),
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    /// Create the tables if they don't exist yet
    async fn initialize_schema(&self) -> Result<()> {
        for statement in schema_statements(SCHEMA) {
            sqlx::query(&statement).execute(self.pool.as_ref()).await?;
        }

        Ok(())
    }

    /// Get reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Close all connections in the pool
    ///
    /// Called on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Cheap round trip to check the store is reachable
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }

    /// Get database statistics
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let (total_todos, completed_todos): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM todos",
        )
        .fetch_one(self.pool())
        .await?;

        Ok(DatabaseStats {
            total_todos,
            completed_todos,
            pool_size: self.pool.size(),
            idle_connections: self.pool.num_idle(),
        })
    }
}

/// Split a schema file into single statements.
///
/// sqlx runs one statement per query. `--` comment lines are dropped first
/// so a `;` inside a comment can't cut a statement in half.
fn schema_statements(schema: &str) -> Vec<String> {
    let without_comments = schema
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    without_comments
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;

    #[tokio::test]
    async fn test_database_creation() {
        let db = Database::in_memory().await;
        assert!(db.is_ok());
    }

    #[tokio::test]
    async fn test_database_stats() {
        let db = Database::in_memory().await.unwrap();
        let stats = db.stats().await.unwrap();

        assert_eq!(stats.total_todos, 0);
        assert_eq!(stats.completed_todos, 0);
        assert_eq!(stats.pool_size, 1);
    }

    #[tokio::test]
    async fn test_schema_initialization() {
        let db = Database::in_memory().await.unwrap();

        let result: std::result::Result<(i64,), sqlx::Error> =
            sqlx::query_as("SELECT COUNT(*) FROM todos")
                .fetch_one(db.pool())
                .await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_schema_statements_ignore_comments() {
        let schema = "-- setup; runs at startup\n\
                      CREATE TABLE a (id INTEGER);\n\
                      -- second; table\n\
                      CREATE TABLE b (id INTEGER);\n";

        let statements = schema_statements(schema);
        assert_eq!(
            statements,
            vec!["CREATE TABLE a (id INTEGER)", "CREATE TABLE b (id INTEGER)"]
        );
    }

    #[test]
    fn test_bundled_schema_is_one_create_statement() {
        let statements = schema_statements(SCHEMA);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS todos"));
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        assert!(db.initialize_schema().await.is_ok());
    }

    #[tokio::test]
    async fn test_ping_after_close() {
        let db = Database::in_memory().await.unwrap();
        assert!(db.ping().await.is_ok());

        db.close().await;

        match db.ping().await {
            Err(TodoError::StoreUnavailable(_)) => {}
            other => panic!("Expected StoreUnavailable, got {:?}", other),
        }
    }
}
