//! Configuration for the to-do server.
//!
//! Loaded from environment variables. Every value has a default, so running
//! with an empty environment serves `todos.db` on `127.0.0.1:8000`.

use crate::db::connection::MAX_CONNECTIONS;
use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default log filter when neither `TODO_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "todo_list=info,tower_http=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,
    /// HTTP server configuration
    pub server: ServerConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite file, created on first run
    pub path: PathBuf,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log filter directive (`tracing_subscriber::EnvFilter` syntax)
    pub log_filter: String,
}

impl Config {
    /// Load configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database: DatabaseConfig {
                path: lookup("TODO_DATABASE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("todos.db")),
                max_connections: lookup("TODO_DATABASE_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(MAX_CONNECTIONS),
            },
            server: ServerConfig {
                host: lookup("TODO_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: lookup("TODO_PORT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8000),
                log_filter: lookup("TODO_LOG")
                    .or_else(|| lookup("RUST_LOG"))
                    .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            },
        }
    }
}

impl ServerConfig {
    /// Socket address to listen on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| TodoError::Config(format!("invalid listen address: {}", e)))
    }
}
