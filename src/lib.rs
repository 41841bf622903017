//! todo-list library
//!
//! A to-do list kept in SQLite and served as server-rendered HTML.

pub mod config;
pub mod db;
pub mod error;
pub mod server;

// Re-exports for convenience
pub use config::Config;
pub use db::{Database, Todo};
pub use error::{Result, TodoError};
