//! Database module for the to-do list
//!
//! The record store: one SQLite table accessed through sqlx,
//! with connection pooling.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
