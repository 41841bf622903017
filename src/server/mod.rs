//! HTTP surface
//!
//! Routing, handlers and HTML rendering on top of the record store.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod view;

pub use error::AppError;
pub use routes::build_router;
pub use state::AppState;
