//! Runtime server for the climate API
//!
//! This crate provides the HTTP server, the SQLite store, query execution,
//! and request handlers.

pub mod executor;
pub mod handlers;
pub mod server;
pub mod state;
pub mod store;

pub use executor::QueryExecutor;
pub use handlers::{ApiError, HealthHandler, HomeHandler, QueryHandler, ROUTES};
pub use server::{build_router, Runtime};
pub use state::AppState;
pub use store::{ClimateStore, SqliteStore};
