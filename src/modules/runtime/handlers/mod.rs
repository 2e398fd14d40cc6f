//! HTTP request handlers for the climate API
//!
//! This module contains the dataset query handlers, the route listing at `/`,
//! the health check, and the shared error response.

mod error;
mod health;
mod home;
mod query;

pub use error::ApiError;
pub use health::HealthHandler;
pub use home::{HomeHandler, ROUTES};
pub use query::QueryHandler;
