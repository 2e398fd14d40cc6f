//! Core domain logic for the climate API
//!
//! This crate contains the service configuration model, the trailing-window
//! arithmetic shared by the "recent" routes, and the error type used across
//! the workspace.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::ClimateError;
