//! Climate API CLI
//!
//! This crate provides the command-line interface for the climate API including:
//! - run: Start the server
//! - init: Write a starter configuration
//! - routes: Print the served routes

pub mod commands;

pub use commands::{Cli, Commands};
