//! Shared runtime application state (HTTP handlers)

use std::sync::Arc;

use crate::executor::QueryExecutor;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<QueryExecutor>,
}

impl AppState {
    pub fn new(executor: Arc<QueryExecutor>) -> Self {
        Self { executor }
    }
}
