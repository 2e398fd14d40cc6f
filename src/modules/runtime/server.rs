//! HTTP server for the climate API

use axum::{routing::get, Router};
use climate_core::{ClimateError, ServerConfig, ServiceConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::executor::QueryExecutor;
use crate::handlers::{HealthHandler, HomeHandler, QueryHandler};
use crate::state::AppState;
use crate::store::{ClimateStore, SqliteStore};

/// Runtime server for the climate API
pub struct Runtime {
    config: Arc<ServiceConfig>,
    store: Arc<dyn ClimateStore>,
    executor: Arc<QueryExecutor>,
}

/// Apply port override to a service configuration
fn apply_port_override(mut config: ServiceConfig, port_override: Option<u16>) -> ServiceConfig {
    if let Some(port) = port_override {
        if let Some(ref mut server) = config.server {
            server.port = Some(port.to_string());
        } else {
            config.server = Some(ServerConfig {
                port: Some(port.to_string()),
                log_level: None,
            });
        }
    }
    config
}

/// Build the router over the given state
///
/// Static `/api/v1.0/...` routes take priority over the `:start` capture.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(HomeHandler::handle))
        .route("/api/v1.0/precipitation", get(QueryHandler::precipitation))
        .route("/api/v1.0/stations", get(QueryHandler::stations))
        .route("/api/v1.0/tobs", get(QueryHandler::tobs))
        .route(
            "/api/v1.0/tobs_with_stations",
            get(QueryHandler::tobs_with_stations),
        )
        .route("/api/v1.0/:start", get(QueryHandler::summary_from))
        .route("/api/v1.0/:start/:end", get(QueryHandler::summary_between))
        .route("/health", get(HealthHandler::handle))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

impl Runtime {
    /// Create a new runtime, opening the configured database
    pub async fn new(config: ServiceConfig) -> Result<Self, ClimateError> {
        Self::with_port_override(config, None).await
    }

    /// Create a new runtime with an optional port override
    pub async fn with_port_override(
        config: ServiceConfig,
        port_override: Option<u16>,
    ) -> Result<Self, ClimateError> {
        let config = apply_port_override(config, port_override);
        let store = SqliteStore::open(&config.database.path).await?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Create a runtime over an already opened store
    pub fn with_store(config: ServiceConfig, store: Arc<dyn ClimateStore>) -> Self {
        let executor = Arc::new(QueryExecutor::new(store.clone(), config.dataset()));
        Self {
            config: Arc::new(config),
            store,
            executor,
        }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        build_router(AppState::new(self.executor.clone()))
    }

    /// Start the server
    pub async fn run(&self) -> Result<(), ClimateError> {
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port())
            .parse()
            .map_err(|e| ClimateError::Server(format!("Invalid address: {}", e)))?;

        let app = self.router();

        info!("Starting climate API on http://{}", addr);
        info!("Service: {}", self.config.name);
        info!(
            "Store: {} ({})",
            self.config.database.path,
            self.store.backend()
        );
        info!("/api/v1.0/tobs station: {}", self.executor.tobs_station());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ClimateError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .map_err(|e| ClimateError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        self.shutdown().await?;

        Ok(())
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                debug!("Received CTRL+C, shutting down...");
            }
            _ = terminate => {
                debug!("Received SIGTERM, shutting down...");
            }
        }
    }

    /// Close the store
    pub async fn shutdown(&self) -> Result<(), ClimateError> {
        info!("Closing database connection...");
        if let Err(e) = self.store.close().await {
            warn!("Error closing store: {}", e);
        }
        info!("Shutdown complete");
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get the executor
    pub fn executor(&self) -> &QueryExecutor {
        &self.executor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::seeded_pool;

    async fn seeded_runtime(config: ServiceConfig) -> Runtime {
        let store = SqliteStore::from_pool(seeded_pool().await).await.unwrap();
        Runtime::with_store(config, Arc::new(store))
    }

    #[tokio::test]
    async fn test_runtime_with_store() {
        let runtime = seeded_runtime(ServiceConfig::new("test-api", ":memory:")).await;
        assert_eq!(runtime.config().port(), 5000);
        assert_eq!(runtime.executor().tobs_station(), "USC00519281");
        let _router = runtime.router();
    }

    #[tokio::test]
    async fn test_runtime_missing_database() {
        let config = ServiceConfig::new("test-api", "/nonexistent/hawaii.sqlite");
        let result = Runtime::new(config).await;
        assert!(matches!(result, Err(ClimateError::Database(_))));
    }

    #[tokio::test]
    async fn test_shutdown_closes_store() {
        let runtime = seeded_runtime(ServiceConfig::new("test-api", ":memory:")).await;
        runtime.shutdown().await.unwrap();
        assert!(runtime.executor().health_check().await.is_err());
    }

    #[test]
    fn test_apply_port_override_with_existing_server() {
        let mut config = ServiceConfig::new("test", "db.sqlite");
        config.server = Some(ServerConfig {
            port: Some("8080".to_string()),
            log_level: Some(2),
        });
        let result = apply_port_override(config, Some(3000));
        let server = result.server.unwrap();
        assert_eq!(server.port, Some("3000".to_string()));
        assert_eq!(server.log_level, Some(2));
    }

    #[test]
    fn test_apply_port_override_without_server() {
        let config = ServiceConfig::new("test", "db.sqlite");
        let result = apply_port_override(config, Some(3000));
        assert_eq!(result.port(), 3000);
    }

    #[test]
    fn test_apply_port_override_none() {
        let config = ServiceConfig::new("test", "db.sqlite");
        let result = apply_port_override(config, None);
        assert!(result.server.is_none());
    }
}
