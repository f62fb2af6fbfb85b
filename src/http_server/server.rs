//! # HTTP Server
//!
//! Composition root: wires the injected data-access contract, the health
//! probe, and the documentation routes into one router and serves it.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::client_routes::{client_routes, ClientState};
use super::docs_routes::docs_routes;
use super::health_routes::health_routes;
use crate::config::AppConfig;
use crate::queries::ClientQueries;

/// HTTP server for the client CRUD API
pub struct HttpServer {
    config: AppConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around the given configuration and data-access
    /// implementation.
    pub fn new(config: AppConfig, queries: Arc<dyn ClientQueries>) -> Self {
        let router = Self::build_router(&config, queries);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &AppConfig, queries: Arc<dyn ClientQueries>) -> Router {
        let state = Arc::new(ClientState::new(queries));

        // Configure CORS from config
        let cors = if config.server.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .server
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health probe at root level
            .merge(health_routes(state.clone()))
            // Client CRUD under /api/client
            .nest("/api/client", client_routes(state))
            // Documentation under /docs
            .nest("/docs", docs_routes(config.docs.clone()))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.server.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.server.socket_addr();

        let listener = TcpListener::bind(&addr).await?;
        info!(%addr, "client API listening");
        info!("client endpoints: /api/client/*");
        info!("health probe: /hc");
        info!("documentation: /docs");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::queries::SqliteClientQueries;

    fn server() -> HttpServer {
        let queries = Arc::new(SqliteClientQueries::new(db::open(":memory:").unwrap()));
        HttpServer::new(AppConfig::default(), queries)
    }

    #[test]
    fn test_server_creation() {
        assert_eq!(server().socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let mut config = AppConfig::default();
        config.server.port = 9090;
        let queries = Arc::new(SqliteClientQueries::new(db::open(":memory:").unwrap()));
        let server = HttpServer::new(config, queries);
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds() {
        let _router = server().router();
        // If we get here, router construction succeeded
    }
}
