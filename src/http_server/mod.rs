//! # HTTP Server Module
//!
//! The transport and composition layer of the service: per-concern route
//! builders combined into a single Axum server.
//!
//! # Endpoints
//!
//! - `/api/client/*` - Client CRUD operations
//! - `/hc` - Database health probe
//! - `/docs`, `/docs/openapi.json` - API documentation

pub mod client_routes;
pub mod docs_routes;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use client_routes::ClientState;
pub use errors::ApiError;
pub use server::HttpServer;
