//! # Health Probe Route
//!
//! `/hc` pings the database through the data-access contract and reports a
//! machine-readable status document. 200 when the database answers, 503
//! when it does not.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::client_routes::ClientState;

/// Health probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: Vec<HealthCheckEntry>,
}

/// One named probe within the health response
#[derive(Debug, Serialize)]
pub struct HealthCheckEntry {
    pub name: String,
    pub status: String,
    pub duration_ms: u128,
}

/// Create the health probe route
pub fn health_routes(state: Arc<ClientState>) -> Router {
    Router::new().route("/hc", get(health_handler)).with_state(state)
}

async fn health_handler(State(state): State<Arc<ClientState>>) -> impl IntoResponse {
    let started_at = Instant::now();
    let db_healthy = state.queries.ping().is_ok();
    let duration_ms = started_at.elapsed().as_millis();

    let status_label = |healthy: bool| {
        if healthy { "healthy" } else { "unhealthy" }.to_string()
    };

    let response = HealthResponse {
        status: status_label(db_healthy),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: vec![HealthCheckEntry {
            name: "client_database".to_string(),
            status: status_label(db_healthy),
            duration_ms,
        }],
    };

    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
