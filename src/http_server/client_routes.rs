//! # Client HTTP Routes
//!
//! The seven CRUD endpoints under `/api/client`. Each handler is a direct
//! forward to one [`ClientQueries`] call: no validation beyond extractor
//! binding, no error translation, no retries.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::errors::ApiResult;
use crate::model::Client;
use crate::queries::ClientQueries;

// ==================
// Shared State
// ==================

/// State shared across client handlers: the injected data-access contract.
pub struct ClientState {
    pub queries: Arc<dyn ClientQueries>,
}

impl ClientState {
    pub fn new(queries: Arc<dyn ClientQueries>) -> Self {
        Self { queries }
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct GetClientParams {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ClientNoParams {
    #[serde(rename = "clientNo")]
    pub client_no: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteClientParams {
    #[serde(rename = "clientId")]
    pub client_id: i64,
}

// ==================
// Routes
// ==================

/// Create client routes (mounted under `/api/client`)
pub fn client_routes(state: Arc<ClientState>) -> Router {
    Router::new()
        .route("/GetClient", get(get_client))
        .route("/GetClientByNo", get(get_client_by_no))
        .route("/ListAll", get(list_all))
        .route("/CreateClient", post(create_client))
        .route("/UpdateClient", post(update_client))
        .route("/DeleteClient", post(delete_client))
        .route("/DeleteClientByNo", post(delete_client_by_no))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// GET /GetClient?id= - returns the client or JSON null
async fn get_client(
    State(state): State<Arc<ClientState>>,
    Query(params): Query<GetClientParams>,
) -> ApiResult<Json<Option<Client>>> {
    Ok(Json(state.queries.get_client(params.id)?))
}

/// GET /GetClientByNo?clientNo= - returns the client or JSON null
async fn get_client_by_no(
    State(state): State<Arc<ClientState>>,
    Query(params): Query<ClientNoParams>,
) -> ApiResult<Json<Option<Client>>> {
    Ok(Json(state.queries.get_client_by_no(&params.client_no)?))
}

/// GET /ListAll - returns every client
async fn list_all(State(state): State<Arc<ClientState>>) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(state.queries.list_all()?))
}

/// POST /CreateClient - inserts the client from the request body
async fn create_client(
    State(state): State<Arc<ClientState>>,
    Json(client): Json<Client>,
) -> ApiResult<Json<bool>> {
    Ok(Json(state.queries.insert_client(&client)?))
}

/// POST /UpdateClient - full-record replace keyed by id
async fn update_client(
    State(state): State<Arc<ClientState>>,
    Json(client): Json<Client>,
) -> ApiResult<Json<bool>> {
    Ok(Json(state.queries.update_client(&client)?))
}

/// POST /DeleteClient?clientId= - false when no such client
async fn delete_client(
    State(state): State<Arc<ClientState>>,
    Query(params): Query<DeleteClientParams>,
) -> ApiResult<Json<bool>> {
    Ok(Json(state.queries.delete_client(params.client_id)?))
}

/// POST /DeleteClientByNo?clientNo= - false when no such client
async fn delete_client_by_no(
    State(state): State<Arc<ClientState>>,
    Query(params): Query<ClientNoParams>,
) -> ApiResult<Json<bool>> {
    Ok(Json(state.queries.delete_client_by_no(&params.client_no)?))
}
