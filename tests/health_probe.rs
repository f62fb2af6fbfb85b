//! Health probe behavior against reachable and unreachable databases.

use std::sync::Arc;

use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use client_api::config::AppConfig;
use client_api::db;
use client_api::http_server::HttpServer;
use client_api::model::Client;
use client_api::queries::{ClientQueries, QueryError, QueryResult, SqliteClientQueries};

fn app_with(queries: Arc<dyn ClientQueries>) -> Router {
    HttpServer::new(AppConfig::default(), queries).router()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn hc_request() -> Request<String> {
    Request::builder().uri("/hc").body(String::new()).unwrap()
}

/// A data-access stub whose database is permanently unreachable.
struct UnreachableQueries;

impl ClientQueries for UnreachableQueries {
    fn get_client(&self, _id: i64) -> QueryResult<Option<Client>> {
        Err(QueryError::ConnectionUnavailable)
    }

    fn get_client_by_no(&self, _client_no: &str) -> QueryResult<Option<Client>> {
        Err(QueryError::ConnectionUnavailable)
    }

    fn list_all(&self) -> QueryResult<Vec<Client>> {
        Err(QueryError::ConnectionUnavailable)
    }

    fn insert_client(&self, _client: &Client) -> QueryResult<bool> {
        Err(QueryError::ConnectionUnavailable)
    }

    fn update_client(&self, _client: &Client) -> QueryResult<bool> {
        Err(QueryError::ConnectionUnavailable)
    }

    fn delete_client(&self, _id: i64) -> QueryResult<bool> {
        Err(QueryError::ConnectionUnavailable)
    }

    fn delete_client_by_no(&self, _client_no: &str) -> QueryResult<bool> {
        Err(QueryError::ConnectionUnavailable)
    }

    fn ping(&self) -> QueryResult<()> {
        Err(QueryError::ConnectionUnavailable)
    }
}

#[tokio::test]
async fn health_is_ok_when_database_reachable() {
    let queries = Arc::new(SqliteClientQueries::new(db::open(":memory:").unwrap()));
    let resp = app_with(queries).oneshot(hc_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"][0]["name"], "client_database");
    assert_eq!(body["checks"][0]["status"], "healthy");
}

#[tokio::test]
async fn health_is_service_unavailable_when_database_down() {
    let resp = app_with(Arc::new(UnreachableQueries))
        .oneshot(hc_request())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"][0]["status"], "unhealthy");
}

#[tokio::test]
async fn crud_endpoints_surface_database_failure_as_500() {
    let resp = app_with(Arc::new(UnreachableQueries))
        .oneshot(
            Request::builder()
                .uri("/api/client/ListAll")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "internal server error");
}
