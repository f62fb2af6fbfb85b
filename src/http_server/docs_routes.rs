//! # API Documentation Routes
//!
//! `/docs/openapi.json` serves the generated OpenAPI document and `/docs`
//! serves a Swagger UI page pointing at it. Title, version, and the JSON
//! endpoint path all come from [`DocsConfig`].

use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::config::DocsConfig;
use crate::openapi;

/// Create documentation routes (mounted under `/docs`)
pub fn docs_routes(config: DocsConfig) -> Router {
    let config = Arc::new(config);
    Router::new()
        .route("/", get(ui_handler))
        .route("/openapi.json", get(spec_handler))
        .with_state(config)
}

async fn spec_handler(State(config): State<Arc<DocsConfig>>) -> Json<Value> {
    Json(openapi::document(&config))
}

async fn ui_handler(State(config): State<Arc<DocsConfig>>) -> Html<String> {
    Html(ui_page(&config))
}

fn ui_page(config: &DocsConfig) -> String {
    // The template contains `"#` (dom_id), so the raw string needs the
    // two-hash delimiter.
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} {version}</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    SwaggerUIBundle({{
      url: "{endpoint}",
      dom_id: "#swagger-ui"
    }});
  </script>
</body>
</html>
"##,
        title = config.title,
        version = config.version,
        endpoint = config.endpoint,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_page_uses_configured_endpoint() {
        let config = DocsConfig {
            title: "Client API".to_string(),
            version: "1.0".to_string(),
            endpoint: "/custom/spec.json".to_string(),
        };

        let page = ui_page(&config);
        assert!(page.contains("<title>Client API 1.0</title>"));
        assert!(page.contains(r#"url: "/custom/spec.json""#));
    }

    #[test]
    fn test_ui_page_is_complete_html() {
        let page = ui_page(&DocsConfig::default());
        assert!(page.contains(r##"dom_id: "#swagger-ui""##));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_router_builds() {
        let _router = docs_routes(DocsConfig::default());
    }
}
