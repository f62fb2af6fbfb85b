//! OpenAPI document generation for the fixed route surface.
//!
//! The route table is small and static, so the document is assembled
//! directly rather than derived from handler metadata.

use serde_json::{json, Map, Value};

use crate::config::DocsConfig;

/// Build the OpenAPI 3.0 JSON document for the service.
pub fn document(docs: &DocsConfig) -> Value {
    let mut paths: Map<String, Value> = Map::new();

    paths.insert(
        "/api/client/GetClient".into(),
        json!({
            "get": {
                "summary": "Fetch a client by numeric id",
                "tags": ["client"],
                "parameters": [query_param("id", "integer", true)],
                "responses": client_or_null_response()
            }
        }),
    );

    paths.insert(
        "/api/client/GetClientByNo".into(),
        json!({
            "get": {
                "summary": "Fetch a client by client number",
                "tags": ["client"],
                "parameters": [query_param("clientNo", "string", true)],
                "responses": client_or_null_response()
            }
        }),
    );

    paths.insert(
        "/api/client/ListAll".into(),
        json!({
            "get": {
                "summary": "List all clients",
                "tags": ["client"],
                "responses": {
                    "200": {
                        "description": "All clients",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "array",
                                    "items": client_ref()
                                }
                            }
                        }
                    }
                }
            }
        }),
    );

    paths.insert(
        "/api/client/CreateClient".into(),
        json!({
            "post": {
                "summary": "Insert a client",
                "tags": ["client"],
                "requestBody": client_body(),
                "responses": bool_response("True when the client was inserted")
            }
        }),
    );

    paths.insert(
        "/api/client/UpdateClient".into(),
        json!({
            "post": {
                "summary": "Replace a client record",
                "tags": ["client"],
                "requestBody": client_body(),
                "responses": bool_response("True when an existing client was replaced")
            }
        }),
    );

    paths.insert(
        "/api/client/DeleteClient".into(),
        json!({
            "post": {
                "summary": "Delete a client by numeric id",
                "tags": ["client"],
                "parameters": [query_param("clientId", "integer", true)],
                "responses": bool_response("True when a client was deleted")
            }
        }),
    );

    paths.insert(
        "/api/client/DeleteClientByNo".into(),
        json!({
            "post": {
                "summary": "Delete a client by client number",
                "tags": ["client"],
                "parameters": [query_param("clientNo", "string", true)],
                "responses": bool_response("True when a client was deleted")
            }
        }),
    );

    paths.insert(
        "/hc".into(),
        json!({
            "get": {
                "summary": "Database health probe",
                "tags": ["system"],
                "responses": {
                    "200": { "description": "Database reachable" },
                    "503": { "description": "Database unreachable" }
                }
            }
        }),
    );

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": docs.title,
            "version": docs.version,
        },
        "paths": paths,
        "components": {
            "schemas": {
                "Client": {
                    "type": "object",
                    "required": ["id", "clientNo", "name"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "clientNo": { "type": "string" },
                        "name": { "type": "string" },
                        "email": { "type": "string", "nullable": true }
                    }
                }
            }
        }
    })
}

fn client_ref() -> Value {
    json!({ "$ref": "#/components/schemas/Client" })
}

fn query_param(name: &str, ty: &str, required: bool) -> Value {
    json!({
        "name": name,
        "in": "query",
        "required": required,
        "schema": { "type": ty }
    })
}

fn client_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": { "schema": client_ref() }
        }
    })
}

fn client_or_null_response() -> Value {
    json!({
        "200": {
            "description": "The matching client, or null when none exists",
            "content": {
                "application/json": {
                    "schema": { "allOf": [client_ref()], "nullable": true }
                }
            }
        }
    })
}

fn bool_response(description: &str) -> Value {
    json!({
        "200": {
            "description": description,
            "content": {
                "application/json": {
                    "schema": { "type": "boolean" }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_info_from_config() {
        let docs = DocsConfig {
            title: "My Clients".to_string(),
            version: "2.0".to_string(),
            ..Default::default()
        };

        let spec = document(&docs);
        assert_eq!(spec["openapi"], "3.0.3");
        assert_eq!(spec["info"]["title"], "My Clients");
        assert_eq!(spec["info"]["version"], "2.0");
    }

    #[test]
    fn test_document_lists_every_operation() {
        let spec = document(&DocsConfig::default());
        let paths = spec["paths"].as_object().unwrap();

        for action in [
            "GetClient",
            "GetClientByNo",
            "ListAll",
            "CreateClient",
            "UpdateClient",
            "DeleteClient",
            "DeleteClientByNo",
        ] {
            assert!(
                paths.contains_key(&format!("/api/client/{action}")),
                "missing path for {action}"
            );
        }
        assert!(paths.contains_key("/hc"));
    }

    #[test]
    fn test_methods_match_route_table() {
        let spec = document(&DocsConfig::default());

        assert!(spec["paths"]["/api/client/GetClient"]["get"].is_object());
        assert!(spec["paths"]["/api/client/CreateClient"]["post"].is_object());
        assert!(spec["paths"]["/api/client/DeleteClient"]["post"].is_object());
        assert!(spec["paths"]["/api/client/GetClient"]["post"].is_null());
    }

    #[test]
    fn test_client_schema_present() {
        let spec = document(&DocsConfig::default());
        let schema = &spec["components"]["schemas"]["Client"];

        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["clientNo"].is_object());
        assert_eq!(spec["paths"]["/api/client/CreateClient"]["post"]["requestBody"]["content"]["application/json"]["schema"]["$ref"], "#/components/schemas/Client");
    }
}
