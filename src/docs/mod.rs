//! API documentation surface.
//!
//! # Data Flow
//! ```text
//! GET /swagger              → 308 redirect to /swagger/index.html
//! GET /swagger/index.html   → static documentation UI shell
//! GET /swagger/openapi.json → OpenAPI 3 document for the HTTP surface
//! ```
//!
//! The exact routes here must never shadow unrelated exact routes such as
//! the heartbeat probe; axum's router matches exact paths independently.

use axum::{
    response::{Html, Json, Redirect},
    routing::get,
    Router,
};
use serde_json::{json, Value};

/// Prefix all documentation routes live under.
pub const DOCS_PREFIX: &str = "/swagger";

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>notes-server API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({ url: "/swagger/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// Router fragment exposing the documentation routes.
pub fn router() -> Router {
    Router::new()
        .route(DOCS_PREFIX, get(redirect_to_index))
        .route("/swagger/index.html", get(index))
        .route("/swagger/openapi.json", get(openapi_document))
}

/// `GET /swagger`: permanent redirect to the UI entry point.
async fn redirect_to_index() -> Redirect {
    Redirect::permanent("/swagger/index.html")
}

/// `GET /swagger/index.html`: documentation UI shell.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /swagger/openapi.json`: OpenAPI document for the service.
async fn openapi_document() -> Json<Value> {
    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "notes-server",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/api/heartbeat": {
                "get": {
                    "summary": "Liveness probe",
                    "tags": ["metrics"],
                    "responses": {
                        "204": { "description": "Service is alive; empty body" }
                    }
                }
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;

    #[tokio::test]
    async fn swagger_redirect_is_permanent() {
        let response = redirect_to_index().await.into_response();
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers()["location"],
            "/swagger/index.html"
        );
    }

    #[tokio::test]
    async fn openapi_document_lists_heartbeat() {
        let Json(doc) = openapi_document().await;
        assert!(doc["paths"].get("/api/heartbeat").is_some());
    }
}
