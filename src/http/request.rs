//! Request handling and transformation.
//!
//! # Responsibilities
//! - Ensure every request carries a unique request ID
//! - Echo the request ID on the response for client-side correlation

use axum::{extract::Request, middleware::Next, response::Response};
use axum::http::HeaderValue;
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Middleware attaching a UUID v4 request ID.
///
/// An ID supplied by the client is preserved; otherwise one is generated.
/// The ID is copied onto the response in both cases.
pub async fn add_request_id(mut request: Request, next: Next) -> Response {
    let id = match request.headers().get(X_REQUEST_ID) {
        Some(existing) => existing.clone(),
        None => {
            let generated = HeaderValue::from_str(&Uuid::new_v4().to_string())
                .expect("uuid is a valid header value");
            request.headers_mut().insert(X_REQUEST_ID, generated.clone());
            generated
        }
    };

    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID, id);
    response
}
