//! Cross-origin policy.
//!
//! # Responsibilities
//! - Allow the two development origins, nothing else (no wildcard)
//! - Permit credentials for allowed origins
//! - Advertise the fixed method and header allow-lists
//! - Expose Location, Authorization and Content-Disposition to browsers

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins allowed to make cross-origin requests.
pub const ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:8080"];

/// Build the CORS layer applied to every route.
///
/// True preflights (OPTIONS carrying `Origin` and
/// `Access-Control-Request-Method`) are answered by the layer itself; any
/// other OPTIONS request falls through to the handlers.
pub fn cors_layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.iter().copied().map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::OPTIONS,
            Method::DELETE,
        ])
        .allow_credentials(true)
        .allow_headers([
            header::LOCATION,
            HeaderName::from_static("charset"),
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::ACCEPT,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers([
            header::LOCATION,
            header::AUTHORIZATION,
            header::CONTENT_DISPOSITION,
        ])
}
