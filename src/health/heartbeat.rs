//! Heartbeat endpoint.

use axum::{http::StatusCode, routing::any, Router};

/// Path the heartbeat probe is registered under.
pub const HEARTBEAT_PATH: &str = "/api/heartbeat";

/// Liveness probe handler.
///
/// Accepts no parameters and carries no payload; success is the status code
/// alone. Safe to use as a container or load-balancer liveness probe.
pub async fn heartbeat() -> StatusCode {
    tracing::debug!("heartbeat probe");
    StatusCode::NO_CONTENT
}

/// Router fragment exposing the heartbeat route.
///
/// Registered without a method filter, matching the original surface: any
/// method on the path answers 204.
pub fn router() -> Router {
    Router::new().route(HEARTBEAT_PATH, any(heartbeat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn heartbeat_is_empty_success() {
        let status = heartbeat().await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn heartbeat_is_stateless() {
        for _ in 0..3 {
            assert_eq!(heartbeat().await, StatusCode::NO_CONTENT);
        }
    }
}
