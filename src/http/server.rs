//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, request ID, CORS, timeout)
//! - Serve on the bound transport (TCP or unix socket)
//! - Graceful shutdown with a bounded drain

use std::future::IntoFuture;
use std::time::Duration;

use axum::{middleware, Router};
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::cors::cors_layer;
use crate::http::request::add_request_id;
use crate::lifecycle::{Shutdown, DRAIN_DEADLINE};
use crate::net::Binding;
use crate::{docs, health};

/// Per-request deadline, covering the read and write of one exchange.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        tracing::info!("router initializing");
        let router = Self::build_router();
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router() -> Router {
        Router::new()
            .merge(health::router())
            .merge(docs::router())
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(cors_layer())
            .layer(middleware::from_fn(add_request_id))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server on the bound transport until shutdown is triggered
    /// or the serve loop fails.
    pub async fn run(self, binding: Binding, shutdown: Shutdown) -> std::io::Result<()> {
        tracing::info!("http server starting");
        match binding {
            Binding::Tcp(listener) => serve(listener, self.router, shutdown).await,
            Binding::Unix(listener) => serve(listener, self.router, shutdown).await,
        }
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Serve requests until the loop fails or shutdown triggers, then drain.
///
/// The drain is bounded: once shutdown is triggered, in-flight connections
/// get `DRAIN_DEADLINE` before the serve future is abandoned.
async fn serve<L>(listener: L, router: Router, shutdown: Shutdown) -> std::io::Result<()>
where
    L: axum::serve::Listener,
    L::Addr: std::fmt::Debug,
{
    let mut graceful_rx = shutdown.subscribe();
    let mut drain_rx = shutdown.subscribe();

    let server = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = graceful_rx.recv().await;
        })
        .into_future();

    tokio::select! {
        result = server => {
            match &result {
                Ok(()) => tracing::info!("http server stopped"),
                Err(error) => tracing::error!(%error, "http server terminated"),
            }
            result
        }
        _ = drain_deadline(&mut drain_rx) => {
            tracing::warn!(
                deadline = ?DRAIN_DEADLINE,
                "drain deadline exceeded, closing remaining connections"
            );
            Ok(())
        }
    }
}

/// Resolves `DRAIN_DEADLINE` after the shutdown trigger, never before.
async fn drain_deadline(rx: &mut broadcast::Receiver<()>) {
    let _ = rx.recv().await;
    tokio::time::sleep(DRAIN_DEADLINE).await;
}
