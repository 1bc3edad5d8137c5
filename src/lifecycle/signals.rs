//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, Ctrl-C)
//! - Translate signals to the internal shutdown trigger

use tokio::signal;

/// Wait for a termination request from the operating system.
///
/// Resolves on Ctrl-C or SIGTERM, whichever arrives first.
pub async fn wait_for_termination() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
