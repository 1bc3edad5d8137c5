//! Integration tests for server lifecycle and graceful shutdown.

use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::timeout;

mod common;

#[tokio::test]
async fn shutdown_trigger_stops_the_server() {
    let (addr, shutdown, handle) = common::start_server().await;
    let client = common::client();

    // Server is live before the trigger.
    let response = client
        .get(format!("http://{addr}/api/heartbeat"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    shutdown.trigger();

    // With no in-flight requests the drain completes well inside the deadline.
    let result = timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop after shutdown trigger")
        .expect("server task panicked");
    assert!(result.is_ok(), "graceful shutdown should not error");
}

#[tokio::test]
async fn requests_complete_before_shutdown_finishes() {
    let (addr, shutdown, handle) = common::start_server().await;
    let client = common::client();

    let in_flight = tokio::spawn({
        let client = client.clone();
        async move {
            client
                .get(format!("http://{addr}/api/heartbeat"))
                .send()
                .await
        }
    });

    // Let the request reach the server before the trigger fires.
    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.trigger();

    let response = in_flight.await.unwrap().expect("in-flight request dropped");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap()
        .unwrap();
}
