//! Shared utilities for integration testing.

use std::net::SocketAddr;

use notes_server::{AppConfig, Binding, HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Start the service on an ephemeral loopback port.
///
/// The returned `Shutdown` must stay alive for the duration of the test;
/// dropping the last sender ends the serve loop.
pub async fn start_server() -> (SocketAddr, Shutdown, JoinHandle<std::io::Result<()>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(AppConfig::default());
    let handle = tokio::spawn(server.run(Binding::Tcp(listener), shutdown.clone()));

    (addr, shutdown, handle)
}

/// Client with redirects disabled so 3xx responses stay observable.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
