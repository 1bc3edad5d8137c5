//! Listener transport selection.
//!
//! # Responsibilities
//! - Bind a TCP listener at `bind_ip:port`, or
//! - Bind a unix domain socket at `<executable dir>/<socket_file>`
//! - Replace a stale socket file left by a previous run
//! - Surface bind failures to the caller (fatal at startup)

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use tokio::net::{TcpListener, UnixListener};

use crate::config::{ListenConfig, ListenKind};

/// Error type for listener construction.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The executable's own directory could not be resolved.
    #[error("failed to resolve executable directory: {0}")]
    ExecutableDir(std::io::Error),

    /// The configured bind address did not parse.
    #[error("invalid bind address {addr:?}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    /// Binding the listener failed.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
}

/// A bound listener, ready to serve.
#[derive(Debug)]
pub enum Binding {
    Tcp(TcpListener),
    Unix(UnixListener),
}

impl Binding {
    /// Bind the transport selected by the configuration.
    pub async fn bind(config: &ListenConfig) -> Result<Self, ListenerError> {
        match config.kind {
            ListenKind::Sock => {
                let path = socket_path(&config.socket_file)?;
                if path.exists() {
                    // Stale socket from a previous run; bind would fail on it.
                    std::fs::remove_file(&path).map_err(|source| ListenerError::Bind {
                        addr: path.display().to_string(),
                        source,
                    })?;
                }
                let listener =
                    UnixListener::bind(&path).map_err(|source| ListenerError::Bind {
                        addr: path.display().to_string(),
                        source,
                    })?;
                tracing::info!(path = %path.display(), "unix socket listener bound");
                Ok(Binding::Unix(listener))
            }
            ListenKind::Port => {
                let addr = format!("{}:{}", config.bind_ip, config.port);
                let addr: SocketAddr = addr.parse().map_err(|source| ListenerError::Address {
                    addr: addr.clone(),
                    source,
                })?;
                let listener = TcpListener::bind(addr)
                    .await
                    .map_err(|source| ListenerError::Bind {
                        addr: addr.to_string(),
                        source,
                    })?;
                let local_addr = listener.local_addr().map_err(|source| ListenerError::Bind {
                    addr: addr.to_string(),
                    source,
                })?;
                tracing::info!(address = %local_addr, "tcp listener bound");
                Ok(Binding::Tcp(listener))
            }
        }
    }

    /// Local address, when bound over TCP.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        match self {
            Binding::Tcp(listener) => listener.local_addr().ok(),
            Binding::Unix(_) => None,
        }
    }
}

/// Resolve the unix socket path relative to the running executable.
fn socket_path(socket_file: &str) -> Result<PathBuf, ListenerError> {
    let exe = std::env::current_exe().map_err(ListenerError::ExecutableDir)?;
    let dir = exe.parent().ok_or_else(|| {
        ListenerError::ExecutableDir(std::io::Error::other(
            "executable has no parent directory",
        ))
    })?;
    Ok(dir.join(socket_file))
}

#[cfg(test)]
mod tests {
    use tokio::io::AsyncWriteExt;
    use tokio::net::UnixStream;

    use super::*;

    #[test]
    fn socket_path_joins_executable_dir() {
        let path = socket_path("notes.sock").unwrap();
        assert!(path.ends_with("notes.sock"));
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(path.parent().unwrap(), exe_dir);
    }

    #[tokio::test]
    async fn binds_tcp_from_config() {
        let config = ListenConfig {
            kind: ListenKind::Port,
            bind_ip: "127.0.0.1".to_string(),
            port: "0".to_string(),
            socket_file: "app.sock".to_string(),
        };
        let binding = Binding::bind(&config).await.unwrap();
        let addr = binding.local_addr().expect("tcp binding has a local addr");
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn rejects_malformed_bind_address() {
        let config = ListenConfig {
            kind: ListenKind::Port,
            bind_ip: "not-an-ip".to_string(),
            port: "10000".to_string(),
            socket_file: "app.sock".to_string(),
        };
        let err = Binding::bind(&config).await.unwrap_err();
        assert!(matches!(err, ListenerError::Address { .. }));
    }

    #[tokio::test]
    async fn binds_unix_socket_and_replaces_stale_file() {
        let config = ListenConfig {
            kind: ListenKind::Sock,
            socket_file: "listener-stale-test.sock".to_string(),
            ..Default::default()
        };

        let first = Binding::bind(&config).await.unwrap();
        assert!(matches!(first, Binding::Unix(_)));
        drop(first);

        // Dropping the listener leaves the socket file behind; a rebind
        // must replace it rather than fail.
        let second = Binding::bind(&config).await.unwrap();
        assert!(matches!(second, Binding::Unix(_)));
    }

    #[tokio::test]
    async fn unix_binding_accepts_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.sock");
        // Binding::bind resolves against the executable directory; bind the
        // listener at an explicit path here.
        let listener = UnixListener::bind(&path).unwrap();
        let accept = tokio::spawn(async move { listener.accept().await.map(|_| ()) });

        let mut stream = UnixStream::connect(&path).await.unwrap();
        stream.write_all(b"ping").await.unwrap();
        accept.await.unwrap().unwrap();
    }
}
