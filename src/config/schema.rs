//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All values come from process environment variables (see `env.rs`); the
//! defaults here are what an empty environment produces.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Debug mode flag (parsed, not consumed by any handler).
    pub is_debug: bool,

    /// Development mode flag (parsed, not consumed by any handler).
    pub is_development: bool,

    /// Listener configuration (transport, bind address, socket file).
    pub listen: ListenConfig,

    /// Advisory log level; `RUST_LOG` takes precedence when set.
    pub log_level: String,

    /// Admin credentials. Parsed and stored; referenced by no handler.
    pub admin: AdminConfig,
}

/// Which transport the listener binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListenKind {
    /// TCP socket at `bind_ip:port`.
    #[default]
    Port,
    /// Unix domain socket at `<executable dir>/<socket_file>`.
    Sock,
}

impl ListenKind {
    /// Select the transport from a `LISTEN_TYPE` value.
    ///
    /// Only the exact value `"sock"` selects the Unix socket transport;
    /// every other value falls back to TCP.
    pub fn parse(value: &str) -> Self {
        if value == "sock" {
            ListenKind::Sock
        } else {
            ListenKind::Port
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenConfig {
    /// Selected transport.
    pub kind: ListenKind,

    /// TCP bind address (e.g., "0.0.0.0").
    pub bind_ip: String,

    /// TCP bind port, kept as a string as it arrives from the environment.
    pub port: String,

    /// Unix socket filename, resolved relative to the executable's directory.
    pub socket_file: String,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            kind: ListenKind::Port,
            bind_ip: "0.0.0.0".to_string(),
            port: "10000".to_string(),
            socket_file: "app.sock".to_string(),
        }
    }
}

/// Admin credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_kind_requires_exact_sock() {
        assert_eq!(ListenKind::parse("sock"), ListenKind::Sock);
        assert_eq!(ListenKind::parse("port"), ListenKind::Port);
        assert_eq!(ListenKind::parse("SOCK"), ListenKind::Port);
        assert_eq!(ListenKind::parse("unix"), ListenKind::Port);
        assert_eq!(ListenKind::parse(""), ListenKind::Port);
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = AppConfig::default();
        assert!(!config.is_debug);
        assert!(!config.is_development);
        assert_eq!(config.listen.kind, ListenKind::Port);
        assert_eq!(config.listen.bind_ip, "0.0.0.0");
        assert_eq!(config.listen.port, "10000");
        assert_eq!(config.listen.socket_file, "app.sock");
        assert_eq!(config.log_level, "");
        assert_eq!(config.admin.email, "admin");
        assert_eq!(config.admin.password, "admin");
    }
}
