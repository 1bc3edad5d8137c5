//! Configuration loading from the process environment.
//!
//! Every recognized variable has a default, so an empty environment yields a
//! usable configuration. Parsing can only fail on the boolean flags; when it
//! does, the caller is expected to print [`describe`] and exit. Configuration
//! errors are fatal and never retried.

use thiserror::Error;

use crate::config::schema::{AppConfig, ListenKind};

/// Recognized environment variables: (name, default, effect).
const VARS: &[(&str, &str, &str)] = &[
    ("IS_DEBUG", "false", "debug mode flag"),
    ("IS_DEVELOPMENT", "false", "development mode flag"),
    (
        "LISTEN_TYPE",
        "port",
        "\"sock\" binds a unix socket, anything else binds TCP",
    ),
    ("BIND_IP", "0.0.0.0", "TCP bind address"),
    ("PORT", "10000", "TCP bind port"),
    (
        "SOCKET_FILE",
        "app.sock",
        "unix socket filename, resolved relative to the executable's directory",
    ),
    ("LOG_LEVEL", "", "advisory log level; RUST_LOG wins when set"),
    ("ADMIN_EMAIL", "admin", "admin account email (unused)"),
    ("ADMIN_PASSWORD", "admin", "admin account password (unused)"),
];

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: expected a boolean")]
    InvalidBool { var: &'static str, value: String },
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an injectable lookup.
    ///
    /// `from_env` delegates here; tests supply a closure over a map instead
    /// of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(value) = lookup("IS_DEBUG") {
            config.is_debug = parse_bool("IS_DEBUG", &value)?;
        }
        if let Some(value) = lookup("IS_DEVELOPMENT") {
            config.is_development = parse_bool("IS_DEVELOPMENT", &value)?;
        }
        if let Some(value) = lookup("LISTEN_TYPE") {
            config.listen.kind = ListenKind::parse(&value);
        }
        if let Some(value) = lookup("BIND_IP") {
            config.listen.bind_ip = value;
        }
        if let Some(value) = lookup("PORT") {
            config.listen.port = value;
        }
        if let Some(value) = lookup("SOCKET_FILE") {
            config.listen.socket_file = value;
        }
        if let Some(value) = lookup("LOG_LEVEL") {
            config.log_level = value;
        }
        if let Some(value) = lookup("ADMIN_EMAIL") {
            config.admin.email = value;
        }
        if let Some(value) = lookup("ADMIN_PASSWORD") {
            config.admin.password = value;
        }

        Ok(config)
    }
}

/// Parse a boolean flag, accepting `1/0/t/f/true/false` and the usual
/// capitalizations.
fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

/// Render a human-readable description of every recognized variable.
///
/// Printed to stderr when configuration loading fails.
pub fn describe() -> String {
    let mut out = String::from("notes-server\n\nEnvironment variables:\n");
    for (name, default, effect) in VARS {
        out.push_str(&format!(
            "  {name}\n        {effect} (default {default:?})\n"
        ));
    }
    out
}
