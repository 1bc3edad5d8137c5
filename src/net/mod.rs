//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenConfig
//!     → listener.rs (transport selection: TCP or unix socket)
//!     → Binding (bound listener)
//!     → Hand off to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Transport is picked once at startup from configuration
//! - Bind failures are fatal startup errors, never swallowed
//! - Unix socket paths resolve relative to the executable's directory

pub mod listener;

pub use listener::{Binding, ListenerError};
