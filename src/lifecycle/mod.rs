//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM / Ctrl-C → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: configuration and bind errors are fatal at startup
//! - Ordered shutdown: stop accept, drain, close
//! - Drain is bounded: forced exit after `DRAIN_DEADLINE`

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, DRAIN_DEADLINE};
