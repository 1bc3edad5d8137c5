//! Liveness probe subsystem.
//!
//! # Data Flow
//! ```text
//! GET /api/heartbeat
//!     → heartbeat.rs (no input, no state)
//!     → 204 No Content, empty body
//! ```
//!
//! # Design Decisions
//! - The probe has no dependencies and never blocks
//! - Stateless: response is identical regardless of prior requests
//! - One debug log line per invocation, nothing else

pub mod heartbeat;

pub use heartbeat::{heartbeat, router, HEARTBEAT_PATH};
