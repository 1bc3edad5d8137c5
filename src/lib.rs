//! Notes service bootstrap.
//!
//! An HTTP service skeleton built with Tokio and Axum: environment-driven
//! configuration, a router exposing a heartbeat probe and an API
//! documentation surface, a strict CORS policy, and a listener that serves
//! over TCP or a unix domain socket.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                 NOTES SERVER                   │
//!                    │                                                │
//!   Client Request   │  ┌─────────┐    ┌─────────┐    ┌───────────┐  │
//!   ─────────────────┼─▶│   net   │───▶│  http   │───▶│ handlers  │  │
//!                    │  │ binding │    │ server  │    │health/docs│  │
//!                    │  └─────────┘    └─────────┘    └───────────┘  │
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │  ┌────────┐ ┌───────────┐ ┌───────────┐  │  │
//!                    │  │  │ config │ │ lifecycle │ │observabil-│  │  │
//!                    │  │  │        │ │           │ │    ity    │  │  │
//!                    │  │  └────────┘ └───────────┘ └───────────┘  │  │
//!                    │  └──────────────────────────────────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod docs;
pub mod health;
pub mod http;
pub mod net;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use net::Binding;
