//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP / unix socket connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (attach request ID)
//!     → cors.rs (cross-origin policy)
//!     → route handlers (health, docs)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::HttpServer;
