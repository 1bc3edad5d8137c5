//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → env.rs (read recognized variables, apply defaults)
//!     → AppConfig (immutable after construction)
//!     → passed explicitly to the components that need it
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never reloaded
//! - Every variable has a default; an empty environment is valid
//! - No global singleton: the value is handed to components at startup
//! - Parse failures are fatal; the caller prints `env::describe()` and exits

pub mod env;
pub mod schema;

pub use env::ConfigError;
pub use schema::AppConfig;
pub use schema::ListenConfig;
pub use schema::ListenKind;
