//! # Focus Config
//!
//! Configuration types for the Focus dashboard client.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`api`]: Remote API location, request timeout and offline latency simulation
//! - [`session`]: Where the session is persisted between runs
//! - [`logging`]: Log level and log file directory
//!
//! # Example
//!
//! ```ignore
//! use focus_config::{ApiConfig, SessionConfig, LoggingConfig};
//!
//! let api_config = ApiConfig::from_env();
//! let session_config = SessionConfig::from_env();
//! let logging_config = LoggingConfig::from_env();
//! ```

pub mod api;
pub mod logging;
pub mod session;

// Re-export commonly used types at crate root
pub use api::{ApiConfig, SimulatedLatency};
pub use logging::LoggingConfig;
pub use session::SessionConfig;
