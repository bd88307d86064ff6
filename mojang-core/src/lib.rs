//! Mojang Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the API helper crate:
//! - Configuration of the service base URLs and logging (TOML on disk)
//! - The error type returned by every fallible helper
//! - Structured logging with tracing
//! - Platform directory lookup
//! - Default base URLs and other constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{MjError, MjResult};
pub use logging::init_logging;
pub use platform::Platform;
