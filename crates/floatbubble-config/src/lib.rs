//! floatbubble-config: configuration files for floating bubble hosts
//!
//! Loads [`AppConfig`] from TOML, looking in an explicit path, `FLOATBUBBLE_CONFIG`, or the
//! platform config directory, and applies the `FLOATBUBBLE_LOG` override.

pub mod app;
pub mod error;

pub use app::{AppConfig, LoggingConfig, CONFIG_ENV, CONFIG_FILE_NAME, LOG_ENV};
pub use error::{ConfigError, Result};
