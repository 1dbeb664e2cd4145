//! Configuration loading and validation.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_TRANSITION_LOG_CAPACITY};
pub use types::{Config, CoordinatorConfig, LoggingConfig, ShellConfig, LOG_LEVELS};
