use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filter levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub coordinator: CoordinatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Navigation coordinator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Transitions kept in the audit log (default: 64, 0 disables).
    #[serde(default = "default_transition_log_capacity")]
    pub transition_log_capacity: usize,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Interactive shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt printed before each line when reading from a terminal.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Re-render state after every command that changed it (default: true).
    #[serde(default = "default_echo_state")]
    pub echo_state: bool,
}

fn default_transition_log_capacity() -> usize {
    64
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    "nav> ".to_string()
}

fn default_echo_state() -> bool {
    true
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            transition_log_capacity: default_transition_log_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            echo_state: default_echo_state(),
        }
    }
}
