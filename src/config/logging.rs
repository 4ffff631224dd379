//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

const KNOWN_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for structured logging output
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default log level filter (overridable via RUST_LOG)
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit logs as JSON instead of human-readable lines
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !KNOWN_LEVELS.contains(&self.level.as_str()) {
            return Err(ValidationError::InvalidLogLevel(self.level.clone()));
        }
        Ok(())
    }
}
