//! Application configuration module
//!
//! Provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with
//! the `CASE_COACH` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use case_coach::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Session limit: {}", config.coaching.max_active_sessions_per_user);
//! ```

mod coaching;
mod error;
mod logging;

pub use coaching::CoachingConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Coaching limits (session caps)
    #[serde(default)]
    pub coaching: CoachingConfig,

    /// Logging configuration (level, output format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `CASE_COACH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CASE_COACH__COACHING__MAX_ACTIVE_SESSIONS_PER_USER=3`
    /// - `CASE_COACH__LOGGING__LEVEL=debug`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CASE_COACH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.coaching.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CASE_COACH__COACHING__MAX_ACTIVE_SESSIONS_PER_USER");
        env::remove_var("CASE_COACH__LOGGING__LEVEL");
        env::remove_var("CASE_COACH__LOGGING__JSON");
    }

    #[test]
    fn loads_defaults_with_no_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.coaching.max_active_sessions_per_user, 5);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CASE_COACH__COACHING__MAX_ACTIVE_SESSIONS_PER_USER", "2");
        env::set_var("CASE_COACH__LOGGING__LEVEL", "debug");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert_eq!(config.coaching.max_active_sessions_per_user, 2);
        assert_eq!(config.logging.level, "debug");
    }
}
