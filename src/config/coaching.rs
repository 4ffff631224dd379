//! Coaching configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for session and coaching limits
#[derive(Debug, Clone, Deserialize)]
pub struct CoachingConfig {
    /// Maximum concurrently active sessions per user
    #[serde(default = "default_max_active_sessions")]
    pub max_active_sessions_per_user: u32,
}

fn default_max_active_sessions() -> u32 {
    5
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            max_active_sessions_per_user: default_max_active_sessions(),
        }
    }
}

impl CoachingConfig {
    /// Validate coaching configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_active_sessions_per_user == 0 {
            return Err(ValidationError::InvalidSessionLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_five_active_sessions() {
        let config = CoachingConfig::default();
        assert_eq!(config.max_active_sessions_per_user, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_session_limit_is_invalid() {
        let config = CoachingConfig {
            max_active_sessions_per_user: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let config: CoachingConfig =
            serde_json::from_str(r#"{"max_active_sessions_per_user": 3}"#).unwrap();
        assert_eq!(config.max_active_sessions_per_user, 3);
    }
}
