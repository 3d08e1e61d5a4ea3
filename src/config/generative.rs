//! Generative text service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the external acknowledgment service.
///
/// The API key is optional: without one the server starts with the
/// disabled generator and every acknowledgment uses the deterministic
/// fallback. A missing key never fails startup.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerativeConfig {
    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// Model used for acknowledgment phrasing
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Acknowledgment timeout in seconds; hard upper bound of 3
    #[serde(default = "default_ack_timeout")]
    pub ack_timeout_secs: u64,

    /// Cap on generated acknowledgment length
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl GenerativeConfig {
    /// Get the acknowledgment timeout as a Duration
    pub fn ack_timeout(&self) -> Duration {
        Duration::from_secs(self.ack_timeout_secs)
    }

    /// Check if a generative service is configured
    pub fn is_configured(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Validate generative configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ack_timeout_secs == 0 || self.ack_timeout_secs > 3 {
            return Err(ValidationError::InvalidAckTimeout);
        }
        Ok(())
    }
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            ack_timeout_secs: default_ack_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "claude-3-5-haiku-20241022".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_ack_timeout() -> u64 {
    3
}

fn default_max_tokens() -> u32 {
    160
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unconfigured_but_valid() {
        let config = GenerativeConfig::default();
        assert!(!config.is_configured());
        assert!(config.validate().is_ok());
        assert_eq!(config.ack_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_empty_key_counts_as_unconfigured() {
        let config = GenerativeConfig {
            anthropic_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn test_key_makes_it_configured() {
        let config = GenerativeConfig {
            anthropic_api_key: Some("sk-ant-xxx".to_string()),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn test_validation_rejects_timeouts_over_three_seconds() {
        let config = GenerativeConfig {
            ack_timeout_secs: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = GenerativeConfig {
            ack_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
