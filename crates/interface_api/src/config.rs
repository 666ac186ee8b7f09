//! API configuration

use serde::Deserialize;

use core_kernel::CoreError;
use domain_claims::{DistinctnessPolicy, DEFAULT_MIN_DIFFERENCES};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Critical differences required when a request does not set its own threshold
    pub min_differences: i64,
    /// Largest claim text accepted, in bytes
    pub max_text_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            min_differences: DEFAULT_MIN_DIFFERENCES,
            max_text_bytes: 1024 * 1024,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Variables that are not set keep their default value.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Rejects settings the server cannot run with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.port == 0 {
            return Err(CoreError::configuration("port must be non-zero"));
        }
        if self.max_text_bytes == 0 {
            return Err(CoreError::configuration("max_text_bytes must be non-zero"));
        }
        Ok(())
    }

    /// Threshold applied when a request omits `min_differences`
    pub fn distinctness_policy(&self) -> DistinctnessPolicy {
        DistinctnessPolicy::new(self.min_differences)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ApiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.distinctness_policy(), DistinctnessPolicy::default());
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = ApiConfig { port: 0, ..ApiConfig::default() };
        assert!(matches!(config.validate(), Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_zero_text_limit_rejected() {
        let config = ApiConfig { max_text_bytes: 0, ..ApiConfig::default() };
        assert!(config.validate().is_err());
    }
}
