use std::time::Duration;

use crate::error::ConfigError;

/// Provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Request timeout (default: 30 seconds). Endpoints may override it
    /// per request.
    pub timeout: Duration,
    /// TCP connection timeout (default: 10 seconds)
    pub connect_timeout: Duration,
    /// Default User-Agent header value
    pub user_agent: String,
    /// Whether to log request and response bodies at debug level
    pub verbose: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("typed-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
            verbose: false,
        }
    }
}

impl ProviderConfig {
    /// Validates the configuration parameters.
    ///
    /// # Validation Rules
    ///
    /// - `timeout` of zero is rejected
    /// - `timeout` above 5 minutes is rejected
    /// - empty `user_agent` is rejected
    ///
    /// # Example
    ///
    /// ```rust
    /// use typed_fetch::provider::ProviderConfig;
    /// use std::time::Duration;
    ///
    /// assert!(ProviderConfig::default().validate().is_ok());
    ///
    /// let invalid = ProviderConfig {
    ///     timeout: Duration::from_secs(600),
    ///     ..Default::default()
    /// };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_timeout = Duration::from_secs(300);

        if self.timeout.is_zero() {
            return Err(ConfigError::invalid("timeout", "timeout cannot be zero"));
        }

        if self.timeout > max_timeout {
            return Err(ConfigError::too_high(
                "timeout",
                format!("{:?}", self.timeout),
                "5 minutes",
            ));
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::invalid("user_agent", "cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ProviderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("typed-fetch/"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ProviderConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err().field_name(),
            "timeout"
        );
    }

    #[test]
    fn test_excessive_timeout_rejected() {
        let config = ProviderConfig {
            timeout: Duration::from_secs(600),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let config = ProviderConfig {
            user_agent: String::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err().field_name(),
            "user_agent"
        );
    }
}
