use crate::config::types::{Config, FetchConfig, LimitsConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_limits_config(&config.limits)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_ms < 100 || config.timeout_ms > 300_000 {
        return Err(ConfigError::Validation(format!(
            "timeout-ms must be between 100 and 300000, got {}",
            config.timeout_ms
        )));
    }

    if config.max_body_bytes < 1024 {
        return Err(ConfigError::Validation(format!(
            "max-body-bytes must be >= 1024, got {}",
            config.max_body_bytes
        )));
    }

    if config.max_redirects > 20 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= 20, got {}",
            config.max_redirects
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output limit configuration
fn validate_limits_config(config: &LimitsConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("max-headings", config.max_headings),
        ("max-links", config.max_links),
        ("max-images", config.max_images),
    ] {
        if value < 1 || value > 1000 {
            return Err(ConfigError::Validation(format!(
                "{} must be between 1 and 1000, got {}",
                name, value
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_timeout_too_small() {
        let mut config = Config::default();
        config.fetch.timeout_ms = 50;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_timeout_too_large() {
        let mut config = Config::default();
        config.fetch.timeout_ms = 600_000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_body_cap_too_small() {
        let mut config = Config::default();
        config.fetch.max_body_bytes = 512;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_user_agent() {
        let mut config = Config::default();
        config.fetch.user_agent = "   ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = Config::default();
        config.limits.max_links = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_excessive_limit_rejected() {
        let mut config = Config::default();
        config.limits.max_headings = 5000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_excessive_redirects_rejected() {
        let mut config = Config::default();
        config.fetch.max_redirects = 50;
        assert!(validate(&config).is_err());
    }
}
