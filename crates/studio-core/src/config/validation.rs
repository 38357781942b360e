use crate::config::types::StudioConfig;
use crate::errors::ConfigError;

/// Validate the merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` naming the first offending key.
pub fn validate_config(config: &StudioConfig) -> Result<(), ConfigError> {
    if config.upgrade.poll_interval_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "upgrade.poll_interval_secs must be greater than 0".to_string(),
        });
    }

    if config.query.max_capacity == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "query.max_capacity must be greater than 0".to_string(),
        });
    }

    if config.query.gc_time_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "query.gc_time_secs must be greater than 0".to_string(),
        });
    }

    if !config.support.base_path().starts_with('/') {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "support.base_path must start with '/', got '{}'",
                config.support.base_path()
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{QueryConfig, SupportConfig, UpgradeConfig};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&StudioConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let config = StudioConfig {
            upgrade: UpgradeConfig {
                poll_interval_secs: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("poll_interval_secs"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = StudioConfig {
            query: QueryConfig {
                max_capacity: Some(0),
                gc_time_secs: None,
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_gc_time_rejected() {
        let config = StudioConfig {
            query: QueryConfig {
                max_capacity: None,
                gc_time_secs: Some(0),
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("gc_time_secs"));
    }

    #[test]
    fn test_relative_support_path_rejected() {
        let config = StudioConfig {
            support: SupportConfig {
                base_path: Some("support/new".to_string()),
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("support.base_path"));
    }
}
