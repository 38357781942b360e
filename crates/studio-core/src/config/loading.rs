//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.studio/config.toml`
//! 3. **Project config** - `./.studio/config.toml` (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::{MfaConfig, QueryConfig, StudioConfig, SupportConfig, UpgradeConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if the
/// merged configuration fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<StudioConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".studio").join("config.toml"));
    }
    paths.push(std::env::current_dir()?.join(".studio").join("config.toml"));

    load_from_paths(&paths)
}

/// Load and merge the given config files in order.
///
/// Files that do not exist are skipped.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<StudioConfig, ConfigError> {
    let mut config = StudioConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(file_config) => {
                tracing::debug!(
                    event = "core.config.file_loaded",
                    path = %path.display()
                );
                config = merge_configs(config, file_config);
            }
            Err(ConfigError::ConfigNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a single configuration file.
pub fn load_config_file(path: &Path) -> Result<StudioConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Optional fields in the override replace base values only when present.
pub fn merge_configs(base: StudioConfig, override_config: StudioConfig) -> StudioConfig {
    StudioConfig {
        upgrade: UpgradeConfig {
            initial_delay_ms: override_config
                .upgrade
                .initial_delay_ms
                .or(base.upgrade.initial_delay_ms),
            poll_interval_secs: override_config
                .upgrade
                .poll_interval_secs
                .or(base.upgrade.poll_interval_secs),
        },
        mfa: MfaConfig {
            enabled: override_config.mfa.enabled.or(base.mfa.enabled),
            stale_time_secs: override_config
                .mfa
                .stale_time_secs
                .or(base.mfa.stale_time_secs),
        },
        query: QueryConfig {
            max_capacity: override_config
                .query
                .max_capacity
                .or(base.query.max_capacity),
            gc_time_secs: override_config
                .query
                .gc_time_secs
                .or(base.query.gc_time_secs),
        },
        support: SupportConfig {
            base_path: override_config.support.base_path.or(base.support.base_path),
        },
    }
}
