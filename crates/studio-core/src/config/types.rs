//! Configuration type definitions for Studio.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [upgrade]
//! initial_delay_ms = 5000
//! poll_interval_secs = 5
//!
//! [mfa]
//! enabled = true
//! stale_time_secs = 1800
//!
//! [query]
//! max_capacity = 1000
//! gc_time_secs = 300
//!
//! [support]
//! base_path = "/support/new"
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.studio/config.toml`
/// 2. Project config: `./.studio/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StudioConfig {
    #[serde(default)]
    pub upgrade: UpgradeConfig,

    #[serde(default)]
    pub mfa: MfaConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub support: SupportConfig,
}

/// Upgrade status screen timing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpgradeConfig {
    /// Grace period before polling starts after an upgrade was just initiated.
    /// Default: 5000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_delay_ms: Option<u64>,

    /// Interval between upgrade status polls.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<u64>,
}

/// MFA factors query defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MfaConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// How long a fetched factor list is considered fresh.
    /// Default: 30 minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stale_time_secs: Option<u64>,
}

/// Options passed through to the shared query cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct QueryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u64>,

    /// Entries not read for this long are evicted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gc_time_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SupportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
}

impl UpgradeConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(
            self.initial_delay_ms
                .unwrap_or(super::defaults::DEFAULT_INITIAL_DELAY_MS),
        )
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(
            self.poll_interval_secs
                .unwrap_or(super::defaults::DEFAULT_POLL_INTERVAL_SECS),
        )
    }
}

impl MfaConfig {
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(
            self.stale_time_secs
                .unwrap_or(super::defaults::DEFAULT_MFA_STALE_TIME_SECS),
        )
    }
}

impl QueryConfig {
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
            .unwrap_or(super::defaults::DEFAULT_QUERY_MAX_CAPACITY)
    }

    pub fn gc_time(&self) -> Duration {
        Duration::from_secs(
            self.gc_time_secs
                .unwrap_or(super::defaults::DEFAULT_QUERY_GC_TIME_SECS),
        )
    }
}

impl SupportConfig {
    pub fn base_path(&self) -> &str {
        self.base_path
            .as_deref()
            .unwrap_or(super::defaults::DEFAULT_SUPPORT_BASE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let config = StudioConfig::default();
        assert_eq!(config.upgrade.initial_delay(), Duration::from_secs(5));
        assert_eq!(config.upgrade.poll_interval(), Duration::from_secs(5));
        assert!(config.mfa.enabled());
        assert_eq!(config.mfa.stale_time(), Duration::from_secs(30 * 60));
        assert_eq!(config.support.base_path(), "/support/new");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: StudioConfig = toml::from_str(
            r#"
            [upgrade]
            initial_delay_ms = 250

            [mfa]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.upgrade.initial_delay(), Duration::from_millis(250));
        assert_eq!(config.upgrade.poll_interval(), Duration::from_secs(5));
        assert!(!config.mfa.enabled());
        assert_eq!(config.mfa.stale_time(), Duration::from_secs(1800));
    }
}
