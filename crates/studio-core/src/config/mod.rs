//! # Configuration System
//!
//! Hierarchical TOML configuration for Studio.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.studio/config.toml`
//! 3. **Project config** - `./.studio/config.toml` (highest priority)

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{MfaConfig, QueryConfig, StudioConfig, SupportConfig, UpgradeConfig};
pub use validation::validate_config;

impl StudioConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
