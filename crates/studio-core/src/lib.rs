//! studio-core: Core library for the Studio dashboard
//!
//! Business logic behind the database upgrade screen and the profile MFA
//! settings. Used by both the CLI and the UI state layer.
//!
//! # Main Entry Points
//!
//! - [`upgrade`] - Upgrade status records, progress parsing, polling
//! - [`projects`] - Shared project state and detail refresh
//! - [`profile`] - MFA factor listing
//! - [`query`] - Read-through query cache
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod profile;
pub mod projects;
pub mod query;
pub mod upgrade;

// Re-export commonly used types at crate root for convenience
pub use config::StudioConfig;
pub use errors::{ConfigError, StudioError, StudioResult};
pub use profile::{AuthError, FactorList, MfaBackend, MfaFactorsQuery};
pub use projects::{ProjectDetail, ProjectDetailSource, ProjectError, ProjectStatus, ProjectStore};
pub use query::{CacheOptions, QueryCache, QueryKey, QueryOptions, QueryResult, QueryStatus};
pub use upgrade::{
    DatabaseUpgradeStatus, StatusPoller, UpgradeStatus, UpgradeStatusError, UpgradeStatusSource,
};

// Re-export logging initialization
pub use logging::init_logging;
