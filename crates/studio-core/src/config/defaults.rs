//! Default values for configuration types.

/// Delay before the upgrade screen starts polling when the upgrade was just
/// submitted. The backend job record may not exist yet.
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 5_000;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// MFA factors are good for 30 minutes.
pub const DEFAULT_MFA_STALE_TIME_SECS: u64 = 30 * 60;

pub const DEFAULT_QUERY_MAX_CAPACITY: u64 = 1_000;

pub const DEFAULT_QUERY_GC_TIME_SECS: u64 = 5 * 60;

pub const DEFAULT_SUPPORT_BASE_PATH: &str = "/support/new";
