use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of the backend upgrade job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseUpgradeStatus {
    Pending,
    Upgrading,
    Upgraded,
    Failed,
}

impl DatabaseUpgradeStatus {
    /// Upgraded and Failed end the job; nothing changes after them.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Upgraded | Self::Failed)
    }
}

/// Status record for a project's database upgrade, as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeStatus {
    pub status: DatabaseUpgradeStatus,
    /// `"<stage>_<words_joined_by_underscore>"`, stage in 0..=9.
    #[serde(default)]
    pub progress: Option<String>,
    #[serde(default)]
    pub initiated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub target_version: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope returned by the upgrade status endpoint.
///
/// `database_upgrade_status` is `null` until the job record exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradeStatusResponse {
    #[serde(rename = "databaseUpgradeStatus", default)]
    pub database_upgrade_status: Option<UpgradeStatus>,
}
