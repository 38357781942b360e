use serde::{Deserialize, Serialize};

/// Lifecycle status of a project as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    ActiveHealthy,
    ComingUp,
    Upgrading,
    Inactive,
    #[serde(other)]
    Unknown,
}

/// Project detail record held in the shared project store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(rename = "ref")]
    pub project_ref: String,
    pub name: String,
    pub status: ProjectStatus,
}

impl ProjectDetail {
    pub fn is_upgrading(&self) -> bool {
        self.status == ProjectStatus::Upgrading
    }
}
