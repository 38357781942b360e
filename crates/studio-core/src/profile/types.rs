use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorType {
    Totp,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Verified,
    Unverified,
}

/// A registered multi-factor authentication method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub id: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    pub factor_type: FactorType,
    pub status: FactorStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload of the auth backend's list-factors call, passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorList {
    pub all: Vec<Factor>,
    /// Verified TOTP factors only.
    #[serde(default)]
    pub totp: Vec<Factor>,
    /// Verified phone factors only.
    #[serde(default)]
    pub phone: Vec<Factor>,
}

impl FactorList {
    pub fn verified(&self) -> impl Iterator<Item = &Factor> {
        self.all
            .iter()
            .filter(|f| f.status == FactorStatus::Verified)
    }

    pub fn has_verified_factor(&self) -> bool {
        self.verified().next().is_some()
    }
}
