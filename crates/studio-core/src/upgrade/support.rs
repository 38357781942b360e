//! Pre-filled support request for a failed upgrade.

use std::fmt;

use urlencoding::encode;

use super::types::UpgradeStatus;

pub const UPGRADE_FAILED_SUBJECT: &str = "Upgrade failed for project";

/// Support form categories this screen can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportCategory {
    DatabaseUnresponsive,
}

impl SupportCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SupportCategory::DatabaseUnresponsive => "Database_unresponsive",
        }
    }
}

impl fmt::Display for SupportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Support form link. Fields hold plain text; [`SupportLink::href`] encodes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportLink {
    pub category: SupportCategory,
    pub project_ref: String,
    pub subject: String,
    pub message: String,
}

impl SupportLink {
    /// Build the request for a failed upgrade of `project_ref`.
    pub fn for_failed_upgrade(project_ref: &str, status: &UpgradeStatus) -> Self {
        let initiated_at = status
            .initiated_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| "unknown".to_string());
        let target_version = status.target_version.as_deref().unwrap_or("unknown");
        let error = status.error.as_deref().unwrap_or("unknown");

        Self {
            category: SupportCategory::DatabaseUnresponsive,
            project_ref: project_ref.to_string(),
            subject: UPGRADE_FAILED_SUBJECT.to_string(),
            message: format!(
                "Upgrade information:\n• Initiated at: {initiated_at}\n• Target Version: {target_version}\n• Error: {error}"
            ),
        }
    }

    /// Link to the support form at `base_path` with every query value percent-encoded.
    pub fn href(&self, base_path: &str) -> String {
        format!(
            "{base_path}?category={}&ref={}&subject={}&message={}",
            encode(self.category.as_str()),
            encode(&self.project_ref),
            encode(&self.subject),
            encode(&self.message),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upgrade::types::DatabaseUpgradeStatus;
    use chrono::{DateTime, Utc};

    fn failed(error: Option<&str>) -> UpgradeStatus {
        UpgradeStatus {
            status: DatabaseUpgradeStatus::Failed,
            progress: Some("4_upgrading_extensions".to_string()),
            initiated_at: Some(
                DateTime::parse_from_rfc3339("2024-03-01T12:30:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
            target_version: Some("15".to_string()),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_message_embeds_upgrade_metadata() {
        let link = SupportLink::for_failed_upgrade("abcdefgh", &failed(Some("timeout")));
        assert_eq!(link.category, SupportCategory::DatabaseUnresponsive);
        assert_eq!(link.subject, "Upgrade failed for project");
        assert_eq!(
            link.message,
            "Upgrade information:\n• Initiated at: 2024-03-01T12:30:00+00:00\n• Target Version: 15\n• Error: timeout"
        );
    }

    #[test]
    fn test_href_is_percent_encoded() {
        let link = SupportLink::for_failed_upgrade("abcdefgh", &failed(Some("timeout")));
        let href = link.href("/support/new");

        assert!(href.starts_with("/support/new?category=Database_unresponsive&ref=abcdefgh"));
        assert!(href.contains("&subject=Upgrade%20failed%20for%20project"));
        assert!(href.contains(&*encode("Error: timeout")));
        assert!(href.contains("Error%3A%20timeout"));
        assert!(href.contains("%0A"));
        assert!(!href.contains(' '));
    }

    #[test]
    fn test_missing_error_renders_unknown() {
        let link = SupportLink::for_failed_upgrade("abcdefgh", &failed(None));
        assert!(link.message.ends_with("• Error: unknown"));
    }

    #[test]
    fn test_ref_is_encoded() {
        let link = SupportLink::for_failed_upgrade("a&b", &failed(Some("x")));
        assert!(link.href("/support/new").contains("ref=a%26b&"));
    }
}
