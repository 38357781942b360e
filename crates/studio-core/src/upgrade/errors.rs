use crate::errors::StudioError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpgradeStatusError {
    #[error("Failed to fetch upgrade status for project '{project_ref}': {message}")]
    FetchFailed {
        project_ref: String,
        message: String,
    },

    #[error("Upgrade status response for project '{project_ref}' is malformed: {message}")]
    InvalidResponse {
        project_ref: String,
        message: String,
    },
}

impl StudioError for UpgradeStatusError {
    fn error_code(&self) -> &'static str {
        match self {
            UpgradeStatusError::FetchFailed { .. } => "UPGRADE_STATUS_FETCH_FAILED",
            UpgradeStatusError::InvalidResponse { .. } => "UPGRADE_STATUS_INVALID_RESPONSE",
        }
    }
}
