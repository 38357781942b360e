use crate::errors::StudioError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectError {
    #[error("Project '{project_ref}' not found")]
    NotFound { project_ref: String },

    #[error("Failed to fetch project '{project_ref}': {message}")]
    FetchFailed {
        project_ref: String,
        message: String,
    },
}

impl StudioError for ProjectError {
    fn error_code(&self) -> &'static str {
        match self {
            ProjectError::NotFound { .. } => "PROJECT_NOT_FOUND",
            ProjectError::FetchFailed { .. } => "PROJECT_FETCH_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ProjectError::NotFound { .. } => true,
            ProjectError::FetchFailed { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_error_codes() {
        let not_found = ProjectError::NotFound {
            project_ref: "abc".to_string(),
        };
        assert_eq!(not_found.to_string(), "Project 'abc' not found");
        assert_eq!(not_found.error_code(), "PROJECT_NOT_FOUND");
        assert!(not_found.is_user_error());

        let failed = ProjectError::FetchFailed {
            project_ref: "abc".to_string(),
            message: "502".to_string(),
        };
        assert_eq!(failed.error_code(), "PROJECT_FETCH_FAILED");
        assert!(!failed.is_user_error());
    }
}
