//! JSON-file-backed collaborators.
//!
//! Each call re-reads its file, so editing the file while the CLI runs
//! behaves like the remote endpoint changing.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use studio_core::upgrade::UpgradeStatusResponse;
use studio_core::{
    AuthError, FactorList, MfaBackend, ProjectDetail, ProjectDetailSource, ProjectError,
    UpgradeStatus, UpgradeStatusError, UpgradeStatusSource,
};

pub struct FileStatusSource {
    path: PathBuf,
}

impl FileStatusSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl UpgradeStatusSource for FileStatusSource {
    async fn fetch_upgrade_status(
        &self,
        project_ref: &str,
    ) -> Result<Option<UpgradeStatus>, UpgradeStatusError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| UpgradeStatusError::FetchFailed {
                project_ref: project_ref.to_string(),
                message: format!("{}: {e}", self.path.display()),
            })?;

        let response: UpgradeStatusResponse =
            serde_json::from_str(&content).map_err(|e| UpgradeStatusError::InvalidResponse {
                project_ref: project_ref.to_string(),
                message: e.to_string(),
            })?;

        Ok(response.database_upgrade_status)
    }
}

pub struct FileProjectSource {
    path: Option<PathBuf>,
}

impl FileProjectSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn load_blocking(&self, project_ref: &str) -> Result<ProjectDetail, ProjectError> {
        let Some(path) = &self.path else {
            return Err(ProjectError::NotFound {
                project_ref: project_ref.to_string(),
            });
        };
        let content = std::fs::read_to_string(path).map_err(|e| ProjectError::FetchFailed {
            project_ref: project_ref.to_string(),
            message: format!("{}: {e}", path.display()),
        })?;
        parse_project(project_ref, &content)
    }
}

fn parse_project(project_ref: &str, content: &str) -> Result<ProjectDetail, ProjectError> {
    let project: ProjectDetail =
        serde_json::from_str(content).map_err(|e| ProjectError::FetchFailed {
            project_ref: project_ref.to_string(),
            message: e.to_string(),
        })?;

    if project.project_ref != project_ref {
        return Err(ProjectError::NotFound {
            project_ref: project_ref.to_string(),
        });
    }
    Ok(project)
}

#[async_trait]
impl ProjectDetailSource for FileProjectSource {
    async fn fetch_project_detail(&self, project_ref: &str) -> Result<ProjectDetail, ProjectError> {
        let Some(path) = &self.path else {
            return Err(ProjectError::NotFound {
                project_ref: project_ref.to_string(),
            });
        };
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ProjectError::FetchFailed {
                    project_ref: project_ref.to_string(),
                    message: format!("{}: {e}", path.display()),
                })?;
        parse_project(project_ref, &content)
    }
}

/// `{ "data": ..., "error": ... }` as returned by the auth SDK.
#[derive(Deserialize)]
struct ListFactorsFile {
    #[serde(default)]
    data: Option<FactorList>,
    #[serde(default)]
    error: Option<AuthErrorBody>,
}

#[derive(Deserialize)]
struct AuthErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    status: Option<u16>,
}

pub struct FileMfaBackend {
    path: PathBuf,
}

impl FileMfaBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl MfaBackend for FileMfaBackend {
    async fn list_factors(&self) -> Result<FactorList, AuthError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AuthError::new(format!("{}: {e}", self.path.display())))?;
        let file: ListFactorsFile = serde_json::from_str(&content)
            .map_err(|e| AuthError::new(format!("Malformed list-factors response: {e}")))?;

        match (file.data, file.error) {
            (_, Some(error)) => Err(AuthError {
                message: error.message,
                code: error.code,
                status: error.status,
            }),
            (Some(data), None) => Ok(data),
            (None, None) => Err(AuthError::new("List-factors response has neither data nor error")),
        }
    }
}
