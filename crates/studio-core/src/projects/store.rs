use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use super::errors::ProjectError;
use super::types::ProjectDetail;

/// Remote project detail endpoint.
#[async_trait]
pub trait ProjectDetailSource: Send + Sync {
    async fn fetch_project_detail(&self, project_ref: &str) -> Result<ProjectDetail, ProjectError>;
}

/// Shared "selected project" state.
///
/// Clones share the same underlying value; subscribers are notified on
/// every [`ProjectStore::set_project_details`].
#[derive(Clone)]
pub struct ProjectStore {
    tx: Arc<watch::Sender<Option<ProjectDetail>>>,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ProjectStore {
    pub fn new(selected: Option<ProjectDetail>) -> Self {
        let (tx, _rx) = watch::channel(selected);
        Self { tx: Arc::new(tx) }
    }

    /// Currently selected project, if any.
    pub fn selected(&self) -> Option<ProjectDetail> {
        self.tx.borrow().clone()
    }

    /// Replace the selected project's details.
    pub fn set_project_details(&self, project: ProjectDetail) {
        tracing::info!(
            event = "core.project_store.details_updated",
            project_ref = %project.project_ref,
            status = ?project.status
        );
        self.tx.send_replace(Some(project));
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ProjectDetail>> {
        self.tx.subscribe()
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("selected", &*self.tx.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::types::ProjectStatus;

    fn project(status: ProjectStatus) -> ProjectDetail {
        ProjectDetail {
            project_ref: "abcdefgh".to_string(),
            name: "billing".to_string(),
            status,
        }
    }

    #[test]
    fn test_clones_share_state() {
        let store = ProjectStore::new(Some(project(ProjectStatus::Upgrading)));
        let other = store.clone();

        other.set_project_details(project(ProjectStatus::ActiveHealthy));

        assert_eq!(
            store.selected().unwrap().status,
            ProjectStatus::ActiveHealthy
        );
    }

    #[tokio::test]
    async fn test_subscribers_see_updates() {
        let store = ProjectStore::default();
        let mut rx = store.subscribe();
        assert!(rx.borrow().is_none());

        store.set_project_details(project(ProjectStatus::ActiveHealthy));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().unwrap().name, "billing");
    }
}
