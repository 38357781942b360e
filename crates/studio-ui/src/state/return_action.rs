//! "Return to project" action shown on the completed and failed screens.

use std::sync::Arc;

use studio_core::{ProjectDetailSource, ProjectStore};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::errors::OperationError;

/// Observable state of the action, used to render the button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReturnState {
    pub in_flight: bool,
    /// Error from the last attempt; cleared when a new attempt starts.
    pub error: Option<OperationError>,
}

/// Refreshes the project detail and writes it into the shared store.
///
/// At most one refresh runs at a time; triggers while one is in flight are ignored.
#[derive(Clone)]
pub struct ReturnToProject {
    project_ref: String,
    source: Arc<dyn ProjectDetailSource>,
    projects: ProjectStore,
    state: Arc<watch::Sender<ReturnState>>,
}

impl ReturnToProject {
    pub fn new(
        project_ref: String,
        source: Arc<dyn ProjectDetailSource>,
        projects: ProjectStore,
    ) -> Self {
        let (state, _rx) = watch::channel(ReturnState::default());
        Self {
            project_ref,
            source,
            projects,
            state: Arc::new(state),
        }
    }

    /// Start a refresh. Returns `None` if one is already running.
    pub fn trigger(&self) -> Option<JoinHandle<()>> {
        let started = self.state.send_if_modified(|state| {
            if state.in_flight {
                false
            } else {
                state.in_flight = true;
                state.error = None;
                true
            }
        });

        if !started {
            tracing::debug!(
                event = "ui.return_to_project.ignored",
                project_ref = %self.project_ref,
                reason = "already in flight"
            );
            return None;
        }

        tracing::info!(
            event = "ui.return_to_project.started",
            project_ref = %self.project_ref
        );

        let project_ref = self.project_ref.clone();
        let source = Arc::clone(&self.source);
        let projects = self.projects.clone();
        let state = Arc::clone(&self.state);

        Some(tokio::spawn(async move {
            let error = match source.fetch_project_detail(&project_ref).await {
                Ok(project) => {
                    tracing::info!(
                        event = "ui.return_to_project.completed",
                        project_ref = %project_ref,
                        status = ?project.status,
                        still_upgrading = project.is_upgrading()
                    );
                    projects.set_project_details(project);
                    None
                }
                Err(e) => {
                    tracing::error!(
                        event = "ui.return_to_project.failed",
                        project_ref = %project_ref,
                        error = %e
                    );
                    Some(OperationError {
                        project_ref: project_ref.clone(),
                        message: e.to_string(),
                    })
                }
            };

            state.send_modify(|state| {
                state.in_flight = false;
                state.error = error;
            });
        }))
    }

    pub fn state(&self) -> ReturnState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ReturnState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use studio_core::{ProjectDetail, ProjectError, ProjectStatus};

    struct SlowSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ProjectDetailSource for SlowSource {
        async fn fetch_project_detail(
            &self,
            project_ref: &str,
        ) -> Result<ProjectDetail, ProjectError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(1)).await;
            if self.fail {
                return Err(ProjectError::FetchFailed {
                    project_ref: project_ref.to_string(),
                    message: "bad gateway".to_string(),
                });
            }
            Ok(ProjectDetail {
                project_ref: project_ref.to_string(),
                name: "billing".to_string(),
                status: ProjectStatus::ActiveHealthy,
            })
        }
    }

    fn action(fail: bool) -> (Arc<SlowSource>, ProjectStore, ReturnToProject) {
        let source = Arc::new(SlowSource {
            calls: AtomicUsize::new(0),
            fail,
        });
        let projects = ProjectStore::default();
        let action = ReturnToProject::new("abcdefgh".to_string(), source.clone(), projects.clone());
        (source, projects, action)
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_updates_shared_store() {
        let (_source, projects, action) = action(false);

        let handle = action.trigger().unwrap();
        assert!(action.state().in_flight);
        handle.await.unwrap();

        assert_eq!(action.state(), ReturnState::default());
        assert_eq!(
            projects.selected().unwrap().status,
            ProjectStatus::ActiveHealthy
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_trigger_while_in_flight_is_ignored() {
        let (source, _projects, action) = action(false);

        let handle = action.trigger().unwrap();
        assert!(action.trigger().is_none());
        handle.await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(action.trigger().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_clears_busy_and_records_error() {
        let (_source, projects, action) = action(true);

        action.trigger().unwrap().await.unwrap();

        let state = action.state();
        assert!(!state.in_flight);
        let error = state.error.unwrap();
        assert_eq!(error.project_ref, "abcdefgh");
        assert!(error.message.contains("bad gateway"));
        assert!(projects.selected().is_none());
    }
}
