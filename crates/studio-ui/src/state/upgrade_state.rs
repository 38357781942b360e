use std::sync::Arc;
use std::time::Duration;

use chrono::FixedOffset;
use studio_core::config::defaults::DEFAULT_SUPPORT_BASE_PATH;
use studio_core::{
    ProjectDetail, ProjectDetailSource, ProjectStore, StatusPoller, StudioConfig, UpgradeStatus,
    UpgradeStatusSource,
};
use tokio::sync::watch;

use super::init_gate::InitGate;
use super::return_action::{ReturnState, ReturnToProject};
use super::view_state::ViewState;

/// Route parameters for the upgrade screen.
#[derive(Clone, Debug)]
pub struct UpgradeViewProps {
    pub project_ref: String,
    /// Set when the caller just submitted the upgrade request.
    pub just_initiated: bool,
}

/// Timing and presentation settings.
#[derive(Clone, Debug)]
pub struct UpgradeViewConfig {
    pub initial_delay: Duration,
    pub poll_interval: Duration,
    pub support_base_path: String,
    /// Viewer zone for the start-time tooltip; `None` uses the local zone.
    pub display_zone: Option<FixedOffset>,
}

impl Default for UpgradeViewConfig {
    fn default() -> Self {
        Self::from(&StudioConfig::default())
    }
}

impl From<&StudioConfig> for UpgradeViewConfig {
    fn from(config: &StudioConfig) -> Self {
        Self {
            initial_delay: config.upgrade.initial_delay(),
            poll_interval: config.upgrade.poll_interval(),
            support_base_path: config.support.base_path().to_string(),
            display_zone: None,
        }
    }
}

/// Collaborators injected into the screen.
#[derive(Clone)]
pub struct UpgradeViewDeps {
    pub status_source: Arc<dyn UpgradeStatusSource>,
    pub project_source: Arc<dyn ProjectDetailSource>,
    pub projects: ProjectStore,
}

/// State of the database upgrade screen for one project.
///
/// Owns the init timer and the status poller; both stop when this is dropped.
pub struct UpgradingState {
    project_ref: String,
    projects: ProjectStore,
    status_source: Arc<dyn UpgradeStatusSource>,
    config: UpgradeViewConfig,

    gate: InitGate,
    poller: Option<StatusPoller>,
    return_action: ReturnToProject,

    /// Change feeds awaited by [`UpgradingState::changed`]; `None` once closed.
    gate_rx: Option<watch::Receiver<bool>>,
    status_rx: Option<watch::Receiver<Option<UpgradeStatus>>>,
    return_rx: Option<watch::Receiver<ReturnState>>,
    project_rx: Option<watch::Receiver<Option<ProjectDetail>>>,
}

impl UpgradingState {
    /// Mount the screen. Must be called inside a tokio runtime.
    pub fn mount(props: UpgradeViewProps, deps: UpgradeViewDeps, config: UpgradeViewConfig) -> Self {
        tracing::info!(
            event = "ui.upgrade_view.mounted",
            project_ref = %props.project_ref,
            just_initiated = props.just_initiated
        );

        let gate = InitGate::start(props.just_initiated, config.initial_delay);
        let return_action = ReturnToProject::new(
            props.project_ref.clone(),
            deps.project_source,
            deps.projects.clone(),
        );

        let project_rx = deps.projects.subscribe();

        let mut state = Self {
            project_ref: props.project_ref,
            projects: deps.projects,
            status_source: deps.status_source,
            config,
            gate_rx: Some(gate.subscribe()),
            return_rx: Some(return_action.subscribe()),
            project_rx: Some(project_rx),
            gate,
            poller: None,
            return_action,
            status_rx: None,
        };
        state.sync();
        state
    }

    /// Start polling once the gate has opened. Idempotent.
    pub fn sync(&mut self) {
        if self.poller.is_some() || !self.gate.is_initialized() {
            return;
        }

        let poller = StatusPoller::spawn(
            Arc::clone(&self.status_source),
            self.project_ref.clone(),
            self.config.poll_interval,
        );
        self.status_rx = Some(poller.subscribe());
        self.poller = Some(poller);
    }

    /// Wait until something that affects rendering changes.
    pub async fn changed(&mut self) {
        loop {
            let (feed, open) = tokio::select! {
                open = changed_or_pending(&mut self.gate_rx) => (Feed::Gate, open),
                open = changed_or_pending(&mut self.status_rx) => (Feed::Status, open),
                open = changed_or_pending(&mut self.return_rx) => (Feed::Return, open),
                open = changed_or_pending(&mut self.project_rx) => (Feed::Project, open),
            };

            if open {
                self.sync();
                return;
            }

            // A closed feed will never change again; stop listening to it.
            match feed {
                Feed::Gate => self.gate_rx = None,
                Feed::Status => self.status_rx = None,
                Feed::Return => self.return_rx = None,
                Feed::Project => self.project_rx = None,
            }

            if self.gate_rx.is_none()
                && self.status_rx.is_none()
                && self.return_rx.is_none()
                && self.project_rx.is_none()
            {
                // Nothing left to wait on.
                std::future::pending::<()>().await;
            }
        }
    }

    pub fn project_ref(&self) -> &str {
        &self.project_ref
    }

    /// Selected project from the shared store.
    pub fn project(&self) -> Option<ProjectDetail> {
        self.projects.selected()
    }

    pub fn is_initialized(&self) -> bool {
        self.gate.is_initialized()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_some()
    }

    /// Latest status snapshot, `None` before polling or before the job record exists.
    pub fn latest_status(&self) -> Option<UpgradeStatus> {
        self.poller.as_ref().and_then(StatusPoller::latest)
    }

    pub fn view_state(&self) -> ViewState {
        let snapshot = self.latest_status();
        ViewState::derive(
            self.is_initialized(),
            snapshot.as_ref(),
            &self.project_ref,
            self.config.display_zone,
        )
    }

    pub fn support_base_path(&self) -> &str {
        if self.config.support_base_path.is_empty() {
            DEFAULT_SUPPORT_BASE_PATH
        } else {
            &self.config.support_base_path
        }
    }

    /// Click handler for "Return to project". Returns false when ignored.
    pub fn return_to_project(&self) -> bool {
        self.return_action.trigger().is_some()
    }

    pub fn return_state(&self) -> ReturnState {
        self.return_action.state()
    }
}

enum Feed {
    Gate,
    Status,
    Return,
    Project,
}

async fn changed_or_pending<T>(rx: &mut Option<watch::Receiver<T>>) -> bool {
    match rx {
        Some(rx) => rx.changed().await.is_ok(),
        None => std::future::pending().await,
    }
}
