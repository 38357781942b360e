use chrono::{FixedOffset, Local};
use studio_core::upgrade::{InitiatedAtLabels, SupportLink, UpgradeProgress};
use studio_core::{DatabaseUpgradeStatus, UpgradeStatus};

/// Discriminant of [`ViewState`], handy for comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    DelayedInit,
    Polling,
    Completed,
    Failed,
}

/// What the upgrade screen shows. Exactly one is active at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// Grace period after submitting the upgrade; nothing is fetched yet.
    DelayedInit,
    /// Job pending or running, or no status received yet.
    Polling {
        progress: UpgradeProgress,
        percentage: String,
        started_at: InitiatedAtLabels,
    },
    Completed {
        target_version: String,
    },
    Failed {
        support: SupportLink,
    },
}

impl ViewState {
    /// Derive the screen from the gate and the latest status snapshot.
    ///
    /// `zone` is the viewer's zone for the tooltip timestamp; `None` uses the
    /// machine's local zone.
    pub fn derive(
        initialized: bool,
        snapshot: Option<&UpgradeStatus>,
        project_ref: &str,
        zone: Option<FixedOffset>,
    ) -> Self {
        if !initialized {
            return ViewState::DelayedInit;
        }

        match snapshot {
            Some(status) if status.status == DatabaseUpgradeStatus::Upgraded => {
                ViewState::Completed {
                    target_version: status.target_version.clone().unwrap_or_default(),
                }
            }
            Some(status) if status.status == DatabaseUpgradeStatus::Failed => ViewState::Failed {
                support: SupportLink::for_failed_upgrade(project_ref, status),
            },
            _ => {
                let progress = UpgradeProgress::parse(snapshot.and_then(|s| s.progress.as_deref()));
                let initiated_at = snapshot.and_then(|s| s.initiated_at);
                let started_at = match zone {
                    Some(zone) => InitiatedAtLabels::in_zone(initiated_at, &zone),
                    None => InitiatedAtLabels::in_zone(initiated_at, &Local),
                };
                ViewState::Polling {
                    percentage: progress.percentage(),
                    progress,
                    started_at,
                }
            }
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            ViewState::DelayedInit => ViewKind::DelayedInit,
            ViewState::Polling { .. } => ViewKind::Polling,
            ViewState::Completed { .. } => ViewKind::Completed,
            ViewState::Failed { .. } => ViewKind::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ViewState::Completed { .. } | ViewState::Failed { .. })
    }
}
