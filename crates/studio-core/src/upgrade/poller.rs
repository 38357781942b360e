//! Periodic fetch of the upgrade status.
//!
//! The poller owns interval and cancellation; consumers only read the latest
//! snapshot from a `watch` channel.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::errors::UpgradeStatusError;
use super::types::UpgradeStatus;

/// Remote upgrade status endpoint.
#[async_trait]
pub trait UpgradeStatusSource: Send + Sync {
    /// Latest status for `project_ref`, or `None` while no job record exists.
    async fn fetch_upgrade_status(
        &self,
        project_ref: &str,
    ) -> Result<Option<UpgradeStatus>, UpgradeStatusError>;
}

/// Shortest accepted poll interval; smaller values are raised to this.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Handle to a running poll loop. Dropping it stops polling.
pub struct StatusPoller {
    rx: watch::Receiver<Option<UpgradeStatus>>,
    task: JoinHandle<()>,
}

impl StatusPoller {
    /// Fetch immediately, then every `interval`, until a terminal status is seen.
    ///
    /// Failed fetches are logged and keep the previous snapshot.
    pub fn spawn(
        source: Arc<dyn UpgradeStatusSource>,
        project_ref: String,
        interval: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(None);

        if interval < MIN_POLL_INTERVAL {
            tracing::warn!(
                event = "core.upgrade_poll.interval_clamped",
                project_ref = %project_ref,
                requested_ms = interval.as_millis() as u64,
                min_ms = MIN_POLL_INTERVAL.as_millis() as u64
            );
        }
        let interval = interval.max(MIN_POLL_INTERVAL);

        let task = tokio::spawn(async move {
            tracing::info!(
                event = "core.upgrade_poll.started",
                project_ref = %project_ref,
                interval_ms = interval.as_millis() as u64
            );

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                match source.fetch_upgrade_status(&project_ref).await {
                    Ok(snapshot) => {
                        let terminal = snapshot
                            .as_ref()
                            .is_some_and(|s| s.status.is_terminal());
                        tracing::debug!(
                            event = "core.upgrade_poll.tick",
                            project_ref = %project_ref,
                            status = ?snapshot.as_ref().map(|s| s.status)
                        );

                        if tx.send(snapshot).is_err() {
                            tracing::debug!(
                                event = "core.upgrade_poll.stopped",
                                project_ref = %project_ref,
                                reason = "no subscribers"
                            );
                            return;
                        }

                        if terminal {
                            tracing::info!(
                                event = "core.upgrade_poll.completed",
                                project_ref = %project_ref
                            );
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(
                            event = "core.upgrade_poll.fetch_failed",
                            project_ref = %project_ref,
                            error = %e
                        );
                    }
                }
            }
        });

        Self { rx, task }
    }

    /// Receiver for the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Option<UpgradeStatus>> {
        self.rx.clone()
    }

    /// Latest snapshot, `None` until the first successful fetch returns a record.
    pub fn latest(&self) -> Option<UpgradeStatus> {
        self.rx.borrow().clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
