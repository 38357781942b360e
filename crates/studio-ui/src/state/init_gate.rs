//! Grace period before the upgrade screen starts polling.
//!
//! When the user lands here straight after submitting an upgrade, the
//! backend job record may not exist yet. The gate stays closed for a short
//! delay so the screen does not flash an empty status.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// One-shot `initialized` flag.
///
/// Opens at most once. The timer is aborted when the gate is dropped, so no
/// write happens after teardown.
pub struct InitGate {
    rx: watch::Receiver<bool>,
    timer: Option<JoinHandle<()>>,
}

impl InitGate {
    /// Open immediately unless `just_initiated`, in which case open after `delay`.
    pub fn start(just_initiated: bool, delay: Duration) -> Self {
        if !just_initiated {
            let (_tx, rx) = watch::channel(true);
            return Self { rx, timer: None };
        }

        let (tx, rx) = watch::channel(false);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tx.send_replace(true);
            tracing::info!(
                event = "ui.upgrade_view.initialized",
                delay_ms = delay.as_millis() as u64
            );
        });

        Self {
            rx,
            timer: Some(timer),
        }
    }

    pub fn is_initialized(&self) -> bool {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }
}

impl Drop for InitGate {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            if !timer.is_finished() {
                tracing::debug!(event = "ui.upgrade_view.init_timer_cancelled");
            }
            timer.abort();
        }
    }
}
