//! Process lifecycle events shared by every entry point.

use tracing::{error, info};

pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = command
    );
}

/// `error` carries the failure that ends the process, if any.
pub fn log_app_shutdown(error: Option<&dyn std::fmt::Display>) {
    match error {
        None => info!(event = "core.app.shutdown_started"),
        Some(e) => error!(event = "core.app.shutdown_started", error = %e),
    }
}
