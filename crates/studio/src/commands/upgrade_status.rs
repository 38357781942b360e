use std::path::PathBuf;
use std::sync::Arc;

use clap::ArgMatches;
use tracing::{debug, info, warn};

use studio_core::ProjectStore;
use studio_ui::{
    UpgradeViewConfig, UpgradeViewDeps, UpgradeViewProps, UpgradingState, render_upgrading,
};

use super::{load_config_with_warning, runtime};
use crate::sources::{FileProjectSource, FileStatusSource};

pub(crate) fn handle_upgrade_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let project_ref = matches
        .get_one::<String>("project")
        .ok_or("Project argument is required")?
        .clone();
    let status_file = matches
        .get_one::<String>("status-file")
        .map(PathBuf::from)
        .ok_or("Status file argument is required")?;
    let project_file = matches.get_one::<String>("project-file").map(PathBuf::from);
    let just_initiated = matches.get_flag("just-initiated");
    let once = matches.get_flag("once");

    let config = load_config_with_warning();

    info!(
        event = "cli.upgrade_status_started",
        project_ref = %project_ref,
        just_initiated = just_initiated
    );

    let project_source = Arc::new(FileProjectSource::new(project_file));
    let selected = match project_source.load_blocking(&project_ref) {
        Ok(project) => Some(project),
        Err(e) => {
            warn!(
                event = "cli.upgrade_status.project_unavailable",
                project_ref = %project_ref,
                error = %e
            );
            None
        }
    };

    let deps = UpgradeViewDeps {
        status_source: Arc::new(FileStatusSource::new(status_file)),
        project_source,
        projects: ProjectStore::new(selected),
    };
    let props = UpgradeViewProps {
        project_ref: project_ref.clone(),
        just_initiated,
    };
    let view_config = UpgradeViewConfig::from(&config);
    let first_poll_wait = view_config.poll_interval;

    runtime()?.block_on(async move {
        let mut view = UpgradingState::mount(props, deps, view_config);
        let mut last_frame = String::new();

        // A single frame should show a fetched snapshot, not the pre-fetch state.
        if once
            && view.is_polling()
            && tokio::time::timeout(first_poll_wait, view.changed())
                .await
                .is_err()
        {
            debug!(
                event = "cli.upgrade_status.first_poll_timed_out",
                project_ref = %project_ref,
                waited_ms = first_poll_wait.as_millis() as u64
            );
        }

        loop {
            let frame = render_upgrading(&view).to_string();
            if frame != last_frame {
                println!("{frame}");
                last_frame = frame;
            }

            let state = view.view_state();
            if once || state.is_terminal() {
                info!(
                    event = "cli.upgrade_status_completed",
                    project_ref = %project_ref,
                    view = ?state.kind()
                );
                break;
            }

            view.changed().await;
        }
    });

    Ok(())
}
