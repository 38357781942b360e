//! Database upgrade screen.
//!
//! Renders one of four states for the selected project: the grace period
//! after submitting, progress while the job runs, and the completed or
//! failed outcome.

use crate::state::{ReturnState, UpgradingState, ViewState};
use crate::views::elements::{Element, Icon};
use studio_core::upgrade::MAX_STAGE;

const IN_PROGRESS_TITLE: &str = "Upgrading in progress";
const IN_PROGRESS_BODY: &str = "Upgrades will take a few minutes depending on the size of your database. Your project will be offline while it is being upgraded.";

pub const RETURN_BUTTON_ID: &str = "return-to-project";
pub const CONTACT_SUPPORT_BUTTON_ID: &str = "contact-support";

/// Render the upgrade screen for the current state.
pub fn render_upgrading(state: &UpgradingState) -> Element {
    let heading = state
        .project()
        .map(|p| p.name)
        .unwrap_or_default();

    let body = render_body(
        &state.view_state(),
        &state.return_state(),
        state.support_base_path(),
    );

    Element::Column(vec![Element::Heading(heading), body])
}

/// Render the state-specific part of the screen.
pub fn render_body(view: &ViewState, ret: &ReturnState, support_base_path: &str) -> Element {
    match view {
        ViewState::DelayedInit => Element::Column(vec![
            Element::Icon(Icon::Spinner),
            Element::text(IN_PROGRESS_TITLE),
            Element::muted(IN_PROGRESS_BODY),
        ]),
        ViewState::Polling {
            progress,
            percentage,
            started_at,
        } => Element::Column(vec![
            Element::Icon(Icon::Spinner),
            Element::text(IN_PROGRESS_TITLE),
            Element::muted(IN_PROGRESS_BODY),
            Element::ProgressBar {
                value: progress.stage,
                max: MAX_STAGE,
                label_top: format!("{percentage}%"),
                label_bottom: progress.description.clone(),
            },
            Element::Tooltip {
                trigger: Box::new(Element::muted(format!(
                    "Started on: {} (UTC)",
                    started_at.utc
                ))),
                content: started_at.local.clone(),
            },
        ]),
        ViewState::Completed { target_version } => {
            let mut children = vec![
                Element::Icon(Icon::CheckCircle),
                Element::text("Upgrade completed!"),
                Element::muted(format!(
                    "Your project has been successfully upgraded to Postgres {target_version} and is now back online."
                )),
                return_button(ret),
            ];
            children.extend(return_error(ret));
            Element::Column(children)
        }
        ViewState::Failed { support } => {
            let mut children = vec![
                Element::Icon(Icon::AlertCircle),
                Element::text("We ran into an issue while upgrading your project"),
                Element::muted(
                    "Your project is back online and its data is not affected. Please reach out to us via our support form for assistance with the upgrade.",
                ),
                Element::Row(vec![
                    Element::Link {
                        href: support.href(support_base_path),
                        new_tab: true,
                        child: Box::new(Element::Button {
                            id: CONTACT_SUPPORT_BUTTON_ID,
                            label: "Contact support".to_string(),
                            loading: false,
                            disabled: false,
                        }),
                    },
                    return_button(ret),
                ]),
            ];
            children.extend(return_error(ret));
            Element::Column(children)
        }
    }
}

fn return_button(ret: &ReturnState) -> Element {
    Element::Button {
        id: RETURN_BUTTON_ID,
        label: "Return to project".to_string(),
        loading: ret.in_flight,
        disabled: ret.in_flight,
    }
}

fn return_error(ret: &ReturnState) -> Option<Element> {
    ret.error
        .as_ref()
        .map(|e| Element::error(format!("Failed to return to project: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OperationError;
    use chrono::{DateTime, FixedOffset, Utc};
    use studio_core::{DatabaseUpgradeStatus, UpgradeStatus};

    fn derive(status: DatabaseUpgradeStatus, progress: &str, error: Option<&str>) -> ViewState {
        let snapshot = UpgradeStatus {
            status,
            progress: Some(progress.to_string()),
            initiated_at: Some(
                DateTime::parse_from_rfc3339("2024-03-01T12:30:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            ),
            target_version: Some("15".to_string()),
            error: error.map(str::to_string),
        };
        ViewState::derive(true, Some(&snapshot), "abcdefgh", FixedOffset::east_opt(3600))
    }

    #[test]
    fn test_delayed_init_has_no_progress_bar() {
        let tree = render_body(&ViewState::DelayedInit, &ReturnState::default(), "/support/new");
        assert!(tree.contains_text("Upgrading in progress"));
        assert!(tree.progress_bar().is_none());
        assert!(tree.find_button("Return to project").is_none());
    }

    #[test]
    fn test_polling_shows_progress_and_started_at() {
        let view = derive(DatabaseUpgradeStatus::Upgrading, "3_applying_migrations", None);
        let tree = render_body(&view, &ReturnState::default(), "/support/new");

        assert_eq!(
            tree.progress_bar(),
            Some(&Element::ProgressBar {
                value: 3,
                max: 9,
                label_top: "33.33%".to_string(),
                label_bottom: "applying migrations".to_string(),
            })
        );
        assert!(tree.contains_text("Started on: 01 Mar 2024 12:30:00 (UTC)"));
        assert!(tree.contains_text("01 Mar 2024 13:30:00 (+0100)"));
    }

    #[test]
    fn test_final_stage_renders_full_bar() {
        let view = derive(DatabaseUpgradeStatus::Upgrading, "9_finalizing", None);
        let tree = render_body(&view, &ReturnState::default(), "/support/new");
        assert!(tree.contains_text("100.00%"));
    }

    #[test]
    fn test_completed_names_target_version() {
        let view = derive(DatabaseUpgradeStatus::Upgraded, "9_finalizing", None);
        let tree = render_body(&view, &ReturnState::default(), "/support/new");

        assert!(tree.contains_text("Postgres 15"));
        assert!(tree.find_button("Return to project").is_some());
        assert!(tree.progress_bar().is_none());
    }

    #[test]
    fn test_failed_offers_support_and_return() {
        let view = derive(DatabaseUpgradeStatus::Failed, "4_upgrading", Some("timeout"));
        let tree = render_body(&view, &ReturnState::default(), "/support/new");

        assert!(tree.find_button("Contact support").is_some());
        assert!(tree.find_button("Return to project").is_some());

        let links = tree.links();
        assert_eq!(links.len(), 1);
        assert!(links[0].starts_with("/support/new?category=Database_unresponsive&ref=abcdefgh"));
        assert!(links[0].contains("Error%3A%20timeout"));
    }

    #[test]
    fn test_return_button_disabled_while_in_flight() {
        let view = derive(DatabaseUpgradeStatus::Upgraded, "9_finalizing", None);
        let ret = ReturnState {
            in_flight: true,
            error: None,
        };
        let tree = render_body(&view, &ret, "/support/new");

        assert_eq!(
            tree.find_button("Return to project"),
            Some(&Element::Button {
                id: RETURN_BUTTON_ID,
                label: "Return to project".to_string(),
                loading: true,
                disabled: true,
            })
        );
    }

    #[test]
    fn test_return_failure_is_shown() {
        let view = derive(DatabaseUpgradeStatus::Failed, "4_upgrading", Some("timeout"));
        let ret = ReturnState {
            in_flight: false,
            error: Some(OperationError {
                project_ref: "abcdefgh".to_string(),
                message: "bad gateway".to_string(),
            }),
        };
        let tree = render_body(&view, &ret, "/support/new");
        assert!(tree.contains_text("Failed to return to project: bad gateway"));
    }
}
