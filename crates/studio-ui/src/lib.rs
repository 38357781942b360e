//! studio-ui: view state for the Studio dashboard
//!
//! The database upgrade screen as a state machine plus a toolkit-neutral
//! renderer. Collaborators (status endpoint, project endpoint, shared
//! project store) are injected through [`state::UpgradeViewDeps`].

pub mod state;
pub mod views;

pub use state::{
    UpgradeViewConfig, UpgradeViewDeps, UpgradeViewProps, UpgradingState, ViewKind, ViewState,
};
pub use views::{Element, render_upgrading};
