//! Database upgrade status: wire types, progress parsing, display
//! formatting, the support request link and the status poller.

pub mod errors;
pub mod poller;
pub mod progress;
pub mod support;
pub mod timestamps;
pub mod types;

pub use errors::UpgradeStatusError;
pub use poller::{StatusPoller, UpgradeStatusSource};
pub use progress::{MAX_STAGE, UpgradeProgress};
pub use support::{SupportCategory, SupportLink};
pub use timestamps::InitiatedAtLabels;
pub use types::{DatabaseUpgradeStatus, UpgradeStatus, UpgradeStatusResponse};
