//! View state for studio-ui.
//!
//! The main type is `UpgradingState`, which owns the init gate, the status
//! poller and the "Return to project" action. Internal modules are
//! implementation details.

pub mod errors;
pub mod init_gate;
pub mod return_action;
pub mod upgrade_state;
pub mod view_state;

pub use errors::OperationError;
pub use init_gate::InitGate;
pub use return_action::{ReturnState, ReturnToProject};
pub use upgrade_state::{UpgradeViewConfig, UpgradeViewDeps, UpgradeViewProps, UpgradingState};
pub use view_state::{ViewKind, ViewState};
