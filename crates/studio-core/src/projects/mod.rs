//! Shared project state and the project detail endpoint.

pub mod errors;
pub mod store;
pub mod types;

pub use errors::ProjectError;
pub use store::{ProjectDetailSource, ProjectStore};
pub use types::{ProjectDetail, ProjectStatus};
