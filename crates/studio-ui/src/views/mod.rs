//! Renderers for studio-ui.

pub mod elements;
pub mod upgrading;

pub use elements::{Element, Icon, TextStyle};
pub use upgrading::{render_body, render_upgrading};
