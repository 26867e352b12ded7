//! User interface
//!
//! On-screen text outside the zoomable design space.

pub mod status_pane;
pub mod theme;

pub use status_pane::StatusPanePlugin;
