//! Core application functionality
//!
//! Application setup, command line handling, settings, errors, the font
//! state being edited and cursor tracking.

pub mod app;
pub mod cli;
pub mod cursor;
pub mod errors;
pub mod settings;
pub mod state;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use cursor::{CursorInfo, CursorPlugin};
pub use settings::ShapeToolSettings;
pub use state::AppState;
