pub mod undo;
pub mod undo_plugin;

// Re-export important types and plugins
pub use undo_plugin::{UndoPlugin, UndoStateResource};
