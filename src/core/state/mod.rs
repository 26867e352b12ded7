//! Application state management.
//!
//! Font data lives in plain structures optimized for editing; norad is only
//! used for loading and saving UFO files.

pub mod app_state;
pub mod conversions;
pub mod font_data;

pub use app_state::*;
pub use font_data::*;
