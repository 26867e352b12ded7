//! Rectangle and oval drawing for UFO glyphs, made with the Bevy game engine.

pub mod core;
pub mod editing;
pub mod geometry;
pub mod rendering;
pub mod tools;
pub mod ui;
pub mod utils;

pub use crate::core::{create_app, CliArgs};
