//! # Tool Logic (`/src/tools/`)
//!
//! Behavior of the editing tools: input handling, tool state and glyph
//! modification. Each tool lives in its own module and registers its
//! systems through a plugin.
//!
//! - **`shapes`**: rectangles and ovals, by drag or by numeric entry

pub mod shapes;

pub use shapes::ShapesToolPlugin;
