//! Rendering
//!
//! Gizmo drawing of the glyph being edited and of the shape preview,
//! plus the design camera.

pub mod cameras;
pub mod draw;
pub mod glyph_outline;
pub mod preview;

use crate::tools::shapes::ShapeToolSet;
use bevy::prelude::*;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (glyph_outline::draw_current_glyph, preview::draw_shape_preview)
                .after(ShapeToolSet::Preview),
        );
    }
}
