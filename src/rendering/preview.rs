//! Live preview of the shape being dragged

use crate::core::settings::ShapeToolSettings;
use crate::rendering::cameras::DesignCamera;
use crate::rendering::draw::{draw_dashed_path, draw_path, draw_star};
use crate::tools::shapes::ShapePreviewState;
use bevy::prelude::*;

/// Design units per screen pixel of the design camera
pub fn camera_scale(projection: &Projection) -> f32 {
    match projection {
        Projection::Orthographic(ortho) => ortho.scale,
        _ => 1.0,
    }
}

/// System stroking the preview contour and the center marker
pub fn draw_shape_preview(
    mut gizmos: Gizmos,
    preview: Res<ShapePreviewState>,
    settings: Res<ShapeToolSettings>,
    camera: Query<&Projection, With<DesignCamera>>,
) {
    let Some(preview) = &preview.0 else {
        return;
    };
    // Dash lengths and marker size are in screen pixels
    let scale = camera.single().map_or(1.0, camera_scale);
    let color = settings.preview_color(preview.reversed);

    if preview.is_dashed() {
        let [dash, gap] = settings.quadratic_dash;
        draw_dashed_path(&mut gizmos, &preview.path, dash * scale, gap * scale, color);
    } else {
        draw_path(&mut gizmos, &preview.path, color);
    }

    if let Some(origin) = preview.origin_marker {
        let center = Vec2::new(origin.x as f32, origin.y as f32);
        draw_star(&mut gizmos, center, settings.origin_marker_size * scale, color);
    }
}
