//! Glyph outline rendering
//!
//! Draws the selected glyph every frame: its outline, on-curve and
//! off-curve points with their handles, and the advance box.

use crate::core::state::{AppState, ContourData, GlyphData, OutlineData};
use crate::geometry::outline_to_bezpath;
use crate::rendering::draw::draw_path;
use crate::ui::theme::{
    HANDLE_LINE_COLOR, METRICS_GUIDE_COLOR, OFF_CURVE_INNER_CIRCLE_RATIO, OFF_CURVE_POINT_COLOR,
    OFF_CURVE_POINT_RADIUS, ON_CURVE_INNER_CIRCLE_RATIO, ON_CURVE_POINT_COLOR,
    ON_CURVE_POINT_RADIUS, PATH_LINE_COLOR,
};
use bevy::prelude::*;

/// Fallback height of the advance box when the glyph has none
const DEFAULT_ADVANCE_HEIGHT: f32 = 1000.0;

/// System drawing the glyph the shapes tool draws into
pub fn draw_current_glyph(mut gizmos: Gizmos, app_state: Res<AppState>) {
    let Some(glyph) = app_state.current_glyph() else {
        return;
    };
    draw_metrics(&mut gizmos, glyph);
    if let Some(outline) = &glyph.outline {
        draw_glyph_outline(&mut gizmos, outline);
        draw_glyph_points(&mut gizmos, outline);
    }
}

fn draw_metrics(gizmos: &mut Gizmos, glyph: &GlyphData) {
    let width = glyph.advance_width as f32;
    let height = glyph
        .advance_height
        .filter(|height| *height > 0.0)
        .map_or(DEFAULT_ADVANCE_HEIGHT, |height| height as f32);
    gizmos.rect_2d(
        Isometry2d::from_translation(Vec2::new(width / 2.0, height / 2.0)),
        Vec2::new(width, height),
        METRICS_GUIDE_COLOR,
    );
}

/// Draw the outline path
pub fn draw_glyph_outline(gizmos: &mut Gizmos, outline: &OutlineData) {
    draw_path(gizmos, &outline_to_bezpath(outline), PATH_LINE_COLOR);
}

/// Draw on-curve points as squares and off-curve points as circles
pub fn draw_glyph_points(gizmos: &mut Gizmos, outline: &OutlineData) {
    for contour in &outline.contours {
        draw_handles(gizmos, contour);
        for point in &contour.points {
            let pos = Vec2::new(point.x as f32, point.y as f32);
            if point.point_type.is_on_curve() {
                let size = ON_CURVE_POINT_RADIUS;
                gizmos.rect_2d(
                    Isometry2d::from_translation(pos),
                    Vec2::splat(size * 2.0),
                    ON_CURVE_POINT_COLOR,
                );
                if point.smooth {
                    gizmos.circle_2d(pos, size * ON_CURVE_INNER_CIRCLE_RATIO, ON_CURVE_POINT_COLOR);
                }
            } else {
                let size = OFF_CURVE_POINT_RADIUS;
                gizmos.circle_2d(pos, size, OFF_CURVE_POINT_COLOR);
                gizmos.circle_2d(pos, size * OFF_CURVE_INNER_CIRCLE_RATIO, OFF_CURVE_POINT_COLOR);
            }
        }
    }
}

/// Lines from each off-curve point to the on-curve neighbor it belongs to
fn draw_handles(gizmos: &mut Gizmos, contour: &ContourData) {
    let points = &contour.points;
    let n = points.len();
    if n < 2 {
        return;
    }
    let closed = contour.is_closed();
    for (i, point) in points.iter().enumerate() {
        if !point.point_type.is_on_curve() {
            continue;
        }
        let pos = Vec2::new(point.x as f32, point.y as f32);
        let neighbors = [(i + n - 1) % n, (i + 1) % n];
        for (j, &neighbor) in neighbors.iter().enumerate() {
            let wraps = (j == 0 && i == 0) || (j == 1 && i == n - 1);
            if wraps && !closed {
                continue;
            }
            let other = &points[neighbor];
            if !other.point_type.is_on_curve() {
                gizmos.line_2d(pos, Vec2::new(other.x as f32, other.y as f32), HANDLE_LINE_COLOR);
            }
        }
    }
}
