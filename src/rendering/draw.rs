//! Gizmo drawing helpers shared by the glyph and preview renderers

use bevy::prelude::*;
use kurbo::{BezPath, PathEl, Point};

/// Flattening tolerance in design units
pub const FLATTEN_TOLERANCE: f64 = 0.25;

fn to_vec2(point: Point) -> Vec2 {
    Vec2::new(point.x as f32, point.y as f32)
}

/// Flatten a path into polylines, one per subpath; closed subpaths end
/// at their first point.
pub fn flatten_to_polylines(path: &BezPath) -> Vec<Vec<Vec2>> {
    let mut polylines: Vec<Vec<Vec2>> = Vec::new();
    path.flatten(FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => polylines.push(vec![to_vec2(p)]),
        PathEl::LineTo(p) => {
            if let Some(line) = polylines.last_mut() {
                line.push(to_vec2(p));
            }
        }
        PathEl::ClosePath => {
            if let Some(line) = polylines.last_mut() {
                if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
                    if first != last {
                        line.push(first);
                    }
                }
            }
        }
        // flatten only emits the elements above
        _ => {}
    });
    polylines
}

/// Draw a path as solid lines
pub fn draw_path(gizmos: &mut Gizmos, path: &BezPath, color: Color) {
    for line in flatten_to_polylines(path) {
        gizmos.linestrip_2d(line, color);
    }
}

/// Draw a path dashed; the pattern continues across segment joins
pub fn draw_dashed_path(
    gizmos: &mut Gizmos,
    path: &BezPath,
    dash_length: f32,
    gap_length: f32,
    color: Color,
) {
    if dash_length <= 0.0 {
        draw_path(gizmos, path, color);
        return;
    }
    for line in flatten_to_polylines(path) {
        for (start, end) in dashes(&line, dash_length, gap_length) {
            gizmos.line_2d(start, end, color);
        }
    }
}

/// Split a polyline into dash segments
pub fn dashes(line: &[Vec2], dash_length: f32, gap_length: f32) -> Vec<(Vec2, Vec2)> {
    let period = dash_length + gap_length.max(0.0);
    let mut result = Vec::new();
    // Distance into the current dash period
    let mut phase = 0.0;

    for pair in line.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let length = start.distance(end);
        if length <= f32::EPSILON {
            continue;
        }
        let direction = (end - start) / length;
        let mut pos = 0.0;
        while pos < length {
            let step = if phase < dash_length {
                let step = (dash_length - phase).min(length - pos);
                result.push((start + direction * pos, start + direction * (pos + step)));
                step
            } else {
                (period - phase).min(length - pos)
            };
            pos += step;
            phase = (phase + step) % period;
        }
    }
    result
}

/// An eight-pointed star outline centered on `center`
pub fn draw_star(gizmos: &mut Gizmos, center: Vec2, size: f32, color: Color) {
    const POINTS: usize = 8;
    let outer = size / 2.0;
    let inner = outer * 0.4;
    let vertices: Vec<Vec2> = (0..=POINTS * 2)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::PI / POINTS as f32;
            let radius = if i % 2 == 0 { outer } else { inner };
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    gizmos.linestrip_2d(vertices, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use kurbo::Shape;

    #[test]
    fn rectangle_flattens_to_closed_polyline() {
        let path = Rect::new(0.0, 0.0, 10.0, 5.0).to_path(0.1);
        let lines = flatten_to_polylines(&path);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].first(), lines[0].last());
        assert_eq!(lines[0].len(), 5);
    }

    #[test]
    fn dashes_alternate_along_the_line() {
        let line = [Vec2::ZERO, Vec2::new(16.0, 0.0)];
        let segments = dashes(&line, 5.0, 3.0);
        assert_eq!(
            segments,
            vec![
                (Vec2::ZERO, Vec2::new(5.0, 0.0)),
                (Vec2::new(8.0, 0.0), Vec2::new(13.0, 0.0)),
            ]
        );
    }

    #[test]
    fn dash_pattern_continues_around_corners() {
        let line = [Vec2::ZERO, Vec2::new(3.0, 0.0), Vec2::new(3.0, 4.0)];
        let segments = dashes(&line, 5.0, 3.0);
        assert_eq!(segments[0], (Vec2::ZERO, Vec2::new(3.0, 0.0)));
        assert_eq!(segments[1], (Vec2::new(3.0, 0.0), Vec2::new(3.0, 2.0)));
        assert_eq!(segments.len(), 2);
    }
}
