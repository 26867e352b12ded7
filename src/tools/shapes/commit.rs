//! Drawing a finished shape into a glyph

use crate::core::errors::{validate_finite_coords, ShapeResult};
use crate::core::state::{ContourData, GlyphData};
use crate::editing::undo::{GlyphEdit, UndoGroup, UndoState};
use crate::geometry::{draw_shape, ContourBuilderPen, ReverseContourPointPen};
use crate::tools::shapes::gesture::ShapeRequest;

/// Undo label of every shape drawn by the tool
pub const UNDO_LABEL: &str = "Drawing Shapes";

/// Contours for `request`, reversed when asked
pub fn build_contours(request: &ShapeRequest) -> ShapeResult<Vec<ContourData>> {
    let rect = &request.rect;
    validate_finite_coords(rect.x, rect.y)?;
    validate_finite_coords(rect.w, rect.h)?;

    let mut builder = ContourBuilderPen::new();
    if request.reverse {
        let mut pen = ReverseContourPointPen::new(&mut builder);
        draw_shape(&mut pen, request.kind, rect, request.curve)?;
    } else {
        draw_shape(&mut builder, request.kind, rect, request.curve)?;
    }
    builder.finish()
}

/// Append the shape to `glyph` as one undoable edit.
///
/// Returns the number of contours added.
pub fn draw_shape_in_glyph(
    glyph: &mut GlyphData,
    request: &ShapeRequest,
    undos: &mut UndoState<GlyphEdit>,
) -> ShapeResult<usize> {
    let mut group = UndoGroup::prepare(UNDO_LABEL, glyph, undos);
    let contours = build_contours(request)?;
    let count = contours.len();
    group.glyph().append_contours(contours);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::PointTypeData;
    use crate::geometry::{CurveKind, NormalizedRect, ShapeKind};

    fn request(kind: ShapeKind, curve: CurveKind, reverse: bool) -> ShapeRequest {
        ShapeRequest {
            kind,
            rect: NormalizedRect::new(0.0, 0.0, 200.0, 120.0),
            curve,
            reverse,
        }
    }

    #[test]
    fn commit_appends_one_contour_and_records_undo() {
        let mut glyph = GlyphData::new("a");
        let mut undos = UndoState::new();
        let added = draw_shape_in_glyph(
            &mut glyph,
            &request(ShapeKind::Rect, CurveKind::Cubic, false),
            &mut undos,
        )
        .unwrap();

        assert_eq!(added, 1);
        assert_eq!(glyph.contour_count(), 1);
        assert_eq!(undos.len(), 1);

        let edit = undos.undo().unwrap();
        assert_eq!(edit.label, UNDO_LABEL);
        assert_eq!(edit.before, None);
    }

    #[test]
    fn shapes_accumulate_in_the_glyph() {
        let mut glyph = GlyphData::new("O");
        let mut undos = UndoState::new();
        for curve in [CurveKind::Cubic, CurveKind::Quadratic] {
            draw_shape_in_glyph(&mut glyph, &request(ShapeKind::Oval, curve, false), &mut undos)
                .unwrap();
        }
        assert_eq!(glyph.contour_count(), 2);
        assert_eq!(undos.len(), 2);

        let outline = glyph.outline.as_ref().unwrap();
        assert_eq!(outline.contours[0].points[0].point_type, PointTypeData::Curve);
        assert_eq!(outline.contours[1].points[0].point_type, PointTypeData::QCurve);
        assert!(outline.contours[1].points[0].smooth);
    }

    #[test]
    fn reversed_oval_keeps_start_and_flips_direction() {
        let forward = build_contours(&request(ShapeKind::Oval, CurveKind::Cubic, false)).unwrap();
        let reversed = build_contours(&request(ShapeKind::Oval, CurveKind::Cubic, true)).unwrap();
        let forward = &forward[0].points;
        let reversed = &reversed[0].points;

        assert_eq!(reversed.len(), 12);
        assert_eq!((reversed[0].x, reversed[0].y), (forward[0].x, forward[0].y));
        assert_eq!((reversed[1].x, reversed[1].y), (forward[11].x, forward[11].y));
        assert_eq!(
            reversed.iter().filter(|p| p.point_type.is_on_curve()).count(),
            4
        );
    }

    #[test]
    fn non_finite_rect_is_rejected_without_undo_entry() {
        let mut glyph = GlyphData::new("a");
        let mut undos = UndoState::new();
        let mut bad = request(ShapeKind::Rect, CurveKind::Cubic, false);
        bad.rect.w = f64::NAN;
        assert!(draw_shape_in_glyph(&mut glyph, &bad, &mut undos).is_err());
        assert_eq!(glyph.contour_count(), 0);
        assert!(undos.is_empty());
    }
}
