//! Rectangle and oval outlines
//!
//! Both shapes are drawn as a single closed contour into a point pen,
//! with coordinates rounded to whole design units.

use crate::core::errors::ShapeResult;
use crate::geometry::pen::{PointPen, SegmentType};
use crate::geometry::rect::NormalizedRect;
use kurbo::Point;

/// Handle length ratio for cubic ovals
pub const CUBIC_OVAL_RATIO: f64 = 0.55;
/// Handle length ratio for quadratic ovals
pub const QUADRATIC_OVAL_RATIO: f64 = 0.42;

/// Which shape the tool draws
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapeKind {
    #[default]
    Rect,
    Oval,
}

impl ShapeKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Oval => "oval",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ShapeKind::Rect => ShapeKind::Oval,
            ShapeKind::Oval => ShapeKind::Rect,
        }
    }
}

/// Curve flavor used for ovals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurveKind {
    #[default]
    Cubic,
    Quadratic,
}

impl CurveKind {
    pub fn segment_type(self) -> SegmentType {
        match self {
            CurveKind::Cubic => SegmentType::Curve,
            CurveKind::Quadratic => SegmentType::QCurve,
        }
    }

    pub fn handle_ratio(self) -> f64 {
        match self {
            CurveKind::Cubic => CUBIC_OVAL_RATIO,
            CurveKind::Quadratic => QUADRATIC_OVAL_RATIO,
        }
    }
}

/// Halves round to the even neighbor
fn round_point(x: f64, y: f64) -> Point {
    Point::new(x.round_ties_even(), y.round_ties_even())
}

/// Draw `kind` filling `rect` into `pen`
pub fn draw_shape(
    pen: &mut impl PointPen,
    kind: ShapeKind,
    rect: &NormalizedRect,
    curve: CurveKind,
) -> ShapeResult<()> {
    match kind {
        ShapeKind::Rect => draw_rect(pen, rect),
        ShapeKind::Oval => draw_oval(pen, rect, curve),
    }
}

/// Four corners, counter-clockwise in y-up design space
pub fn draw_rect(pen: &mut impl PointPen, rect: &NormalizedRect) -> ShapeResult<()> {
    let NormalizedRect { x, y, w, h } = *rect;
    let line = Some(SegmentType::Line);

    pen.begin_path()?;
    pen.add_point(round_point(x, y), line, false)?;
    pen.add_point(round_point(x + w, y), line, false)?;
    pen.add_point(round_point(x + w, y + h), line, false)?;
    pen.add_point(round_point(x, y + h), line, false)?;
    pen.end_path()
}

/// Side midpoints joined by four curve segments
pub fn draw_oval(
    pen: &mut impl PointPen,
    rect: &NormalizedRect,
    curve: CurveKind,
) -> ShapeResult<()> {
    let NormalizedRect { x, y, w, h } = *rect;
    let hw = w / 2.0;
    let hh = h / 2.0;
    let r = curve.handle_ratio();
    let on = Some(curve.segment_type());

    pen.begin_path()?;
    pen.add_point(round_point(x + hw, y), on, true)?;
    pen.add_point(round_point(x + hw + hw * r, y), None, false)?;
    pen.add_point(round_point(x + w, y + hh - hh * r), None, false)?;

    pen.add_point(round_point(x + w, y + hh), on, true)?;
    pen.add_point(round_point(x + w, y + hh + hh * r), None, false)?;
    pen.add_point(round_point(x + hw + hw * r, y + h), None, false)?;

    pen.add_point(round_point(x + hw, y + h), on, true)?;
    pen.add_point(round_point(x + hw - hw * r, y + h), None, false)?;
    pen.add_point(round_point(x, y + hh + hh * r), None, false)?;

    pen.add_point(round_point(x, y + hh), on, true)?;
    pen.add_point(round_point(x, y + hh - hh * r), None, false)?;
    pen.add_point(round_point(x + hw - hw * r, y), None, false)?;
    pen.end_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::pen::{PenPoint, RecordingPointPen};

    fn record(kind: ShapeKind, rect: NormalizedRect, curve: CurveKind) -> Vec<PenPoint> {
        let mut pen = RecordingPointPen::new();
        draw_shape(&mut pen, kind, &rect, curve).unwrap();
        let mut contours = pen.into_contours();
        assert_eq!(contours.len(), 1);
        contours.remove(0)
    }

    #[test]
    fn rect_emits_four_line_corners() {
        let rect = NormalizedRect::new(0.0, 0.0, 100.0, 50.0);
        let points = record(ShapeKind::Rect, rect, CurveKind::Cubic);
        let coords: Vec<_> = points.iter().map(|p| (p.pt.x, p.pt.y)).collect();
        assert_eq!(coords, vec![(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)]);
        assert!(points
            .iter()
            .all(|p| p.segment_type == Some(SegmentType::Line) && !p.smooth));
    }

    #[test]
    fn rect_emission_is_repeatable() {
        let rect = NormalizedRect::new(-12.4, 7.6, 33.3, 18.9);
        assert_eq!(
            record(ShapeKind::Rect, rect, CurveKind::Cubic),
            record(ShapeKind::Rect, rect, CurveKind::Cubic)
        );
    }

    #[test]
    fn rect_coordinates_are_rounded() {
        let rect = NormalizedRect::new(0.4, 0.6, 10.0, 10.0);
        let points = record(ShapeKind::Rect, rect, CurveKind::Cubic);
        assert_eq!(points[0].pt, Point::new(0.0, 1.0));
        assert_eq!(points[2].pt, Point::new(10.0, 11.0));
    }

    #[test]
    fn odd_sized_oval_rounds_halves_to_even() {
        let on_curve = |rect: NormalizedRect| -> Vec<Point> {
            record(ShapeKind::Oval, rect, CurveKind::Cubic)
                .iter()
                .filter(|p| p.is_on_curve())
                .map(|p| p.pt)
                .collect()
        };
        assert_eq!(
            on_curve(NormalizedRect::new(0.0, 0.0, 101.0, 101.0)),
            vec![
                Point::new(50.0, 0.0),
                Point::new(101.0, 50.0),
                Point::new(50.0, 101.0),
                Point::new(0.0, 50.0),
            ]
        );
        assert_eq!(
            on_curve(NormalizedRect::new(1.0, 1.0, 101.0, 101.0))[0],
            Point::new(52.0, 1.0)
        );
    }

    #[test]
    fn cubic_oval_has_twelve_points_and_four_smooth_curves() {
        let rect = NormalizedRect::new(0.0, 0.0, 200.0, 120.0);
        let points = record(ShapeKind::Oval, rect, CurveKind::Cubic);
        assert_eq!(points.len(), 12);
        let on_curve: Vec<_> = points.iter().filter(|p| p.is_on_curve()).collect();
        assert_eq!(on_curve.len(), 4);
        assert!(on_curve
            .iter()
            .all(|p| p.smooth && p.segment_type == Some(SegmentType::Curve)));
        assert_eq!(
            on_curve.iter().map(|p| p.pt).collect::<Vec<_>>(),
            vec![
                Point::new(100.0, 0.0),
                Point::new(200.0, 60.0),
                Point::new(100.0, 120.0),
                Point::new(0.0, 60.0),
            ]
        );
        // 0.55 of the half width / half height
        assert_eq!(points[1].pt, Point::new(155.0, 0.0));
        assert_eq!(points[2].pt, Point::new(200.0, 27.0));
        assert_eq!(points[11].pt, Point::new(45.0, 0.0));
    }

    #[test]
    fn quadratic_oval_uses_shorter_handles() {
        let rect = NormalizedRect::new(0.0, 0.0, 200.0, 120.0);
        let points = record(ShapeKind::Oval, rect, CurveKind::Quadratic);
        assert_eq!(points.len(), 12);
        assert_eq!(points.iter().filter(|p| p.is_on_curve()).count(), 4);
        assert!(points
            .iter()
            .filter(|p| p.is_on_curve())
            .all(|p| p.segment_type == Some(SegmentType::QCurve)));
        assert_eq!(points[1].pt, Point::new(142.0, 0.0));
        assert_eq!(points[2].pt, Point::new(200.0, 35.0));
    }

    #[test]
    fn off_curve_points_are_never_smooth() {
        let rect = NormalizedRect::new(3.0, 5.0, 41.0, 77.0);
        for curve in [CurveKind::Cubic, CurveKind::Quadratic] {
            let points = record(ShapeKind::Oval, rect, curve);
            assert!(points.iter().filter(|p| !p.is_on_curve()).all(|p| !p.smooth));
        }
    }

    #[test]
    fn shape_kind_toggles() {
        assert_eq!(ShapeKind::Rect.toggled(), ShapeKind::Oval);
        assert_eq!(ShapeKind::Oval.toggled(), ShapeKind::Rect);
        assert_eq!(ShapeKind::default(), ShapeKind::Rect);
    }
}
