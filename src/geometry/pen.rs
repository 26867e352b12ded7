//! Point pens
//!
//! A point pen receives a contour as an ordered stream of points, each
//! tagged with the type of the segment that ends at it (`None` for
//! off-curve points). Shapes are drawn into a pen and the pen decides what
//! to do with them: record, reverse, build glyph contours or build a
//! `kurbo::BezPath` for display.

use crate::core::errors::{ShapeError, ShapeResult};
use kurbo::Point;

/// Segment type of an on-curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    /// Start of an open contour
    Move,
    Line,
    /// Cubic curve, at most two preceding off-curve points
    Curve,
    /// Quadratic curve with implied on-curve points between off-curves
    QCurve,
}

/// One point as seen by a pen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenPoint {
    pub pt: Point,
    /// `None` for off-curve points
    pub segment_type: Option<SegmentType>,
    pub smooth: bool,
}

impl PenPoint {
    pub fn on_curve(pt: Point, segment_type: SegmentType, smooth: bool) -> Self {
        Self {
            pt,
            segment_type: Some(segment_type),
            smooth,
        }
    }

    pub fn off_curve(pt: Point) -> Self {
        Self {
            pt,
            segment_type: None,
            smooth: false,
        }
    }

    pub fn is_on_curve(&self) -> bool {
        self.segment_type.is_some()
    }
}

/// Receiver of point-based path construction commands
pub trait PointPen {
    fn begin_path(&mut self) -> ShapeResult<()>;

    fn add_point(
        &mut self,
        pt: Point,
        segment_type: Option<SegmentType>,
        smooth: bool,
    ) -> ShapeResult<()>;

    fn end_path(&mut self) -> ShapeResult<()>;

    /// Draw a whole contour in one call
    fn draw_contour(&mut self, points: &[PenPoint]) -> ShapeResult<()> {
        self.begin_path()?;
        for point in points {
            self.add_point(point.pt, point.segment_type, point.smooth)?;
        }
        self.end_path()
    }
}

impl<P: PointPen + ?Sized> PointPen for &mut P {
    fn begin_path(&mut self) -> ShapeResult<()> {
        (**self).begin_path()
    }

    fn add_point(
        &mut self,
        pt: Point,
        segment_type: Option<SegmentType>,
        smooth: bool,
    ) -> ShapeResult<()> {
        (**self).add_point(pt, segment_type, smooth)
    }

    fn end_path(&mut self) -> ShapeResult<()> {
        (**self).end_path()
    }
}

/// Records every contour it receives
#[derive(Debug, Default, Clone)]
pub struct RecordingPointPen {
    contours: Vec<Vec<PenPoint>>,
    current: Option<Vec<PenPoint>>,
}

impl RecordingPointPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contours(&self) -> &[Vec<PenPoint>] {
        &self.contours
    }

    pub fn into_contours(self) -> Vec<Vec<PenPoint>> {
        self.contours
    }

    /// Play the recorded contours into another pen
    pub fn replay(&self, pen: &mut impl PointPen) -> ShapeResult<()> {
        for contour in &self.contours {
            pen.draw_contour(contour)?;
        }
        Ok(())
    }
}

impl PointPen for RecordingPointPen {
    fn begin_path(&mut self) -> ShapeResult<()> {
        if self.current.is_some() {
            return Err(ShapeError::UnfinishedDrawing.into());
        }
        self.current = Some(Vec::new());
        Ok(())
    }

    fn add_point(
        &mut self,
        pt: Point,
        segment_type: Option<SegmentType>,
        smooth: bool,
    ) -> ShapeResult<()> {
        let contour = self.current.as_mut().ok_or(ShapeError::PenPathNotStarted)?;
        contour.push(PenPoint {
            pt,
            segment_type,
            smooth,
        });
        Ok(())
    }

    fn end_path(&mut self) -> ShapeResult<()> {
        let contour = self.current.take().ok_or(ShapeError::PenPathNotStarted)?;
        self.contours.push(contour);
        Ok(())
    }
}

/// Forwards each contour to the wrapped pen with its direction reversed.
///
/// For a closed contour the first point stays first. Segment types move
/// with the segments: the type of an on-curve point describes the segment
/// arriving at it, so after reversal it lands on the on-curve point at the
/// other end of that segment.
pub struct ReverseContourPointPen<P> {
    pen: P,
    current: Option<Vec<PenPoint>>,
}

impl<P: PointPen> ReverseContourPointPen<P> {
    pub fn new(pen: P) -> Self {
        Self { pen, current: None }
    }

    pub fn into_inner(self) -> P {
        self.pen
    }

    fn flush(&mut self, mut contour: Vec<PenPoint>) -> ShapeResult<()> {
        if contour.is_empty() {
            self.pen.begin_path()?;
            return self.pen.end_path();
        }

        let closed = contour[0].segment_type != Some(SegmentType::Move);
        let mut last_segment_type = if closed {
            // Rotate so that after reversing the old first point is first again
            contour.rotate_left(1);
            contour
                .iter()
                .find_map(|point| point.segment_type)
        } else {
            Some(SegmentType::Move)
        };

        contour.reverse();
        if !closed {
            // Open contours start with a move, drop leading off-curves
            let first_on = contour
                .iter()
                .position(PenPoint::is_on_curve)
                .unwrap_or(contour.len());
            contour.drain(..first_on);
        }

        self.pen.begin_path()?;
        for point in contour {
            let segment_type = match point.segment_type {
                Some(next_segment_type) => {
                    let segment_type = last_segment_type;
                    last_segment_type = Some(next_segment_type);
                    segment_type
                }
                None => None,
            };
            self.pen.add_point(point.pt, segment_type, point.smooth)?;
        }
        self.pen.end_path()
    }
}

impl<P: PointPen> PointPen for ReverseContourPointPen<P> {
    fn begin_path(&mut self) -> ShapeResult<()> {
        if self.current.is_some() {
            return Err(ShapeError::UnfinishedDrawing.into());
        }
        self.current = Some(Vec::new());
        Ok(())
    }

    fn add_point(
        &mut self,
        pt: Point,
        segment_type: Option<SegmentType>,
        smooth: bool,
    ) -> ShapeResult<()> {
        let contour = self.current.as_mut().ok_or(ShapeError::PenPathNotStarted)?;
        contour.push(PenPoint {
            pt,
            segment_type,
            smooth,
        });
        Ok(())
    }

    fn end_path(&mut self) -> ShapeResult<()> {
        let contour = self.current.take().ok_or(ShapeError::PenPathNotStarted)?;
        self.flush(contour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x: f64, y: f64) -> PenPoint {
        PenPoint::on_curve(Point::new(x, y), SegmentType::Line, false)
    }

    fn curve(x: f64, y: f64) -> PenPoint {
        PenPoint::on_curve(Point::new(x, y), SegmentType::Curve, true)
    }

    fn off(x: f64, y: f64) -> PenPoint {
        PenPoint::off_curve(Point::new(x, y))
    }

    fn reversed(contour: &[PenPoint]) -> Vec<PenPoint> {
        let mut pen = ReverseContourPointPen::new(RecordingPointPen::new());
        pen.draw_contour(contour).unwrap();
        pen.into_inner().into_contours().remove(0)
    }

    #[test]
    fn recording_pen_requires_begin_path() {
        let mut pen = RecordingPointPen::new();
        let err = pen.add_point(Point::ZERO, None, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ShapeError>(),
            Some(&ShapeError::PenPathNotStarted)
        );
    }

    #[test]
    fn recording_pen_rejects_nested_paths() {
        let mut pen = RecordingPointPen::new();
        pen.begin_path().unwrap();
        assert!(pen.begin_path().is_err());
    }

    #[test]
    fn reversing_a_rectangle_keeps_the_first_point() {
        let rect = [line(0.0, 0.0), line(10.0, 0.0), line(10.0, 5.0), line(0.0, 5.0)];
        let rev = reversed(&rect);
        assert_eq!(
            rev,
            vec![line(0.0, 0.0), line(0.0, 5.0), line(10.0, 5.0), line(10.0, 0.0)]
        );
    }

    #[test]
    fn reversing_moves_segment_types_with_their_segments() {
        // A closed contour mixing a line and a curve
        let contour = [
            line(0.0, 0.0),
            line(100.0, 0.0),
            off(100.0, 50.0),
            off(50.0, 100.0),
            PenPoint::on_curve(Point::new(0.0, 100.0), SegmentType::Curve, false),
        ];
        let rev = reversed(&contour);
        let types: Vec<_> = rev.iter().map(|p| p.segment_type).collect();
        assert_eq!(
            types,
            vec![
                Some(SegmentType::Line),
                Some(SegmentType::Line),
                None,
                None,
                Some(SegmentType::Curve),
            ]
        );
        assert_eq!(rev[1].pt, Point::new(0.0, 100.0));
        assert_eq!(rev[2].pt, Point::new(50.0, 100.0));
    }

    #[test]
    fn reversing_twice_is_identity() {
        let oval = [
            curve(50.0, 0.0),
            off(78.0, 0.0),
            off(100.0, 22.0),
            curve(100.0, 50.0),
            off(100.0, 78.0),
            off(78.0, 100.0),
            curve(50.0, 100.0),
            off(22.0, 100.0),
            off(0.0, 78.0),
            curve(0.0, 50.0),
            off(0.0, 22.0),
            off(22.0, 0.0),
        ];
        assert_eq!(reversed(&reversed(&oval)), oval.to_vec());
        assert_ne!(reversed(&oval), oval.to_vec());
    }

    #[test]
    fn open_contour_reversal_starts_with_a_move() {
        let open = [
            PenPoint::on_curve(Point::new(0.0, 0.0), SegmentType::Move, false),
            line(10.0, 0.0),
            line(10.0, 10.0),
        ];
        let rev = reversed(&open);
        assert_eq!(rev[0].pt, Point::new(10.0, 10.0));
        assert_eq!(rev[0].segment_type, Some(SegmentType::Move));
        assert_eq!(rev[2].segment_type, Some(SegmentType::Line));
    }

    #[test]
    fn recorded_contours_replay_into_another_pen() {
        let mut first = RecordingPointPen::new();
        first
            .draw_contour(&[line(0.0, 0.0), line(1.0, 0.0), line(1.0, 1.0)])
            .unwrap();
        let mut second = RecordingPointPen::new();
        first.replay(&mut second).unwrap();
        assert_eq!(first.contours(), second.contours());
    }
}
