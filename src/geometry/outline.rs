//! Pens that turn point streams into glyph contours and display paths

use crate::core::errors::{ShapeError, ShapeResult};
use crate::core::state::{ContourData, OutlineData, PointData, PointTypeData};
use crate::geometry::pen::{PenPoint, PointPen, SegmentType};
use kurbo::{BezPath, Point};

impl From<Option<SegmentType>> for PointTypeData {
    fn from(segment_type: Option<SegmentType>) -> Self {
        match segment_type {
            None => PointTypeData::OffCurve,
            Some(SegmentType::Move) => PointTypeData::Move,
            Some(SegmentType::Line) => PointTypeData::Line,
            Some(SegmentType::Curve) => PointTypeData::Curve,
            Some(SegmentType::QCurve) => PointTypeData::QCurve,
        }
    }
}

impl From<PointTypeData> for Option<SegmentType> {
    fn from(point_type: PointTypeData) -> Self {
        match point_type {
            PointTypeData::OffCurve => None,
            PointTypeData::Move => Some(SegmentType::Move),
            PointTypeData::Line => Some(SegmentType::Line),
            PointTypeData::Curve => Some(SegmentType::Curve),
            PointTypeData::QCurve => Some(SegmentType::QCurve),
        }
    }
}

impl From<&PointData> for PenPoint {
    fn from(point: &PointData) -> Self {
        PenPoint {
            pt: Point::new(point.x, point.y),
            segment_type: point.point_type.into(),
            smooth: point.smooth,
        }
    }
}

impl ContourData {
    /// Play this contour into a point pen
    pub fn draw_points(&self, pen: &mut impl PointPen) -> ShapeResult<()> {
        let points: Vec<PenPoint> = self.points.iter().map(PenPoint::from).collect();
        pen.draw_contour(&points)
    }

    /// Whether the contour is closed (does not start with a move)
    pub fn is_closed(&self) -> bool {
        self.points
            .first()
            .is_some_and(|point| point.point_type != PointTypeData::Move)
    }
}

#[derive(Debug, Default)]
enum BuilderState {
    #[default]
    Idle,
    Drawing {
        points: Vec<PointData>,
        offcurves: u32,
    },
}

/// Builds glyph contours, rejecting point sequences a UFO can't hold
#[derive(Debug, Default)]
pub struct ContourBuilderPen {
    contours: Vec<ContourData>,
    state: BuilderState,
}

impl ContourBuilderPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pen and return the finished contours.
    ///
    /// Errors when a path has been begun but not ended.
    pub fn finish(self) -> ShapeResult<Vec<ContourData>> {
        match self.state {
            BuilderState::Idle => Ok(self.contours),
            BuilderState::Drawing { .. } => Err(ShapeError::UnfinishedDrawing.into()),
        }
    }
}

impl PointPen for ContourBuilderPen {
    fn begin_path(&mut self) -> ShapeResult<()> {
        match self.state {
            BuilderState::Idle => {
                self.state = BuilderState::Drawing {
                    points: Vec::new(),
                    offcurves: 0,
                };
                Ok(())
            }
            BuilderState::Drawing { .. } => Err(ShapeError::UnfinishedDrawing.into()),
        }
    }

    fn add_point(
        &mut self,
        pt: Point,
        segment_type: Option<SegmentType>,
        smooth: bool,
    ) -> ShapeResult<()> {
        let BuilderState::Drawing { points, offcurves } = &mut self.state else {
            return Err(ShapeError::PenPathNotStarted.into());
        };
        let point_type = PointTypeData::from(segment_type);
        match point_type {
            PointTypeData::Move => {
                if !points.is_empty() {
                    return Err(ShapeError::UnexpectedMove.into());
                }
            }
            PointTypeData::Line => {
                if *offcurves > 0 {
                    return Err(ShapeError::UnexpectedPointAfterOffCurve.into());
                }
            }
            PointTypeData::OffCurve => {
                if smooth {
                    return Err(ShapeError::UnexpectedSmooth.into());
                }
                *offcurves = offcurves.saturating_add(1);
            }
            PointTypeData::QCurve => *offcurves = 0,
            PointTypeData::Curve => {
                if *offcurves > 2 {
                    return Err(ShapeError::TooManyOffCurves.into());
                }
                *offcurves = 0;
            }
        }
        points.push(PointData {
            x: pt.x,
            y: pt.y,
            point_type,
            smooth,
        });
        Ok(())
    }

    fn end_path(&mut self) -> ShapeResult<()> {
        let BuilderState::Drawing {
            points,
            mut offcurves,
        } = std::mem::take(&mut self.state)
        else {
            return Err(ShapeError::PenPathNotStarted.into());
        };

        let contour = ContourData { points };
        if offcurves > 0 {
            if !contour.is_closed() {
                return Err(ShapeError::TrailingOffCurves.into());
            }
            // Trailing off-curves of a closed contour belong to the first segment
            for point in &contour.points {
                match point.point_type {
                    PointTypeData::OffCurve => offcurves = offcurves.saturating_add(1),
                    PointTypeData::QCurve => break,
                    PointTypeData::Curve => {
                        if offcurves > 2 {
                            return Err(ShapeError::TooManyOffCurves.into());
                        }
                        break;
                    }
                    PointTypeData::Line | PointTypeData::Move => {
                        return Err(ShapeError::UnexpectedPointAfterOffCurve.into());
                    }
                }
            }
        }

        if !contour.points.is_empty() {
            self.contours.push(contour);
        }
        Ok(())
    }
}

/// Builds a `kurbo::BezPath` from point contours, for drawing on screen
#[derive(Debug, Default)]
pub struct BezPathPen {
    path: BezPath,
    current: Option<Vec<PenPoint>>,
}

impl BezPathPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn into_path(self) -> BezPath {
        self.path
    }
}

impl PointPen for BezPathPen {
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
        append_contour(&mut self.path, &contour);
        Ok(())
    }
}

/// Build a display path for a whole outline
pub fn outline_to_bezpath(outline: &OutlineData) -> BezPath {
    let mut path = BezPath::new();
    for contour in &outline.contours {
        let points: Vec<PenPoint> = contour.points.iter().map(PenPoint::from).collect();
        append_contour(&mut path, &points);
    }
    path
}

fn append_contour(path: &mut BezPath, points: &[PenPoint]) {
    let Some(first) = points.first() else {
        return;
    };

    if first.segment_type == Some(SegmentType::Move) {
        path.move_to(first.pt);
        append_segments(path, &points[1..]);
        return;
    }

    match points.iter().position(PenPoint::is_on_curve) {
        Some(start) => {
            path.move_to(points[start].pt);
            let rest: Vec<PenPoint> = points[start + 1..]
                .iter()
                .chain(&points[..=start])
                .copied()
                .collect();
            append_segments(path, &rest);
        }
        None => {
            // Only off-curve points: a quadratic loop with implied on-curves
            let n = points.len();
            path.move_to(points[n - 1].pt.midpoint(points[0].pt));
            for i in 0..n {
                let next = points[(i + 1) % n].pt;
                path.quad_to(points[i].pt, points[i].pt.midpoint(next));
            }
        }
    }
    path.close_path();
}

fn append_segments(path: &mut BezPath, points: &[PenPoint]) {
    let mut offcurves: Vec<Point> = Vec::new();
    for point in points {
        let Some(segment_type) = point.segment_type else {
            offcurves.push(point.pt);
            continue;
        };
        match (segment_type, offcurves.as_slice()) {
            (SegmentType::Move | SegmentType::Line, _) | (_, []) => path.line_to(point.pt),
            (SegmentType::Curve, [c]) => path.quad_to(*c, point.pt),
            (SegmentType::Curve, [c1, .., c2]) => path.curve_to(*c1, *c2, point.pt),
            (SegmentType::QCurve, offs) => {
                for pair in offs.windows(2) {
                    path.quad_to(pair[0], pair[0].midpoint(pair[1]));
                }
                if let Some(last) = offs.last() {
                    path.quad_to(*last, point.pt);
                }
            }
        }
        offcurves.clear();
    }
}
