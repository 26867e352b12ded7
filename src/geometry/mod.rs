//! Geometric Primitives and Operations

pub mod outline;
pub mod pen;
pub mod rect;
pub mod shape;

// Re-export commonly used items
pub use outline::{outline_to_bezpath, BezPathPen, ContourBuilderPen};
pub use pen::{PenPoint, PointPen, RecordingPointPen, ReverseContourPointPen, SegmentType};
pub use rect::{DragConstraints, NormalizedRect};
pub use shape::{draw_shape, CurveKind, ShapeKind};
