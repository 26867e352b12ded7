//! Drag rectangle normalization
//!
//! Turns the two points of a drag gesture into an axis-aligned rectangle
//! with non-negative width and height. The sign of the drag is folded into
//! the origin so the rectangle always describes the same area no matter
//! which way the user dragged.

use kurbo::Point;

/// How the drag points are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragConstraints {
    /// Force width and height to the same magnitude (square / circle)
    pub constrain_square: bool,
    /// Treat the press point as the center instead of a corner
    pub center_origin: bool,
}

/// An axis-aligned rectangle in design units.
///
/// Drags always give non-negative `w` and `h`; typed sizes are kept as entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl NormalizedRect {
    /// Build a rectangle from explicit values, folding negative sizes
    /// into the origin.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        let mut rect = Self { x, y, w, h };
        rect.fold_sign();
        rect
    }

    /// Keep the values as typed; a negative size draws from `(x, y)`
    /// toward the other side.
    pub fn as_entered(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Compute the rectangle described by a drag from `start` to `end`.
    pub fn from_drag(start: Point, end: Point, constraints: DragConstraints) -> Self {
        let mut x = start.x;
        let mut y = start.y;
        let mut w = end.x - start.x;
        let mut h = end.y - start.y;

        if constraints.constrain_square {
            // On a tie the height dominates, which leaves the width's
            // magnitude unchanged and only matters for the zero-sign default.
            if w.abs() > h.abs() {
                h = w.abs() * sign_or_positive(h);
            } else {
                w = h.abs() * sign_or_positive(w);
            }
        }

        if constraints.center_origin {
            x -= w;
            y -= h;
            w *= 2.0;
            h *= 2.0;
        }

        let mut rect = Self { x, y, w, h };
        rect.fold_sign();
        rect
    }

    fn fold_sign(&mut self) {
        if self.w < 0.0 {
            self.w = self.w.abs();
            self.x -= self.w;
        }
        if self.h < 0.0 {
            self.h = self.h.abs();
            self.y -= self.h;
        }
    }

    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::from_points(self.min(), self.max())
    }
}

fn sign_or_positive(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREE: DragConstraints = DragConstraints {
        constrain_square: false,
        center_origin: false,
    };
    const SQUARE: DragConstraints = DragConstraints {
        constrain_square: true,
        center_origin: false,
    };
    const CENTER: DragConstraints = DragConstraints {
        constrain_square: false,
        center_origin: true,
    };
    const SQUARE_CENTER: DragConstraints = DragConstraints {
        constrain_square: true,
        center_origin: true,
    };

    fn drags() -> Vec<(Point, Point)> {
        let coords = [-130.0, -7.5, 0.0, 3.0, 64.0, 250.25];
        let mut out = Vec::new();
        for &x0 in &coords {
            for &y0 in &coords {
                for &x1 in &coords {
                    for &y1 in &coords {
                        out.push((Point::new(x0, y0), Point::new(x1, y1)));
                    }
                }
            }
        }
        out
    }

    #[test]
    fn simple_drag_keeps_corner() {
        let rect = NormalizedRect::from_drag(
            Point::new(0.0, 0.0),
            Point::new(100.0, 50.0),
            FREE,
        );
        assert_eq!(rect, NormalizedRect { x: 0.0, y: 0.0, w: 100.0, h: 50.0 });
    }

    #[test]
    fn shift_makes_a_square_from_the_dominant_side() {
        let rect = NormalizedRect::from_drag(
            Point::new(0.0, 0.0),
            Point::new(100.0, 50.0),
            SQUARE,
        );
        assert_eq!(rect, NormalizedRect { x: 0.0, y: 0.0, w: 100.0, h: 100.0 });
    }

    #[test]
    fn square_keeps_the_direction_of_the_short_side() {
        let rect = NormalizedRect::from_drag(
            Point::new(0.0, 0.0),
            Point::new(100.0, -20.0),
            SQUARE,
        );
        assert_eq!(rect, NormalizedRect { x: 0.0, y: -100.0, w: 100.0, h: 100.0 });
    }

    #[test]
    fn square_from_zero_height_grows_upward() {
        let rect = NormalizedRect::from_drag(
            Point::new(10.0, 10.0),
            Point::new(-30.0, 10.0),
            SQUARE,
        );
        assert_eq!(rect, NormalizedRect { x: -30.0, y: 10.0, w: 40.0, h: 40.0 });
    }

    #[test]
    fn reversed_drag_is_folded_into_origin() {
        let rect = NormalizedRect::from_drag(
            Point::new(100.0, 50.0),
            Point::new(0.0, 0.0),
            FREE,
        );
        assert_eq!(rect, NormalizedRect { x: 0.0, y: 0.0, w: 100.0, h: 50.0 });
    }

    #[test]
    fn normalized_rect_spans_the_drag_bounding_box() {
        for (p0, p1) in drags() {
            let rect = NormalizedRect::from_drag(p0, p1, FREE);
            assert!(rect.w >= 0.0 && rect.h >= 0.0);
            assert_eq!(rect.x, p0.x.min(p1.x));
            assert_eq!(rect.y, p0.y.min(p1.y));
            assert_eq!(rect.x + rect.w, p0.x.max(p1.x));
            assert_eq!(rect.y + rect.h, p0.y.max(p1.y));
        }
    }

    #[test]
    fn constrained_rects_are_square() {
        for (p0, p1) in drags() {
            for constraints in [SQUARE, SQUARE_CENTER] {
                let rect = NormalizedRect::from_drag(p0, p1, constraints);
                assert!(rect.w >= 0.0 && rect.h >= 0.0);
                assert_eq!(rect.w, rect.h, "{p0:?} -> {p1:?}");
            }
        }
    }

    #[test]
    fn center_origin_is_centered_on_press_point() {
        for (p0, p1) in drags() {
            for constraints in [CENTER, SQUARE_CENTER] {
                let rect = NormalizedRect::from_drag(p0, p1, constraints);
                assert_eq!(rect.center(), p0, "{p0:?} -> {p1:?}");
            }
        }
    }

    #[test]
    fn new_folds_negative_sizes() {
        let rect = NormalizedRect::new(10.0, 10.0, -20.0, 5.0);
        assert_eq!(rect, NormalizedRect { x: -10.0, y: 10.0, w: 20.0, h: 5.0 });
        assert_eq!(rect.to_kurbo(), kurbo::Rect::new(-10.0, 10.0, 10.0, 15.0));
    }
}
