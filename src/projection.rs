//! Proportional mapping of points from one rectangle onto another, used to
//! bring input points and fitted splines into a viewport for rendering.

use num_traits::Float;

use super::{CubicBezier, Rect, Vector2};

/// Maps points from the `from` rectangle onto the `to` rectangle, scaling
/// each axis independently:
/// ```output = (p - from.origin) * (to.size / from.size) + to.origin```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection<T> {
    from_origin: Vector2<T>,
    to_origin: Vector2<T>,
    scale: Vector2<T>,
}

impl<T> Projection<T>
where
    T: Float,
{
    /// A degenerate `from` rectangle (zero width or height) yields non-finite
    /// coordinates on that axis.
    pub fn new(from: Rect<T>, to: Rect<T>) -> Self {
        Projection {
            from_origin: from.origin(),
            to_origin: to.origin(),
            scale: to.size().component_div(from.size()),
        }
    }

    pub fn apply(&self, p: Vector2<T>) -> Vector2<T> {
        (p - self.from_origin).component_mul(self.scale) + self.to_origin
    }

    /// Projects all four control points of a segment.
    pub fn apply_bezier(&self, bezier: &CubicBezier<T>) -> CubicBezier<T> {
        let [start, ctrl1, ctrl2, end] = bezier.control_points();
        CubicBezier::new(
            self.apply(start),
            self.apply(ctrl1),
            self.apply(ctrl2),
            self.apply(end),
        )
    }
}
