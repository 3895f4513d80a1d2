use num_traits::Float;

use super::{cast, LineSegment, Vector2};

/// A quadratic Bezier curve. Mostly encountered as the derivative (hodograph)
/// of a [`CubicBezier`](crate::CubicBezier).
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * start + 2 * (1 - t) * t * ctrl + t² * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezier<T> {
    pub(crate) start: Vector2<T>,
    pub(crate) ctrl: Vector2<T>,
    pub(crate) end: Vector2<T>,
}

impl<T> QuadraticBezier<T>
where
    T: Float,
{
    pub fn new(start: Vector2<T>, ctrl: Vector2<T>, end: Vector2<T>) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    pub fn eval(&self, t: T) -> Vector2<T> {
        let two: T = cast(2.0);
        let t2 = t * t;
        let one_t = T::one() - t;
        let one_t2 = one_t * one_t;

        self.start * one_t2 + self.ctrl * (two * one_t * t) + self.end * t2
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: T) -> Vector2<T> {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl - self.start) * t;
        let ctrl_1bc = self.ctrl + (self.end - self.ctrl) * t;
        // second iteration, final point on the curve
        ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t
    }

    /// Return the derivative function.
    /// The derivative of a quadratic curve is a line segment with the
    /// weights 2(ctrl - start) and 2(end - ctrl).
    pub fn derivative(&self) -> LineSegment<T> {
        let two: T = cast(2.0);
        LineSegment {
            start: (self.ctrl - self.start) * two,
            end: (self.end - self.ctrl) * two,
        }
    }
}
