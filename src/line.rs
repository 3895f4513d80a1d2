use num_traits::Float;

use super::Vector2;

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval().
/// It is the derivative of a quadratic Bezier curve, which is how the
/// second derivative of a cubic segment gets evaluated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment<T> {
    pub(crate) start: Vector2<T>,
    pub(crate) end: Vector2<T>,
}

impl<T> LineSegment<T>
where
    T: Float,
{
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> Vector2<T> {
        self.start
    }

    pub fn end(&self) -> Vector2<T> {
        self.end
    }

    /// Evaluates (1 - t) * start + t * end
    pub fn eval(&self, t: T) -> Vector2<T> {
        self.start * (T::one() - t) + self.end * t
    }

    /// Return the derivative vector (constant along the segment).
    pub fn derivative(&self) -> Vector2<T> {
        self.end - self.start
    }

    pub fn length(&self) -> T {
        (self.end - self.start).length()
    }
}
