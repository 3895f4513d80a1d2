use num_traits::Float;

use super::{cast, QuadraticBezier, Vector2};

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<T> {
    pub(crate) start: Vector2<T>,
    pub(crate) ctrl1: Vector2<T>,
    pub(crate) ctrl2: Vector2<T>,
    pub(crate) end: Vector2<T>,
}

impl<T> CubicBezier<T>
where
    T: Float,
{
    pub fn new(start: Vector2<T>, ctrl1: Vector2<T>, ctrl2: Vector2<T>, end: Vector2<T>) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> Vector2<T> {
        self.start
    }

    pub fn ctrl1(&self) -> Vector2<T> {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> Vector2<T> {
        self.ctrl2
    }

    pub fn end(&self) -> Vector2<T> {
        self.end
    }

    /// The four points in curve order: start, ctrl1, ctrl2, end
    pub fn control_points(&self) -> [Vector2<T>; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Evaluate the curve at t by direct evaluation of the Bernstein polynomials.
    /// t is not clamped.
    pub fn eval(&self, t: T) -> Vector2<T> {
        let three: T = cast(3.0);
        let one_t = T::one() - t;

        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (three * one_t * one_t * t)
            + self.ctrl2 * (three * one_t * t * t)
            + self.end * (t * t * t)
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: T) -> Vector2<T> {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Return the derivative function.
    /// The derivative is also a bezier curve but of degree n-1 (cubic->quadratic)
    /// with the weights 3(ctrl1 - start), 3(ctrl2 - ctrl1) and 3(end - ctrl2).
    /// Since it returns the derivative function, eval() needs to be called separately
    pub fn derivative(&self) -> QuadraticBezier<T> {
        let three: T = cast(3.0);
        QuadraticBezier {
            start: (self.ctrl1 - self.start) * three,
            ctrl: (self.ctrl2 - self.ctrl1) * three,
            end: (self.end - self.ctrl2) * three,
        }
    }

    /// First derivative at t:
    /// 3[(1-t)²(ctrl1 - start) + 2(1-t)t(ctrl2 - ctrl1) + t²(end - ctrl2)]
    pub fn first_derivative(&self, t: T) -> Vector2<T> {
        self.derivative().eval(t)
    }

    /// Second derivative at t:
    /// 6(1-t)(start - 2 ctrl1 + ctrl2) + 6t(ctrl1 - 2 ctrl2 + end)
    pub fn second_derivative(&self, t: T) -> Vector2<T> {
        self.derivative().derivative().eval(t)
    }
}

impl<T> From<[Vector2<T>; 4]> for CubicBezier<T>
where
    T: Float,
{
    fn from([start, ctrl1, ctrl2, end]: [Vector2<T>; 4]) -> Self {
        CubicBezier::new(start, ctrl1, ctrl2, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn circle_quadrant() -> CubicBezier<f64> {
        // control points are chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        CubicBezier::new(
            Vector2::new(0f64, 1f64),
            Vector2::new(c, 1f64),
            Vector2::new(1f64, c),
            Vector2::new(1f64, 0f64),
        )
    }

    #[test]
    fn circle_approximation_error() {
        let max_drift_perc = 0.019608; // radial drift percent
        let max_error = max_drift_perc * 0.01; // absolute max radial error

        let bezier = circle_quadrant();
        let nsteps = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let contour = bezier.eval(t).length() - 1f64;
            assert!(contour.abs() <= max_error);
        }
    }

    #[test]
    fn eval_equivalence_casteljau() {
        let bezier = CubicBezier::new(
            Vector2::new(0f64, 1.77f64),
            Vector2::new(1.1f64, -1f64),
            Vector2::new(4.3f64, 3f64),
            Vector2::new(3.2f64, -4f64),
        );

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let err = bezier.eval_casteljau(t) - bezier.eval(t);
            assert!(err.squared_length() < EPSILON);
        }
    }

    #[test]
    fn eval_hits_anchors() {
        let bezier = circle_quadrant();
        assert_eq!(bezier.eval(0.0), bezier.start());
        assert_eq!(bezier.eval(1.0), bezier.end());
    }

    #[test]
    fn derivatives_at_the_anchors() {
        let p0 = Vector2::new(0f64, 0f64);
        let p1 = Vector2::new(1f64, 2f64);
        let p2 = Vector2::new(3f64, 3f64);
        let p3 = Vector2::new(4f64, 0f64);
        let bezier = CubicBezier::new(p0, p1, p2, p3);

        assert!((bezier.first_derivative(0.0) - (p1 - p0) * 3.0).squared_length() < EPSILON);
        assert!((bezier.first_derivative(1.0) - (p3 - p2) * 3.0).squared_length() < EPSILON);

        let dd0 = (p0 - p1 * 2.0 + p2) * 6.0;
        let dd1 = (p1 - p2 * 2.0 + p3) * 6.0;
        assert!((bezier.second_derivative(0.0) - dd0).squared_length() < EPSILON);
        assert!((bezier.second_derivative(1.0) - dd1).squared_length() < EPSILON);
        // linear in t
        let mid = (dd0 + dd1) * 0.5;
        assert!((bezier.second_derivative(0.5) - mid).squared_length() < EPSILON);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let bezier = circle_quadrant();
        let h = 1e-6;
        for t in [0.2, 0.5, 0.7] {
            let numeric = (bezier.eval(t + h) - bezier.eval(t - h)) * (0.5 / h);
            assert!((numeric - bezier.first_derivative(t)).squared_length() < 1e-8);
        }
    }

    #[test]
    fn control_points_round_trip() {
        let bezier = circle_quadrant();
        assert_eq!(CubicBezier::from(bezier.control_points()), bezier);
    }
}
