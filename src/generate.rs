//! Least-squares generation of a single cubic segment.
//!
//! The segment is anchored at the first and last point of the subset. Its inner
//! control points lie on the given unit tangents, at offsets `alpha_l` and
//! `alpha_r` chosen to minimise the squared distance between the points and the
//! curve evaluated at their parameters. This leaves a 2x2 normal-equations
//! system, solved by Cramer's rule.

use num_traits::Float;

use super::{cast, CubicBezier, Vector2};

/// Generates one cubic segment for `points` with the parameter values `u`.
///
/// `left_tangent` leaves `points[0]`, `right_tangent` leaves the last point and
/// points back into the curve. Both must be unit length.
///
/// If the system is singular, or either offset comes out smaller than
/// `1e-6 * |first - last|`, both control points are instead placed a third of the
/// chord length along their tangents (Wu/Barsky heuristic). A zero or negative
/// offset would produce coincident control points and a vanishing derivative
/// in the Newton-Raphson step.
pub fn generate_bezier<T>(
    points: &[Vector2<T>],
    u: &[T],
    left_tangent: Vector2<T>,
    right_tangent: Vector2<T>,
) -> CubicBezier<T>
where
    T: Float,
{
    let first = points[0];
    let last = points[points.len() - 1];
    let three: T = cast(3.0);
    // straight line with the anchors doubled as control points
    let baseline = CubicBezier::new(first, first, last, last);

    let mut c = [[T::zero(); 2]; 2];
    let mut x = [T::zero(); 2];

    for (&point, &ui) in points.iter().zip(u) {
        let ux = T::one() - ui;
        let a0 = left_tangent.scale(three * ui * (ux * ux));
        let a1 = right_tangent.scale(three * ux * (ui * ui));

        c[0][0] = c[0][0] + a0.dot(a0);
        c[0][1] = c[0][1] + a0.dot(a1);
        c[1][0] = c[1][0] + a0.dot(a1);
        c[1][1] = c[1][1] + a1.dot(a1);

        let tmp = point - baseline.eval(ui);
        x[0] = x[0] + a0.dot(tmp);
        x[1] = x[1] + a1.dot(tmp);
    }

    let det_c0_c1 = c[0][0] * c[1][1] - c[1][0] * c[0][1];
    let det_c0_x = c[0][0] * x[1] - c[1][0] * x[0];
    let det_x_c1 = x[0] * c[1][1] - x[1] * c[0][1];

    let (alpha_l, alpha_r) = if det_c0_c1 == T::zero() {
        (T::zero(), T::zero())
    } else {
        (det_x_c1 / det_c0_c1, det_c0_x / det_c0_c1)
    };

    let seg_len = (first - last).length();
    let epsilon = cast::<T>(1.0e-6) * seg_len;
    if alpha_l < epsilon || alpha_r < epsilon {
        let offset = seg_len / three;
        return CubicBezier::new(
            first,
            first + left_tangent.scale(offset),
            last + right_tangent.scale(offset),
            last,
        );
    }

    CubicBezier::new(
        first,
        first + left_tangent.scale(alpha_l),
        last + right_tangent.scale(alpha_r),
        last,
    )
}
