//! Newton-Raphson reparameterization.
//!
//! Available functions:
//! - `newton_raphson_root_find()`
//! - `reparameterize()`
use num_traits::Float;

use super::{cast, CubicBezier, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootFindingError {
    ZeroDerivative,
}

/// Performs a single Newton-Raphson iteration x1 = x - f(x) / f'(x).
/// Returns `ZeroDerivative` if f'(x) is exactly zero.
pub(crate) fn newton_raphson_step<F>(x: F, fx: F, dx: F) -> Result<F, RootFindingError>
where
    F: Float,
{
    if dx == F::zero() {
        return Err(RootFindingError::ZeroDerivative);
    }
    Ok(x - fx / dx)
}

/// Moves the parameter `u` of `point` one Newton-Raphson step closer to the
/// parameter of the nearest point on `bezier`.
///
/// The function whose root is searched is f(u) = (B(u) - P)·B'(u), divided by
/// |B'(u)|² + 2 (B(u) - P)·B''(u). When that denominator is exactly zero `u`
/// is returned unchanged.
pub fn newton_raphson_root_find<T>(bezier: &CubicBezier<T>, point: Vector2<T>, u: T) -> T
where
    T: Float,
{
    let two: T = cast(2.0);
    let d = bezier.eval(u) - point;
    let qprime = bezier.first_derivative(u);
    let numerator = d.dot(qprime);
    let denominator = qprime.squared_length() + two * d.dot(bezier.second_derivative(u));

    newton_raphson_step(u, numerator, denominator).unwrap_or(u)
}

/// Applies one Newton-Raphson correction to every parameter independently.
pub fn reparameterize<T>(bezier: &CubicBezier<T>, points: &[Vector2<T>], u: &[T]) -> Vec<T>
where
    T: Float,
{
    points
        .iter()
        .zip(u)
        .map(|(&point, &ui)| newton_raphson_root_find(bezier, point, ui))
        .collect()
}
