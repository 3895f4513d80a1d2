//! Adaptive cubic Bézier curve fitting.
//!
//! Given an ordered sequence of 2D points and a maximum squared error, [`fit`]
//! produces a short [`Spline`] of [`CubicBezier`] segments approximating the
//! polyline. Each segment is generated by a constrained least-squares solve,
//! refined with Newton-Raphson reparameterization and, if that fails,
//! subdivided at the point of worst deviation with a tangent-continuous joint.
//!
//! ```rust
//! use bezfit::{fit, Vector2};
//!
//! let points = [Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)];
//! let spline = fit(&points, 1.0);
//! assert_eq!(spline.len(), 1);
//! ```

use num_traits::{Float, NumCast};

pub mod adapters;
pub mod cubic_bezier;
pub mod deviation;
#[cfg(feature = "fixtures")]
pub mod error;
#[cfg(feature = "fixtures")]
pub mod fixture;
pub mod fit;
pub mod generate;
pub mod line;
pub mod parameterize;
pub mod projection;
pub mod quadratic_bezier;
pub mod rect;
pub mod roots;
pub mod spline;
pub mod vector2;

pub use cubic_bezier::CubicBezier;
pub use fit::{fit, fit_with_options, ErrorReference, FitOptions};
pub use line::LineSegment;
pub use projection::Projection;
pub use quadratic_bezier::QuadraticBezier;
pub use rect::Rect;
pub use spline::Spline;
pub use vector2::Vector2;

#[cfg(feature = "fixtures")]
pub use error::FixtureError;
#[cfg(feature = "fixtures")]
pub use fixture::{Fixture, FixtureOutcome, FixtureResult, FixtureSet};

/// Default scalar type for points read from fixtures and used by the demos.
pub type NativeFloat = f64;

/// Absolute tolerance used when comparing computed geometry in tests.
pub const EPSILON: NativeFloat = 1e-10;

/// Converts an `f64` literal into the scalar type `T`.
/// All `Float` implementors can represent these literals, NaN is only a fallback.
#[inline]
pub(crate) fn cast<T: Float>(value: NativeFloat) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}
