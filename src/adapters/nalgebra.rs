//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to feed `nalgebra::Vector2<T>`
//! polylines into the fitter and get the control points back as nalgebra vectors.
//!
//! # Example
//! ```rust,no_run
//! use bezfit::{fit, Vector2};
//!
//! let polyline = [
//!     nalgebra::Vector2::new(0.0f64, 0.0),
//!     nalgebra::Vector2::new(1.0, 2.0),
//!     nalgebra::Vector2::new(3.0, 2.5),
//! ];
//! let points: Vec<Vector2<f64>> = polyline.iter().copied().map(Vector2::from).collect();
//! let spline = fit(&points, 0.1);
//! let start: nalgebra::Vector2<f64> = spline[0].start().into();
//! # let _ = start;
//! ```
//!
//! The scalar type must satisfy `nalgebra::RealField` and `num_traits::Float`
//! (e.g. `f32` or `f64`).

use nalgebra::RealField;
use num_traits::Float;

use crate::Vector2;

impl<T> From<nalgebra::Vector2<T>> for Vector2<T>
where
    T: RealField + Float,
{
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl<T> From<Vector2<T>> for nalgebra::Vector2<T>
where
    T: RealField + Float,
{
    fn from(v: Vector2<T>) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}
