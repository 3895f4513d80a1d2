//! Maximum deviation between a polyline and a fitted segment.
//!
//! Points are matched against the curve through an arc-length map, so that
//! a point's chord-length parameter lands on the curve position at the same
//! relative distance along the curve instead of at the same raw parameter.

use num_traits::Float;
use tinyvec::ArrayVec;

use super::{cast, CubicBezier, NativeFloat, Vector2};

/// Number of equal parameter steps used to sample the curve length.
pub const ARC_LENGTH_PARTS: usize = 10;

/// Piecewise-linear map from curve parameter to normalized arc length,
/// sampled at `ARC_LENGTH_PARTS + 1` equally spaced parameters.
#[derive(Debug, Clone)]
pub struct ArcLengthMap<T>
where
    T: Float + Default,
{
    distances: ArrayVec<[T; ARC_LENGTH_PARTS + 1]>,
}

impl<T> ArcLengthMap<T>
where
    T: Float + Default,
{
    pub fn new(bezier: &CubicBezier<T>) -> Self {
        let mut distances: ArrayVec<[T; ARC_LENGTH_PARTS + 1]> = ArrayVec::new();
        let mut len = T::zero();
        let mut prev = bezier.start;
        distances.push(len);
        for i in 1..=ARC_LENGTH_PARTS {
            let curr = bezier.eval(cast(i as NativeFloat / ARC_LENGTH_PARTS as NativeFloat));
            len = len + (curr - prev).length();
            distances.push(len);
            prev = curr;
        }
        // normalize to the same interval as the chord-length parameters
        for d in distances.iter_mut() {
            *d = *d / len;
        }
        ArcLengthMap { distances }
    }

    /// Normalized arc length at each sample, starting with 0 and ending with 1.
    pub fn distances(&self) -> &[T] {
        &self.distances
    }

    /// Maps a relative distance in [0, 1] back to a curve parameter by linear
    /// interpolation inside the bracketing sample interval.
    /// Values outside [0, 1] are clamped.
    pub fn find_t(&self, param: T) -> T {
        if param < T::zero() {
            return T::zero();
        }
        if param > T::one() {
            return T::one();
        }

        let parts = ARC_LENGTH_PARTS as NativeFloat;
        for i in 1..=ARC_LENGTH_PARTS {
            if param <= self.distances[i] {
                let t_min: T = cast((i - 1) as NativeFloat / parts);
                let t_max: T = cast(i as NativeFloat / parts);
                let len_min = self.distances[i - 1];
                let len_max = self.distances[i];

                return (param - len_min) / (len_max - len_min) * (t_max - t_min) + t_min;
            }
        }

        T::zero()
    }
}

/// Worst squared deviation of a point set from a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxDeviation<T> {
    pub squared_error: T,
    /// Index of the first point with the largest deviation.
    pub index: usize,
}

/// Measures the largest squared distance between `points` and `bezier`.
///
/// If no point deviates at all the index defaults to the middle of the subset.
pub fn compute_max_error<T>(points: &[Vector2<T>], bezier: &CubicBezier<T>, u: &[T]) -> MaxDeviation<T>
where
    T: Float + Default,
{
    let map = ArcLengthMap::new(bezier);
    let mut max = MaxDeviation {
        squared_error: T::zero(),
        index: points.len() / 2,
    };

    for (i, (&point, &ui)) in points.iter().zip(u).enumerate() {
        let t = map.find_t(ui);
        let dist = (bezier.eval(t) - point).squared_length();
        if dist > max.squared_error {
            max = MaxDeviation {
                squared_error: dist,
                index: i,
            };
        }
    }

    max
}
