//! Chord-length parameterization of a polyline.

use num_traits::Float;

use super::Vector2;

/// Assigns every point a parameter proportional to the cumulative straight-line
/// distance along the polyline, normalized to [0, 1].
///
/// The result is aligned by index with `points`, non-decreasing, starts at 0 and
/// ends at 1. Requires at least two points and a non-zero total length, which
/// holds for any deduplicated polyline with two or more points.
pub fn chord_length_parameterize<T>(points: &[Vector2<T>]) -> Vec<T>
where
    T: Float,
{
    let mut u = Vec::with_capacity(points.len());
    u.push(T::zero());
    for pair in points.windows(2) {
        let previous = u[u.len() - 1];
        u.push(previous + (pair[1] - pair[0]).length());
    }

    let total = u[u.len() - 1];
    u.iter().map(|&x| x / total).collect()
}
