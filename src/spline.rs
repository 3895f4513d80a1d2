use core::ops::Deref;
use core::slice;

use num_traits::{Float, NumCast, ToPrimitive};

use super::{CubicBezier, Rect, Vector2};

/// An ordered sequence of cubic Bezier segments as produced by [`fit`](crate::fit).
/// Segments created by subdividing a single fit share their joint anchors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spline<T> {
    segments: Vec<CubicBezier<T>>,
}

impl<T> Spline<T>
where
    T: Float,
{
    pub fn new() -> Self {
        Spline {
            segments: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: CubicBezier<T>) {
        self.segments.push(segment);
    }

    /// Start anchor of the first segment
    pub fn start(&self) -> Option<Vector2<T>> {
        self.segments.first().map(|s| s.start)
    }

    /// End anchor of the last segment
    pub fn end(&self) -> Option<Vector2<T>> {
        self.segments.last().map(|s| s.end)
    }

    /// Returns true if every segment starts exactly where its predecessor ends.
    pub fn is_continuous(&self) -> bool {
        self.segments.windows(2).all(|w| w[0].end == w[1].start)
    }

    /// Evaluate a point along the spline for t in [0,1], every segment covering
    /// an equal share of the interval. Returns None for empty splines.
    pub fn eval(&self, t: T) -> Option<Vector2<T>> {
        let (index, local_t) = self.segment_parameter(t)?;
        Some(self.segments[index].eval(local_t))
    }

    /// Smallest rectangle containing every control point. Returns None for empty splines.
    pub fn bounding_rect(&self) -> Option<Rect<T>> {
        Rect::bounds_of(self.segments.iter().flat_map(|s| s.control_points()))
    }

    fn segment_parameter(&self, t: T) -> Option<(usize, T)> {
        let count = self.segments.len();
        if count == 0 {
            return None;
        }

        let t = t.max(T::zero()).min(T::one());
        let count_scalar = <T as NumCast>::from(count)?;
        let scaled = t * count_scalar;
        if scaled >= count_scalar {
            return Some((count - 1, T::one()));
        }

        let index = scaled.floor();
        let local = scaled - index;
        Some((ToPrimitive::to_usize(&index)?, local))
    }
}

impl<T> Deref for Spline<T> {
    type Target = [CubicBezier<T>];

    fn deref(&self) -> &Self::Target {
        &self.segments
    }
}

impl<T> From<Vec<CubicBezier<T>>> for Spline<T> {
    fn from(segments: Vec<CubicBezier<T>>) -> Self {
        Spline { segments }
    }
}

impl<T> IntoIterator for Spline<T> {
    type Item = CubicBezier<T>;
    type IntoIter = std::vec::IntoIter<CubicBezier<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Spline<T> {
    type Item = &'a CubicBezier<T>;
    type IntoIter = slice::Iter<'a, CubicBezier<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn line(from: (f64, f64), to: (f64, f64)) -> CubicBezier<f64> {
        let a = Vector2::from(from);
        let b = Vector2::from(to);
        let third = (b - a) * (1.0 / 3.0);
        CubicBezier::new(a, a + third, b - third, b)
    }

    fn two_lines() -> Spline<f64> {
        let mut spline = Spline::new();
        spline.push(line((0.0, 0.0), (1.0, 0.0)));
        spline.push(line((1.0, 0.0), (1.0, 1.0)));
        spline
    }

    #[test]
    fn spline_eval_segments() {
        let spline = two_lines();

        let p0 = spline.eval(0.0).unwrap();
        assert_eq!(p0, Vector2::new(0.0, 0.0));

        let p1 = spline.eval(0.25).unwrap();
        assert!((p1 - Vector2::new(0.5, 0.0)).squared_length() < EPSILON);

        let p2 = spline.eval(0.75).unwrap();
        assert!((p2 - Vector2::new(1.0, 0.5)).squared_length() < EPSILON);
    }

    #[test]
    fn spline_clamps_out_of_range() {
        let spline = two_lines();
        assert_eq!(spline.eval(-1.0).unwrap(), Vector2::new(0.0, 0.0));
        assert_eq!(spline.eval(2.0).unwrap(), Vector2::new(1.0, 1.0));
    }

    #[test]
    fn empty_spline() {
        let spline = Spline::<f64>::new();
        assert!(spline.is_empty());
        assert!(spline.eval(0.5).is_none());
        assert!(spline.start().is_none());
        assert!(spline.bounding_rect().is_none());
        assert!(spline.is_continuous());
    }

    #[test]
    fn continuity_and_anchors() {
        let mut spline = two_lines();
        assert!(spline.is_continuous());
        assert_eq!(spline.start(), Some(Vector2::new(0.0, 0.0)));
        assert_eq!(spline.end(), Some(Vector2::new(1.0, 1.0)));

        spline.push(line((5.0, 5.0), (6.0, 5.0)));
        assert!(!spline.is_continuous());
        assert_eq!(spline.len(), 3);
        assert_eq!(spline.iter().count(), 3);
    }

    #[test]
    fn bounding_rect_covers_control_points() {
        let rect = two_lines().bounding_rect().unwrap();
        assert_eq!(rect.origin(), Vector2::new(0.0, 0.0));
        assert_eq!(rect.size(), Vector2::new(1.0, 1.0));
    }
}
