use num_traits::Float;

use super::Vector2;

/// Axis aligned rectangle spanned by its top-left and bottom-right corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect<T> {
    pub(crate) top_left: Vector2<T>,
    pub(crate) bottom_right: Vector2<T>,
}

impl<T> Rect<T>
where
    T: Float,
{
    pub fn new(top_left: Vector2<T>, bottom_right: Vector2<T>) -> Self {
        Rect {
            top_left,
            bottom_right,
        }
    }

    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Rect::new(Vector2::new(x, y), Vector2::new(x + w, y + h))
    }

    pub fn origin(&self) -> Vector2<T> {
        self.top_left
    }

    pub fn size(&self) -> Vector2<T> {
        self.bottom_right - self.top_left
    }

    /// Smallest rectangle containing all `points`. Returns None if there are none.
    pub fn bounds_of<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let (top_left, bottom_right) = iter.fold((first, first), |(tl, br), p| {
            (
                Vector2::new(tl.x.min(p.x), tl.y.min(p.y)),
                Vector2::new(br.x.max(p.x), br.y.max(p.y)),
            )
        });

        Some(Rect::new(top_left, bottom_right))
    }

    pub fn contains(&self, p: Vector2<T>) -> bool {
        p.x >= self.top_left.x
            && p.x <= self.bottom_right.x
            && p.y >= self.top_left.y
            && p.y <= self.bottom_right.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xywh_origin_size() {
        let rect = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.origin(), Vector2::new(10.0, 20.0));
        assert_eq!(rect.size(), Vector2::new(30.0, 40.0));
    }

    #[test]
    fn bounds_of_negative_coordinates() {
        let points = [
            Vector2::new(-3.0, 2.0),
            Vector2::new(-1.0, -5.0),
            Vector2::new(-2.0, -4.0),
        ];
        let rect = Rect::bounds_of(points).unwrap();
        assert_eq!(rect.origin(), Vector2::new(-3.0, -5.0));
        assert_eq!(rect.size(), Vector2::new(2.0, 7.0));
        assert!(points.iter().all(|&p| rect.contains(p)));
        assert!(!rect.contains(Vector2::new(0.0, 0.0)));
    }

    #[test]
    fn bounds_of_nothing() {
        assert!(Rect::<f64>::bounds_of(Vec::new()).is_none());
    }
}
