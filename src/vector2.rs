use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;

/// Immutable 2D point / vector.
/// All operations return new values, operands are never modified.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Vector2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    pub fn zero() -> Self {
        Vector2 {
            x: T::zero(),
            y: T::zero(),
        }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    pub fn squared_length(&self) -> T {
        self.dot(*self)
    }

    /// Euclidean length (L2 norm) of the vector
    pub fn length(&self) -> T {
        self.squared_length().sqrt()
    }

    /// Returns the vector scaled to unit length.
    /// A zero vector yields NaN components, callers have to rule that out first.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        Vector2 {
            x: self.x / len,
            y: self.y / len,
        }
    }

    pub fn scale(&self, factor: T) -> Self {
        Vector2 {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Component-wise product
    pub fn component_mul(&self, other: Self) -> Self {
        Vector2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Component-wise quotient
    pub fn component_div(&self, other: Self) -> Self {
        Vector2 {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }

    /// Component-wise absolute value
    pub fn abs(&self) -> Self {
        Vector2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// The vector rotated by 90° counter-clockwise
    pub fn perp(&self) -> Self {
        Vector2 {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
    }
}

impl<T> Add for Vector2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Vector2<T>) -> Vector2<T> {
        Vector2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Vector2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Vector2<T>
where
    T: Mul<T, Output = T> + Copy,
{
    type Output = Vector2<T>;

    fn mul(self, rhs: T) -> Vector2<T> {
        Vector2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Neg for Vector2<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Float> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Vector2::new(x, y)
    }
}

impl<T: Float> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl<T: Float> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}
