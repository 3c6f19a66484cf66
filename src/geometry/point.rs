use num_traits::Float;

use crate::{Bounded, Bounds, IsClose, Tolerance};

/// A point in the plane.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T = f64> {
    /// The horizontal coordinate of the point.
    pub x: T,
    /// The vertical coordinate of the point.
    pub y: T,
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Point<T>
where
    T: Float,
{
    /// Returns the squared euclidean distance between self and rhs.
    pub fn distance_squared(&self, rhs: &Self) -> T {
        (self.x - rhs.x).powi(2) + (self.y - rhs.y).powi(2)
    }
}

impl<T> IsClose for Point<T>
where
    T: Float,
{
    type Scalar = T;

    fn is_close(&self, rhs: &Self, tolerance: &Tolerance<T>) -> bool {
        self.x.is_close(&rhs.x, tolerance) && self.y.is_close(&rhs.y, tolerance)
    }
}

impl<T> Bounded for Point<T>
where
    T: Copy,
{
    type Scalar = T;

    fn bounds(&self) -> Option<Bounds<T>> {
        Some((*self).into())
    }
}

/// A constructor macro for the [`Point`].
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::geometry::Point { x: $x, y: $y }
    };
}

pub use point;
