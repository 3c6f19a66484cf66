use num_traits::Float;

use crate::{Bounded, Bounds, geometry::Point};

/// An ordered list of points describing an open path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString<T = f64> {
    /// The ordered list of points of the path.
    pub points: Vec<Point<T>>,
    /// The identifier of the line, if any.
    pub id: Option<String>,
}

impl<T, P> From<Vec<P>> for LineString<T>
where
    P: Into<Point<T>>,
{
    fn from(points: Vec<P>) -> Self {
        Self::new(points.into_iter().map(Into::into).collect())
    }
}

impl<T> From<LinearRing<T>> for LineString<T> {
    fn from(ring: LinearRing<T>) -> Self {
        Self {
            points: ring.points,
            id: ring.id,
        }
    }
}

impl<T> LineString<T> {
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self { points, id: None }
    }

    /// Returns self with the given identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<T> Bounded for LineString<T>
where
    T: Float,
{
    type Scalar = T;

    fn bounds(&self) -> Option<Bounds<T>> {
        Bounds::from_points(&self.points)
    }
}

/// An ordered list of points describing a closed contour.
///
/// The ring is implicitly closed: the last point connects back to the first one, which must
/// not be repeated at the end of the list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRing<T = f64> {
    /// The ordered list of points of the contour.
    pub points: Vec<Point<T>>,
    /// The identifier of the ring, if any.
    pub id: Option<String>,
}

impl<T, P> From<Vec<P>> for LinearRing<T>
where
    P: Into<Point<T>>,
{
    fn from(points: Vec<P>) -> Self {
        Self::new(points.into_iter().map(Into::into).collect())
    }
}

impl<T> LinearRing<T> {
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self { points, id: None }
    }

    /// Returns self with the given identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<T> LinearRing<T>
where
    T: Float,
{
    /// Returns the area enclosed by the ring, regardless of its orientation.
    pub fn area(&self) -> T {
        let two = T::one() + T::one();
        let doubled = self
            .points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .fold(T::zero(), |sum, (from, to)| {
                sum + (from.x * to.y - to.x * from.y)
            });

        (doubled / two).abs()
    }
}

impl<T> Bounded for LinearRing<T>
where
    T: Float,
{
    type Scalar = T;

    fn bounds(&self) -> Option<Bounds<T>> {
        Bounds::from_points(&self.points)
    }
}
