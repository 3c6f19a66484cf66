use num_traits::Float;

use crate::{Bounded, Bounds, geometry::LinearRing};

/// A polygon in the plane.
///
/// The first ring is the outer shell, any other ring is a hole.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<T = f64> {
    /// The ordered list of rings of the polygon.
    pub rings: Vec<LinearRing<T>>,
    /// The identifier of the polygon, if any.
    pub id: Option<String>,
}

impl<T, R> From<Vec<R>> for Polygon<T>
where
    R: Into<LinearRing<T>>,
{
    fn from(rings: Vec<R>) -> Self {
        Self::new(rings.into_iter().map(Into::into).collect())
    }
}

impl<T> From<LinearRing<T>> for Polygon<T> {
    fn from(shell: LinearRing<T>) -> Self {
        Self::new(vec![shell])
    }
}

impl<T> Polygon<T> {
    pub fn new(rings: Vec<LinearRing<T>>) -> Self {
        Self { rings, id: None }
    }

    /// Returns self with the given identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the outer ring of the polygon, if any.
    pub fn shell(&self) -> Option<&LinearRing<T>> {
        self.rings.first()
    }

    /// Returns an iterator over the inner rings of the polygon.
    pub fn holes(&self) -> impl Iterator<Item = &LinearRing<T>> {
        self.rings.iter().skip(1)
    }
}

impl<T> Polygon<T>
where
    T: Float,
{
    /// Returns the area of the shell minus the area of the holes.
    pub fn area(&self) -> T {
        let shell = self.shell().map(LinearRing::area).unwrap_or_else(T::zero);
        self.holes().fold(shell, |area, hole| area - hole.area())
    }
}

impl<T> Bounded for Polygon<T>
where
    T: Float,
{
    type Scalar = T;

    fn bounds(&self) -> Option<Bounds<T>> {
        Bounds::from_points(self.rings.iter().flat_map(|ring| &ring.points))
    }
}
