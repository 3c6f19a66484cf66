use num_traits::Float;

use crate::{
    Bounded, Bounds,
    geometry::{LineString, Polygon},
};

/// A collection of line strings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineString<T = f64> {
    /// The ordered list of lines.
    pub lines: Vec<LineString<T>>,
    /// The identifier of the collection, if any.
    pub id: Option<String>,
}

impl<T, L> From<Vec<L>> for MultiLineString<T>
where
    L: Into<LineString<T>>,
{
    fn from(lines: Vec<L>) -> Self {
        Self::new(lines.into_iter().map(Into::into).collect())
    }
}

impl<T> MultiLineString<T> {
    pub fn new(lines: Vec<LineString<T>>) -> Self {
        Self { lines, id: None }
    }

    /// Returns self with the given identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl<T> Bounded for MultiLineString<T>
where
    T: Float,
{
    type Scalar = T;

    fn bounds(&self) -> Option<Bounds<T>> {
        Bounds::from_points(self.lines.iter().flat_map(|line| &line.points))
    }
}

/// A collection of polygons.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon<T = f64> {
    /// The ordered list of polygons.
    pub polygons: Vec<Polygon<T>>,
    /// The identifier of the collection, if any.
    pub id: Option<String>,
}

impl<T, P> From<Vec<P>> for MultiPolygon<T>
where
    P: Into<Polygon<T>>,
{
    fn from(polygons: Vec<P>) -> Self {
        Self::new(polygons.into_iter().map(Into::into).collect())
    }
}

impl<T> MultiPolygon<T> {
    pub fn new(polygons: Vec<Polygon<T>>) -> Self {
        Self { polygons, id: None }
    }

    /// Returns self with the given identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl<T> Bounded for MultiPolygon<T>
where
    T: Float,
{
    type Scalar = T;

    fn bounds(&self) -> Option<Bounds<T>> {
        Bounds::from_points(
            self.polygons
                .iter()
                .flat_map(|polygon| &polygon.rings)
                .flat_map(|ring| &ring.points),
        )
    }
}
