//! The geometry value types.

mod line_string;
mod multi;
mod point;
mod polygon;

use std::fmt;

use num_traits::Float;

pub use self::line_string::{LineString, LinearRing};
pub use self::multi::{MultiLineString, MultiPolygon};
pub use self::point::{Point, point};
pub use self::polygon::Polygon;

use crate::{Bounded, Bounds};

/// The kind of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiLineString,
    MultiPolygon,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Point => "point",
            Kind::LineString => "line string",
            Kind::LinearRing => "linear ring",
            Kind::Polygon => "polygon",
            Kind::MultiLineString => "multi line string",
            Kind::MultiPolygon => "multi polygon",
        })
    }
}

/// Any of the supported geometries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry<T = f64> {
    Point(Point<T>),
    LineString(LineString<T>),
    LinearRing(LinearRing<T>),
    Polygon(Polygon<T>),
    MultiLineString(MultiLineString<T>),
    MultiPolygon(MultiPolygon<T>),
}

impl<T> Geometry<T> {
    pub fn kind(&self) -> Kind {
        match self {
            Geometry::Point(_) => Kind::Point,
            Geometry::LineString(_) => Kind::LineString,
            Geometry::LinearRing(_) => Kind::LinearRing,
            Geometry::Polygon(_) => Kind::Polygon,
            Geometry::MultiLineString(_) => Kind::MultiLineString,
            Geometry::MultiPolygon(_) => Kind::MultiPolygon,
        }
    }

    /// Returns the identifier of the geometry, if any. Points carry no identifier.
    pub fn id(&self) -> Option<&str> {
        match self {
            Geometry::Point(_) => None,
            Geometry::LineString(line) => line.id(),
            Geometry::LinearRing(ring) => ring.id(),
            Geometry::Polygon(polygon) => polygon.id(),
            Geometry::MultiLineString(multi) => multi.id(),
            Geometry::MultiPolygon(multi) => multi.id(),
        }
    }
}

impl<T> Bounded for Geometry<T>
where
    T: Float,
{
    type Scalar = T;

    fn bounds(&self) -> Option<Bounds<T>> {
        match self {
            Geometry::Point(point) => point.bounds(),
            Geometry::LineString(line) => line.bounds(),
            Geometry::LinearRing(ring) => ring.bounds(),
            Geometry::Polygon(polygon) => polygon.bounds(),
            Geometry::MultiLineString(multi) => multi.bounds(),
            Geometry::MultiPolygon(multi) => multi.bounds(),
        }
    }
}

impl<T> From<Point<T>> for Geometry<T> {
    fn from(point: Point<T>) -> Self {
        Geometry::Point(point)
    }
}

impl<T> From<LineString<T>> for Geometry<T> {
    fn from(line: LineString<T>) -> Self {
        Geometry::LineString(line)
    }
}

impl<T> From<LinearRing<T>> for Geometry<T> {
    fn from(ring: LinearRing<T>) -> Self {
        Geometry::LinearRing(ring)
    }
}

impl<T> From<Polygon<T>> for Geometry<T> {
    fn from(polygon: Polygon<T>) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl<T> From<MultiLineString<T>> for Geometry<T> {
    fn from(multi: MultiLineString<T>) -> Self {
        Geometry::MultiLineString(multi)
    }
}

impl<T> From<MultiPolygon<T>> for Geometry<T> {
    fn from(multi: MultiPolygon<T>) -> Self {
        Geometry::MultiPolygon(multi)
    }
}
