mod determinant;
mod error;
mod tolerance;

pub mod bounds;
pub mod clip;
pub mod geometry;
pub mod segment;

pub use self::bounds::{Bounds, ContainsOptions, IntersectsOptions, Quadrant, WrapOptions};
pub use self::clip::{
    ClipOptions, Clipper, LineClip, clip_geometry, clip_line_string, clip_linear_ring,
    clip_multi_line_string, clip_multi_polygon, clip_polygon, clip_segment,
};
pub use self::error::{Error, Result};
pub use self::geometry::{
    Geometry, Kind, LineString, LinearRing, MultiLineString, MultiPolygon, Point, Polygon,
};
pub use self::segment::{Intersection, Segment};
pub use self::tolerance::{IsClose, Positive, Tolerance};

/// A geometry whose extent in the plane can be enclosed by a [`Bounds`].
pub trait Bounded {
    /// The scalar type of the coordinates.
    type Scalar;

    /// Returns the smallest bounds enclosing self, if self has any point.
    fn bounds(&self) -> Option<Bounds<Self::Scalar>>;
}
