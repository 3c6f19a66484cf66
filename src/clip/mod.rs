//! Clipping of geometries against an axis-aligned rectangle.

mod line;
mod multi_line;
mod multi_polygon;
mod polygon;
mod rect;

pub use self::line::{LineClip, clip_line_string, clip_linear_ring};
pub use self::multi_line::clip_multi_line_string;
pub use self::multi_polygon::clip_multi_polygon;
pub use self::polygon::clip_polygon;
pub use self::rect::clip_segment;

use num_traits::Float;

use crate::{
    Bounded, Bounds, Tolerance,
    bounds::IntersectsOptions,
    error::{Error, Result},
    geometry::{Geometry, Kind, LineString, MultiLineString, Polygon},
};

/// The options of a clipping operation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipOptions<T> {
    /// Whether a clipped line is returned as the list of its inner pieces, rather than as a
    /// single line joining them all.
    pub return_as_array: bool,
    /// Whether clipped geometries inherit the identifier of their source.
    pub clone_id: bool,
    /// The tolerance deciding when two segments are parallel.
    pub tolerance: Tolerance<T>,
}

impl<T> Default for ClipOptions<T>
where
    T: Default,
{
    fn default() -> Self {
        Self {
            return_as_array: true,
            clone_id: false,
            tolerance: Tolerance::default(),
        }
    }
}

/// Clips any [`Geometry`] against a rectangle.
///
/// ```
/// use rectclip::{Bounds, Clipper, Geometry, LineString};
///
/// let line = LineString::from(vec![[-5., 5.], [15., 5.]]);
/// let clipped = Clipper::new(Bounds::new(0., 0., 10., 10.))
///     .clip(&line.into())
///     .unwrap();
///
/// assert_eq!(
///     clipped,
///     Some(Geometry::LineString(LineString::from(vec![[0., 5.], [10., 5.]])))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clipper<T> {
    rect: Bounds<T>,
    options: ClipOptions<T>,
}

impl<T> Clipper<T>
where
    T: Default,
{
    /// Returns a clipper for the given rectangle with the default options.
    pub fn new(rect: Bounds<T>) -> Self {
        Self {
            rect,
            options: ClipOptions::default(),
        }
    }
}

impl<T> Clipper<T> {
    pub fn with_options(mut self, options: ClipOptions<T>) -> Self {
        self.options = options;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance<T>) -> Self {
        self.options.tolerance = tolerance;
        self
    }

    pub fn return_as_array(mut self, return_as_array: bool) -> Self {
        self.options.return_as_array = return_as_array;
        self
    }

    pub fn clone_id(mut self, clone_id: bool) -> Self {
        self.options.clone_id = clone_id;
        self
    }

    pub fn rect(&self) -> &Bounds<T> {
        &self.rect
    }

    pub fn options(&self) -> &ClipOptions<T> {
        &self.options
    }
}

impl<T> Clipper<T>
where
    T: Float,
{
    /// Performs the clipping of the given geometry, see [`clip_geometry`].
    pub fn clip(&self, geometry: &Geometry<T>) -> Result<Option<Geometry<T>>> {
        clip_geometry(geometry, &self.rect, &self.options)
    }
}

/// Clips the given geometry against the rectangle, choosing the clipping algorithm by its
/// kind.
///
/// Returns `None` if nothing of the geometry lays inside the rectangle. Points, and any
/// geometry with a part too small to be clipped, are returned unchanged wherever they lay.
pub fn clip_geometry<T>(
    geometry: &Geometry<T>,
    rect: &Bounds<T>,
    options: &ClipOptions<T>,
) -> Result<Option<Geometry<T>>>
where
    T: Float,
{
    rect.ensure_valid()?;

    match geometry {
        Geometry::LineString(line) if line.len() > 1 => {
            Ok(clip_line_string(line, rect, options)?.map(LineClip::into_geometry))
        }
        Geometry::LinearRing(ring) if ring.len() > 1 => {
            if let FastPath::Contained = FastPath::new(ring, rect) {
                return Ok(Some(geometry.clone()));
            }

            Ok(clip_linear_ring(ring, rect, options)?.map(LineClip::into_geometry))
        }
        Geometry::MultiLineString(multi)
            if !multi.lines.is_empty() && multi.lines.iter().all(|line| line.len() > 1) =>
        {
            Ok(clip_multi_line_string(multi, rect, options)?.map(Geometry::MultiLineString))
        }
        Geometry::Polygon(polygon) if is_clippable(polygon) => {
            Ok(clip_polygon(polygon, rect, options)?.map(Geometry::Polygon))
        }
        Geometry::MultiPolygon(multi)
            if !multi.polygons.is_empty() && multi.polygons.iter().all(is_clippable) =>
        {
            let options = ClipOptions {
                return_as_array: true,
                ..*options
            };

            Ok(clip_multi_polygon(multi, rect, &options)?.map(Geometry::MultiPolygon))
        }
        other => {
            log::trace!("{} passed through the clipper unchanged", other.kind());
            Ok(Some(other.clone()))
        }
    }
}

/// Returns true if, and only if, the polygon has a shell and none of its rings has less than
/// 3 points.
fn is_clippable<T>(polygon: &Polygon<T>) -> bool {
    !polygon.rings.is_empty() && polygon.rings.iter().all(|ring| ring.len() > 2)
}

impl<T> LineClip<T> {
    /// Returns the clipped line as a single geometry.
    ///
    /// A single piece is returned as is, while several pieces are collected into a
    /// [`MultiLineString`] with no identifier.
    pub fn into_geometry(self) -> Geometry<T> {
        match self {
            LineClip::Joined(line) => Geometry::LineString(line),
            LineClip::Parts(lines) => match <[LineString<T>; 1]>::try_from(lines) {
                Ok([line]) => Geometry::LineString(line),
                Err(lines) => Geometry::MultiLineString(MultiLineString::new(lines)),
            },
        }
    }
}

/// The outcome of comparing the bounds of a geometry with the clipping rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FastPath {
    /// The geometry is fully outside the rectangle.
    Disjoint,
    /// The geometry is fully inside the rectangle.
    Contained,
    /// The geometry crosses the boundary of the rectangle.
    Clip,
}

impl FastPath {
    pub(crate) fn new<G, T>(geometry: &G, rect: &Bounds<T>) -> Self
    where
        G: Bounded<Scalar = T>,
        T: Float,
    {
        let Some(bounds) = geometry.bounds() else {
            return FastPath::Disjoint;
        };

        if !rect.intersects_bounds(&bounds, IntersectsOptions::default()) {
            FastPath::Disjoint
        } else if rect.contains_bounds(&bounds, false, true) {
            FastPath::Contained
        } else {
            FastPath::Clip
        }
    }
}

/// Returns an error if the given path has less than `min` points.
pub(crate) fn ensure_min_points<T>(
    kind: Kind,
    points: &[T],
    min: usize,
) -> Result<()> {
    if points.len() >= min {
        return Ok(());
    }

    Err(Error::InvalidGeometry {
        kind,
        reason: format!("expected at least {min} points, got {}", points.len()),
    })
}

/// Returns the identifier of the n-th piece a line with the given identifier is clipped into.
pub(crate) fn piece_id(id: &str, position: usize) -> String {
    if position == 0 {
        id.to_string()
    } else {
        format!("{id}_clip_{position}")
    }
}
