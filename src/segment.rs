//! Straight segments and their intersection.

use num_traits::Float;

use crate::{IsClose, Tolerance, determinant::Determinant, geometry::Point};

/// The relationship between two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection<T> {
    /// The segments cross, or touch, at a single point.
    Point(Point<T>),
    /// The lines supporting the segments cross out of, at least, one of them.
    NoIntersection,
    /// The segments never meet: either they have the same direction, or they are collinear
    /// with disjoint extents.
    Parallel,
    /// The segments are collinear and their extents overlap.
    Coincident,
}

impl<T> Intersection<T> {
    /// Returns the intersection point, if any.
    pub fn point(self) -> Option<Point<T>> {
        match self {
            Intersection::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Intersection::Point(_))
    }
}

/// The straight line between two endpoints.
#[derive(Debug)]
pub struct Segment<'a, T> {
    /// The first point in the segment.
    pub from: &'a Point<T>,
    /// The last point in the segment.
    pub to: &'a Point<T>,
}

impl<'a, T> Segment<'a, T> {
    pub fn new(from: &'a Point<T>, to: &'a Point<T>) -> Self {
        Self { from, to }
    }
}

impl<T> Segment<'_, T>
where
    T: Float,
{
    /// Returns the relationship between self and rhs.
    ///
    /// The determinants deciding whether the segments are parallel are compared against zero
    /// with the given tolerance. Segments of length zero are not special-cased: they behave
    /// as collinear with any other segment.
    pub fn intersection(&self, rhs: &Segment<'_, T>, tolerance: &Tolerance<T>) -> Intersection<T> {
        let zero = T::zero();
        let denominator = Determinant::new(self, rhs).into_inner();
        let along_self = Determinant::from([rhs.from, rhs.to, self.from]).into_inner();
        let along_rhs = -Determinant::from([self.from, self.to, rhs.from]).into_inner();

        if !denominator.is_close(&zero, tolerance) {
            let t = along_self / denominator;
            let u = along_rhs / denominator;

            let in_range = |k: T| k >= zero && k <= T::one();
            if !in_range(t) || !in_range(u) {
                return Intersection::NoIntersection;
            }

            return Intersection::Point(Point {
                x: self.from.x + t * (self.to.x - self.from.x),
                y: self.from.y + t * (self.to.y - self.from.y),
            });
        }

        if !along_self.is_close(&zero, tolerance) || !along_rhs.is_close(&zero, tolerance) {
            return Intersection::Parallel;
        }

        if self.overlaps(rhs) {
            Intersection::Coincident
        } else {
            Intersection::Parallel
        }
    }

    /// Returns true if, and only if, the bounding boxes of self and rhs overlap in both axis.
    fn overlaps(&self, rhs: &Segment<'_, T>) -> bool {
        let overlap = |a: [T; 2], b: [T; 2]| {
            a[0].min(a[1]).max(b[0].min(b[1])) <= a[0].max(a[1]).min(b[0].max(b[1]))
        };

        overlap([self.from.x, self.to.x], [rhs.from.x, rhs.to.x])
            && overlap([self.from.y, self.to.y], [rhs.from.y, rhs.to.y])
    }
}
