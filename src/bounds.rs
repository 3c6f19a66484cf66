//! Axis-aligned rectangles and their arithmetic.

use std::{fmt, str::FromStr};

use num_traits::Float;

use crate::{
    error::{Error, Result},
    geometry::{LinearRing, Point, Polygon},
};

/// The amount of decimals [`Bounds::to_bbox`] rounds to when none is given.
pub const DEFAULT_BBOX_DECIMALS: i32 = 6;

/// An axis-aligned rectangle in the plane.
///
/// Nothing prevents building a rectangle whose left side is greater than its right side, but
/// every clipping operation rejects such bounds with [`Error::InvalidBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T = f64> {
    /// The minimum horizontal coordinate.
    pub left: T,
    /// The minimum vertical coordinate.
    pub bottom: T,
    /// The maximum horizontal coordinate.
    pub right: T,
    /// The maximum vertical coordinate.
    pub top: T,
}

impl<T> From<[T; 4]> for Bounds<T> {
    fn from([left, bottom, right, top]: [T; 4]) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

impl<T> From<Point<T>> for Bounds<T>
where
    T: Copy,
{
    fn from(point: Point<T>) -> Self {
        Self {
            left: point.x,
            bottom: point.y,
            right: point.x,
            top: point.y,
        }
    }
}

impl<T> fmt::Display for Bounds<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.bottom, self.right, self.top)
    }
}

impl<T> FromStr for Bounds<T>
where
    T: FromStr + Copy,
{
    type Err = Error;

    /// Parses a comma separated `left,bottom,right,top` string.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|value| {
                value
                    .trim()
                    .parse::<T>()
                    .map_err(|_| Error::ParseBounds(format!("{value:?} is not a number")))
            })
            .collect::<Result<Vec<T>>>()?;

        match values.as_slice() {
            &[left, bottom, right, top] => Ok(Self {
                left,
                bottom,
                right,
                top,
            }),
            other => Err(Error::ParseBounds(format!(
                "expected 4 values, got {}",
                other.len()
            ))),
        }
    }
}

/// The options of [`Bounds::contains_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainsOptions<T> {
    /// Whether points on the boundary are contained.
    pub inclusive: bool,
    /// The extent of the world, used to wrap points across the dateline.
    pub world_bounds: Option<Bounds<T>>,
}

impl<T> Default for ContainsOptions<T> {
    fn default() -> Self {
        Self {
            inclusive: true,
            world_bounds: None,
        }
    }
}

/// The options of [`Bounds::intersects_bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectsOptions<T> {
    /// Whether bounds sharing only an edge do intersect.
    pub inclusive: bool,
    /// The extent of the world, used to wrap bounds across the dateline.
    pub world_bounds: Option<Bounds<T>>,
}

impl<T> Default for IntersectsOptions<T> {
    fn default() -> Self {
        Self {
            inclusive: true,
            world_bounds: None,
        }
    }
}

/// The options of [`Bounds::wrap_date_line`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WrapOptions<T> {
    /// Allowed overlap of the left side past the right edge of the world.
    pub left_tolerance: T,
    /// Allowed overlap of the right side past the left edge of the world.
    pub right_tolerance: T,
}

/// One of the four quarters of a [`Bounds`], split by its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Quadrant {
    /// Returns the quadrant diagonally across from self.
    pub fn opposite(self) -> Self {
        match self {
            Quadrant::BottomLeft => Quadrant::TopRight,
            Quadrant::BottomRight => Quadrant::TopLeft,
            Quadrant::TopLeft => Quadrant::BottomRight,
            Quadrant::TopRight => Quadrant::BottomLeft,
        }
    }

    /// Returns the two letters code of the quadrant (`bl`, `br`, `tl` or `tr`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::BottomLeft => "bl",
            Quadrant::BottomRight => "br",
            Quadrant::TopLeft => "tl",
            Quadrant::TopRight => "tr",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> Bounds<T> {
    /// Returns the bounds with the given sides.
    pub fn new(left: T, bottom: T, right: T, top: T) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Builds the bounds from a `[left, bottom, right, top]` array, or from a
    /// `[bottom, left, top, right]` one if the axis order is reversed.
    pub fn from_array([a, b, c, d]: [T; 4], reverse_axis_order: bool) -> Self {
        if reverse_axis_order {
            Self::new(b, a, d, c)
        } else {
            Self::new(a, b, c, d)
        }
    }
}

impl<T> Bounds<T>
where
    T: Copy,
{
    /// Returns the sides of self as `[left, bottom, right, top]`, or as
    /// `[bottom, left, top, right]` if the axis order is reversed.
    pub fn to_array(&self, reverse_axis_order: bool) -> [T; 4] {
        if reverse_axis_order {
            [self.bottom, self.left, self.top, self.right]
        } else {
            [self.left, self.bottom, self.right, self.top]
        }
    }

    /// Returns the corners of self in the order left-bottom, right-bottom, right-top and
    /// left-top.
    pub fn corners(&self) -> [Point<T>; 4] {
        [
            Point::new(self.left, self.bottom),
            Point::new(self.right, self.bottom),
            Point::new(self.right, self.top),
            Point::new(self.left, self.top),
        ]
    }

    /// Returns the polygon with a single ring tracing the corners of self.
    pub fn to_polygon(&self) -> Polygon<T> {
        Polygon::new(vec![LinearRing::new(self.corners().to_vec())])
    }
}

impl<T> Bounds<T>
where
    T: Float,
{
    /// Returns the bounds of size `width` x `height` whose top side lays on the origin, as used
    /// by screen coordinates.
    pub fn from_size(width: T, height: T) -> Self {
        Self::new(T::zero(), height, width, T::zero())
    }

    /// Returns the smallest bounds enclosing all the given points, if any.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<T>>,
        T: 'a,
    {
        points.into_iter().fold(None, |bounds, point| {
            let mut bounds = bounds.unwrap_or_else(|| Self::from(*point));
            bounds.extend(*point);
            Some(bounds)
        })
    }

    /// Returns true if, and only if, all sides are finite and ordered.
    pub fn is_valid(&self) -> bool {
        [self.left, self.bottom, self.right, self.top]
            .iter()
            .all(|side| side.is_finite())
            && self.left <= self.right
            && self.bottom <= self.top
    }

    /// Returns an error if self is not valid.
    pub(crate) fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }

        let to_f64 = |value: T| value.to_f64().unwrap_or(f64::NAN);
        Err(Error::InvalidBounds {
            left: to_f64(self.left),
            bottom: to_f64(self.bottom),
            right: to_f64(self.right),
            top: to_f64(self.top),
        })
    }

    pub fn width(&self) -> T {
        self.right - self.left
    }

    pub fn height(&self) -> T {
        self.top - self.bottom
    }

    /// Returns the width and height of self.
    pub fn size(&self) -> (T, T) {
        (self.width(), self.height())
    }

    /// Returns the middle point of self.
    pub fn center(&self) -> Point<T> {
        let two = T::one() + T::one();
        Point::new(
            (self.left + self.right) / two,
            (self.bottom + self.top) / two,
        )
    }

    /// Returns self scaled by the given ratio around the given origin, or around the center of
    /// self if none is given.
    pub fn scale(&self, ratio: T, origin: Option<Point<T>>) -> Self {
        let origin = origin.unwrap_or_else(|| self.center());
        let scale_x = |x: T| (x - origin.x) * ratio + origin.x;
        let scale_y = |y: T| (y - origin.y) * ratio + origin.y;

        Self::new(
            scale_x(self.left),
            scale_y(self.bottom),
            scale_x(self.right),
            scale_y(self.top),
        )
    }

    /// Returns self translated by the given offsets.
    pub fn add(&self, x: T, y: T) -> Self {
        Self::new(self.left + x, self.bottom + y, self.right + x, self.top + y)
    }

    /// Grows self in place, if necessary, to enclose the given point or bounds.
    pub fn extend(&mut self, other: impl Into<Bounds<T>>) {
        let other = other.into();
        self.left = self.left.min(other.left);
        self.bottom = self.bottom.min(other.bottom);
        self.right = self.right.max(other.right);
        self.top = self.top.max(other.top);
    }

    /// Returns true if, and only if, the given coordinates are inside self. If `inclusive` is
    /// true, coordinates on the boundary are inside too.
    pub fn contains(&self, x: T, y: T, inclusive: bool) -> bool {
        if inclusive {
            x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
        } else {
            x > self.left && x < self.right && y > self.bottom && y < self.top
        }
    }

    /// Returns true if, and only if, the given point is inside self.
    ///
    /// When the world bounds are given, a point out of self may still be contained if shifting
    /// it a whole number of world widths brings it inside.
    pub fn contains_point(&self, point: &Point<T>, options: ContainsOptions<T>) -> bool {
        if self.contains(point.x, point.y, options.inclusive) {
            return true;
        }

        let Some(world) = options.world_bounds else {
            return false;
        };

        let width = world.width();
        let worlds_away = ((point.x - world.center().x) / width).round();
        self.contains(point.x - worlds_away * width, point.y, options.inclusive)
    }

    /// Returns true if, and only if, all corners of the given bounds are inside self, or any of
    /// them if `partial` is true.
    pub fn contains_bounds(&self, bounds: &Bounds<T>, partial: bool, inclusive: bool) -> bool {
        let mut corners = bounds
            .corners()
            .into_iter()
            .map(|corner| self.contains(corner.x, corner.y, inclusive));

        if partial {
            corners.any(|contained| contained)
        } else {
            corners.all(|contained| contained)
        }
    }

    /// Returns true if, and only if, self and the given bounds overlap.
    ///
    /// Bounds sharing nothing but an edge only intersect when the comparison is inclusive. When
    /// the world bounds are given, both rectangles are wrapped across the dateline first, and
    /// a rectangle crossing the dateline is also tested one world width to the left.
    pub fn intersects_bounds(&self, bounds: &Bounds<T>, options: IntersectsOptions<T>) -> bool {
        let exact = WrapOptions {
            left_tolerance: T::zero(),
            right_tolerance: T::zero(),
        };

        let (this, other) = match &options.world_bounds {
            Some(world) => (
                self.wrap_date_line(world, exact),
                bounds.wrap_date_line(world, exact),
            ),
            None => (*self, *bounds),
        };

        let intersects = this.overlaps(&other, options.inclusive);
        if intersects {
            return true;
        }

        let Some(world) = options.world_bounds else {
            return false;
        };

        let width = world.width();
        let this_crosses = !world.contains_bounds(&this, false, true);
        let other_crosses = !world.contains_bounds(&other, false, true);
        let plain = IntersectsOptions {
            inclusive: options.inclusive,
            world_bounds: None,
        };

        if this_crosses && !other_crosses {
            this.intersects_bounds(&other.add(-width, T::zero()), plain)
        } else if other_crosses && !this_crosses {
            other.intersects_bounds(&this.add(-width, T::zero()), plain)
        } else {
            false
        }
    }

    /// Plain overlap test, with no dateline handling.
    fn overlaps(&self, other: &Bounds<T>, inclusive: bool) -> bool {
        let might_touch = self.left == other.right
            || self.right == other.left
            || self.top == other.bottom
            || self.bottom == other.top;

        if !inclusive && might_touch {
            return false;
        }

        let in_bottom = (other.bottom >= self.bottom && other.bottom <= self.top)
            || (self.bottom >= other.bottom && self.bottom <= other.top);
        let in_top = (other.top >= self.bottom && other.top <= self.top)
            || (self.top > other.bottom && self.top < other.top);
        let in_left = (other.left >= self.left && other.left <= self.right)
            || (self.left >= other.left && self.left <= other.right);
        let in_right = (other.right >= self.left && other.right <= self.right)
            || (self.right >= other.left && self.right <= other.right);

        (in_bottom || in_top) && (in_left || in_right)
    }

    /// Returns self shifted a whole number of world widths so that it lays, as much as
    /// possible, inside the given maximum extent.
    pub fn wrap_date_line(&self, max_extent: &Bounds<T>, options: WrapOptions<T>) -> Self {
        let width = max_extent.width();
        if !(width > T::zero()) || !width.is_finite() {
            return *self;
        }

        let mut wrapped = *self;
        while wrapped.left < max_extent.left
            && wrapped.right - options.right_tolerance <= max_extent.left
        {
            wrapped = wrapped.add(width, T::zero());
        }

        while wrapped.left + options.left_tolerance >= max_extent.right
            && wrapped.right > max_extent.right
        {
            wrapped = wrapped.add(-width, T::zero());
        }

        let left = wrapped.left + options.left_tolerance;
        if left < max_extent.right
            && left > max_extent.left
            && wrapped.right - options.right_tolerance > max_extent.right
        {
            wrapped = wrapped.add(-width, T::zero());
        }

        wrapped
    }

    /// Returns the quadrant of self the given point belongs to.
    pub fn determine_quadrant(&self, point: &Point<T>) -> Quadrant {
        let center = self.center();
        match (point.y < center.y, point.x < center.x) {
            (true, true) => Quadrant::BottomLeft,
            (true, false) => Quadrant::BottomRight,
            (false, true) => Quadrant::TopLeft,
            (false, false) => Quadrant::TopRight,
        }
    }
}

impl<T> Bounds<T>
where
    T: Float + fmt::Display,
{
    /// Returns the sides of self, rounded to the given amount of decimals, as a comma
    /// separated string.
    pub fn to_bbox(&self, decimals: i32, reverse_axis_order: bool) -> String {
        let five = T::one() + T::one() + T::one() + T::one() + T::one();
        let multiplier = (five + five).powi(decimals);
        let round = |value: T| (value * multiplier).round() / multiplier;

        let [a, b, c, d] = self.to_array(reverse_axis_order).map(round);
        format!("{a},{b},{c},{d}")
    }
}
