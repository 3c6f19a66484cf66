use num_traits::Float;

use crate::{
    Bounded, Bounds, Tolerance,
    clip::{ClipOptions, FastPath, ensure_min_points},
    error::Result,
    geometry::{Kind, LinearRing, Point, Polygon},
    segment::Segment,
};

/// A side of the clipping rectangle, in the order the half-plane passes visit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    /// Returns true if, and only if, the given point lays in the half-plane this side of the
    /// rectangle keeps. Points on the side itself are inside.
    fn is_inside<T>(self, point: &Point<T>, rect: &Bounds<T>) -> bool
    where
        T: Float,
    {
        match self {
            Side::Left => point.x >= rect.left,
            Side::Top => point.y <= rect.top,
            Side::Right => point.x <= rect.right,
            Side::Bottom => point.y >= rect.bottom,
        }
    }

    /// Returns the line along this side of the rectangle, stretched to cover the given bounds
    /// too. The lines run clockwise around the rectangle.
    fn extension_line<T>(self, rect: &Bounds<T>, bounds: &Bounds<T>) -> [Point<T>; 2]
    where
        T: Float,
    {
        let bottom = rect.bottom.min(bounds.bottom);
        let top = rect.top.max(bounds.top);
        let left = rect.left.min(bounds.left);
        let right = rect.right.max(bounds.right);

        match self {
            Side::Left => [Point::new(rect.left, bottom), Point::new(rect.left, top)],
            Side::Top => [Point::new(left, rect.top), Point::new(right, rect.top)],
            Side::Right => [Point::new(rect.right, top), Point::new(rect.right, bottom)],
            Side::Bottom => [Point::new(right, rect.bottom), Point::new(left, rect.bottom)],
        }
    }
}

/// Clips every ring of the given polygon against the rectangle.
///
/// Rings are clipped independently of each other, so a clipped hole is not guaranteed to
/// remain inside the clipped shell. Returns `None` if every ring is clipped away.
///
/// A ring is only dropped when it keeps 2 points or less. A ring touching the rectangle at
/// a single point or along an edge therefore survives with no area: a triangle whose only
/// vertex on the rectangle is `(0, 5)` clips to the ring `[(0, 5), (0, 5), (0, 5)]`.
///
/// Every ring must have at least 3 points, wherever it lays.
pub fn clip_polygon<T>(
    polygon: &Polygon<T>,
    rect: &Bounds<T>,
    options: &ClipOptions<T>,
) -> Result<Option<Polygon<T>>>
where
    T: Float,
{
    for ring in &polygon.rings {
        ensure_min_points(Kind::LinearRing, &ring.points, 3)?;
    }

    rect.ensure_valid()?;

    match FastPath::new(polygon, rect) {
        FastPath::Disjoint => {
            log::trace!("polygon {:?} is disjoint with the rectangle", polygon.id);
            return Ok(None);
        }
        FastPath::Contained => return Ok(Some(polygon.clone())),
        FastPath::Clip => {}
    }

    let rings: Vec<_> = polygon
        .rings
        .iter()
        .enumerate()
        .filter_map(|(position, ring)| {
            let clipped = clip_ring(ring, rect, options);
            if clipped.is_none() {
                log::debug!("ring {position} of polygon {:?} clipped away", polygon.id);
            }

            clipped
        })
        .collect();

    if rings.is_empty() {
        return Ok(None);
    }

    let mut clipped = Polygon::new(rings);
    if options.clone_id {
        clipped.id = polygon.id.clone();
    }

    Ok(Some(clipped))
}

/// Clips a single ring with the Sutherland-Hodgman algorithm, one side of the rectangle at a
/// time.
fn clip_ring<T>(
    ring: &LinearRing<T>,
    rect: &Bounds<T>,
    options: &ClipOptions<T>,
) -> Option<LinearRing<T>>
where
    T: Float,
{
    let bounds = ring.bounds()?;
    if rect.contains_bounds(&bounds, false, true) {
        return Some(ring.clone());
    }

    let points = Side::ALL
        .into_iter()
        .fold(ring.points.clone(), |points, side| {
            let line = side.extension_line(rect, &bounds);
            clip_half_plane(&points, side, rect, &line, &options.tolerance)
        });

    if points.len() <= 2 {
        return None;
    }

    let mut clipped = LinearRing::new(points);
    if options.clone_id {
        clipped.id = ring.id.clone();
    }

    Some(clipped)
}

/// Returns the points of the given closed path kept by one side of the rectangle, with the
/// crossings of the path with that side inserted where they belong.
fn clip_half_plane<T>(
    points: &[Point<T>],
    side: Side,
    rect: &Bounds<T>,
    line: &[Point<T>; 2],
    tolerance: &Tolerance<T>,
) -> Vec<Point<T>>
where
    T: Float,
{
    let Some(mut previous) = points.last() else {
        return Vec::new();
    };

    let [line_from, line_to] = line;
    let line = Segment::new(line_from, line_to);
    let crossing = |from: &Point<T>, to: &Point<T>| {
        let crossing = Segment::new(from, to).intersection(&line, tolerance).point();
        if crossing.is_none() {
            log::debug!("edge crossing the {side:?} side has no intersection with it");
        }

        crossing
    };

    let mut outside = !side.is_inside(previous, rect);
    let mut clipped = Vec::with_capacity(points.len() + 2);
    for current in points {
        if side.is_inside(current, rect) {
            if outside {
                outside = false;
                clipped.extend(crossing(previous, current));
            }

            clipped.push(*current);
        } else if !outside {
            outside = true;
            clipped.extend(crossing(previous, current));
        }

        previous = current;
    }

    clipped
}
