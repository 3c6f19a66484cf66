use num_traits::Float;

use crate::{Bounds, Tolerance, geometry::Point, segment::Segment};

/// Returns the points where the segment from `from` to `to` crosses the boundary of the
/// rectangle.
///
/// The edges are visited in the order bottom, right, top and left. A segment crossing a
/// corner yields that corner once per edge it touches, and a segment laying on an edge
/// yields nothing for that edge.
pub fn clip_segment<T>(
    from: &Point<T>,
    to: &Point<T>,
    rect: &Bounds<T>,
    tolerance: &Tolerance<T>,
) -> Vec<Point<T>>
where
    T: Float,
{
    let [left_bottom, right_bottom, right_top, left_top] = rect.corners();
    let segment = Segment::new(from, to);

    [
        Segment::new(&left_bottom, &right_bottom),
        Segment::new(&right_bottom, &right_top),
        Segment::new(&right_top, &left_top),
        Segment::new(&left_top, &left_bottom),
    ]
    .iter()
    .filter_map(|edge| edge.intersection(&segment, tolerance).point())
    .collect()
}
