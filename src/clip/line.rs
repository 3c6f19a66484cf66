use num_traits::Float;

use crate::{
    Bounds, IsClose,
    clip::{ClipOptions, FastPath, clip_segment, ensure_min_points, piece_id},
    error::Result,
    geometry::{Kind, LineString, LinearRing, Point},
};

/// The result of clipping a line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClip<T> {
    /// Every piece of the line laying inside the rectangle, in order.
    Parts(Vec<LineString<T>>),
    /// A single line through all the pieces, bridging the gaps between them.
    Joined(LineString<T>),
}

impl<T> LineClip<T> {
    /// Returns the amount of lines in the clip.
    pub fn len(&self) -> usize {
        match self {
            LineClip::Parts(lines) => lines.len(),
            LineClip::Joined(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Clips the given line string against the rectangle.
///
/// Returns `None` if no piece of the line lays inside the rectangle, and the very same line
/// if it is fully inside.
pub fn clip_line_string<T>(
    line: &LineString<T>,
    rect: &Bounds<T>,
    options: &ClipOptions<T>,
) -> Result<Option<LineClip<T>>>
where
    T: Float,
{
    ensure_min_points(Kind::LineString, &line.points, 2)?;
    rect.ensure_valid()?;

    match FastPath::new(line, rect) {
        FastPath::Disjoint => {
            log::trace!("line string {:?} is disjoint with the rectangle", line.id);
            Ok(None)
        }
        FastPath::Contained => Ok(Some(LineClip::Parts(vec![line.clone()]))),
        FastPath::Clip => Ok(clip_path(&line.points, line.id(), rect, options)),
    }
}

/// Clips the given linear ring against the rectangle as if it was an open path: the segment
/// closing the ring is never clipped.
pub fn clip_linear_ring<T>(
    ring: &LinearRing<T>,
    rect: &Bounds<T>,
    options: &ClipOptions<T>,
) -> Result<Option<LineClip<T>>>
where
    T: Float,
{
    ensure_min_points(Kind::LinearRing, &ring.points, 2)?;
    rect.ensure_valid()?;

    match FastPath::new(ring, rect) {
        FastPath::Disjoint => {
            log::trace!("linear ring {:?} is disjoint with the rectangle", ring.id);
            Ok(None)
        }
        FastPath::Contained => Ok(Some(LineClip::Parts(vec![ring.clone().into()]))),
        FastPath::Clip => Ok(clip_path(&ring.points, ring.id(), rect, options)),
    }
}

fn clip_path<T>(
    points: &[Point<T>],
    id: Option<&str>,
    rect: &Bounds<T>,
    options: &ClipOptions<T>,
) -> Option<LineClip<T>>
where
    T: Float,
{
    let pieces: Vec<[Point<T>; 2]> = points
        .iter()
        .zip(points.iter().skip(1))
        .filter_map(|(from, to)| clip_piece(from, to, rect, options))
        .collect();

    if pieces.is_empty() {
        return None;
    }

    let id = id.filter(|_| options.clone_id);

    if !options.return_as_array {
        let mut line = LineString::new(pieces.into_iter().flatten().collect());
        line.id = id.map(ToString::to_string);
        return Some(LineClip::Joined(line));
    }

    let lines = pieces
        .into_iter()
        .enumerate()
        .map(|(position, piece)| {
            let mut line = LineString::new(piece.to_vec());
            line.id = id.map(|id| piece_id(id, position));
            line
        })
        .collect();

    Some(LineClip::Parts(lines))
}

/// Returns the piece of the segment from `from` to `to` laying inside the rectangle, if any.
fn clip_piece<T>(
    from: &Point<T>,
    to: &Point<T>,
    rect: &Bounds<T>,
    options: &ClipOptions<T>,
) -> Option<[Point<T>; 2]>
where
    T: Float,
{
    let mut crossings = clip_segment(from, to, rect, &options.tolerance);

    // The same corner is reported once per edge it belongs to.
    crossings.sort_by(|a, b| {
        a.distance_squared(from)
            .partial_cmp(&b.distance_squared(from))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    crossings.dedup_by(|a, b| a.is_close(b, &options.tolerance));

    match crossings.as_slice() {
        [first, .., last] => Some([*first, *last]),
        [crossing] if rect.contains(from.x, from.y, false) => Some([*from, *crossing]),
        [crossing] if rect.contains(to.x, to.y, false) => Some([*crossing, *to]),
        [_] => None,
        [] if rect.contains(from.x, from.y, true) && rect.contains(to.x, to.y, true) => {
            Some([*from, *to])
        }
        [] => None,
    }
}
