use num_traits::Float;

use crate::{
    Bounds,
    clip::{ClipOptions, FastPath, LineClip, clip_line_string, ensure_min_points},
    error::Result,
    geometry::{Kind, MultiLineString},
};

/// Clips every line of the given collection against the rectangle, gathering all the
/// resulting pieces into a single collection.
///
/// Returns `None` if no piece of any line lays inside the rectangle. Every line must have at
/// least 2 points, wherever it lays.
pub fn clip_multi_line_string<T>(
    multi: &MultiLineString<T>,
    rect: &Bounds<T>,
    options: &ClipOptions<T>,
) -> Result<Option<MultiLineString<T>>>
where
    T: Float,
{
    for line in &multi.lines {
        ensure_min_points(Kind::LineString, &line.points, 2)?;
    }

    rect.ensure_valid()?;

    match FastPath::new(multi, rect) {
        FastPath::Disjoint => {
            log::trace!("multi line string {:?} is disjoint with the rectangle", multi.id);
            return Ok(None);
        }
        FastPath::Contained => return Ok(Some(multi.clone())),
        FastPath::Clip => {}
    }

    let mut lines = Vec::new();
    for (position, line) in multi.lines.iter().enumerate() {
        match clip_line_string(line, rect, options)? {
            Some(LineClip::Parts(parts)) => lines.extend(parts),
            Some(LineClip::Joined(joined)) => lines.push(joined),
            None => log::debug!("line {position} of multi line string {:?} clipped away", multi.id),
        }
    }

    if lines.is_empty() {
        return Ok(None);
    }

    let mut clipped = MultiLineString::new(lines);
    if options.clone_id {
        clipped.id = multi.id.clone();
    }

    Ok(Some(clipped))
}
