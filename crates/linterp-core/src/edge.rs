//! Boundary behavior for inputs outside the sampled domain.
//!
//! | Policy | Below `domain[0]` | At/above `domain[last]` |
//! |--------|-------------------|-------------------------|
//! | Clamp | `range[0]` | `range[last]` |
//! | Extrapolate | first segment continued | last segment continued |
//! | Undef | no value | `range[last]` at exactly `domain[last]`, else no value |
//! | Die | low-side error | `range[last]` at exactly `domain[last]`, else high-side error |
//!
//! Under `Extrapolate`, an edge whose outermost interval has zero width has
//! no slope to continue and falls back to the edge's range value.

use crate::error::BoundSide;
use crate::options::EdgePolicy;
use crate::segment::{Beyond, Segment};

/// Wraps built segments with boundary segments for `policy`.
///
/// `domain` and `range` are the validated points the segments were built
/// from. The result always starts with the only unthresholded segment.
#[must_use]
pub fn apply_edge_policy(
    mut segments: Vec<Segment>,
    domain: &[f64],
    range: &[f64],
    policy: EdgePolicy,
) -> Vec<Segment> {
    let (Some(&x_first), Some(&x_last)) = (domain.first(), domain.last()) else {
        return segments;
    };
    let (Some(&y_first), Some(&y_last)) = (range.first(), range.last()) else {
        return segments;
    };

    let (head, tail) = match policy {
        EdgePolicy::Clamp => (
            Some(Segment::constant(None, y_first)),
            Some(Segment::constant(Some(x_last), y_last)),
        ),
        EdgePolicy::Extrapolate => {
            let n = domain.len();
            let head = if n < 2 || domain[1] == x_first {
                Some(Segment::constant(None, y_first))
            } else {
                // The first interval has width, so the first segment starts
                // at `domain[0]` and can take over everything below it.
                if let Some(first) = segments.first_mut() {
                    first.threshold = None;
                }
                None
            };
            let tail = (n < 2 || domain[n - 2] == x_last)
                .then(|| Segment::constant(Some(x_last), y_last));
            (head, tail)
        }
        EdgePolicy::Undef => (
            Some(Segment::undefined(None)),
            Some(Segment::endpoint(x_last, y_last, Beyond::Undefined)),
        ),
        EdgePolicy::Die => (
            Some(Segment::out_of_bounds(None, BoundSide::Low, x_first)),
            Some(Segment::endpoint(
                x_last,
                y_last,
                Beyond::OutOfBounds { bound: x_last },
            )),
        ),
    };

    let mut wrapped = Vec::with_capacity(segments.len() + 2);
    wrapped.extend(head);
    wrapped.append(&mut segments);
    wrapped.extend(tail);
    wrapped
}
