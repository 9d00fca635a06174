//! Clipping phase: confine candidates to the target's bounding box.

use crate::geometry::Rect;
use crate::RectId;

/// A candidate intersected with the target, tagged with its sweep identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedRect {
    pub(crate) id: RectId,
    pub(crate) rect: Rect,
}

/// Outcome of the clipping phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Clipped {
    /// The candidate at `index` clips to exactly the target; it would have
    /// been given identifier `id`.
    FullCover { index: usize, id: RectId },
    /// Candidates that overlap the target, in input order.
    Rects(Vec<ClippedRect>),
}

/// Clips every candidate to `target`, dropping the ones outside it.
///
/// Identifiers start at 1 and advance once per accepted candidate, so skipped
/// candidates leave gaps in the numbering. Stops at the first candidate that
/// covers the target on its own.
pub fn clip_all(target: &Rect, rectangles: &[Rect]) -> Clipped {
    let mut clipped = Vec::with_capacity(rectangles.len());
    let mut next_id: RectId = 1;

    for (index, candidate) in rectangles.iter().enumerate() {
        let Some(rect) = candidate.clip_to(target) else {
            continue;
        };
        if rect == *target {
            return Clipped::FullCover { index, id: next_id };
        }
        clipped.push(ClippedRect { id: next_id, rect });
        next_id += 1;
    }

    Clipped::Rects(clipped)
}
