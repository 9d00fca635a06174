//! Active set: clipped rectangles whose x-range contains the sweep position.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::clip::ClippedRect;
use crate::geometry::{Interval, Rect};
use crate::RectId;

/// Rectangles currently crossed by the sweep line, able to answer whether
/// their y-ranges jointly cover a span.
pub trait ActiveSet {
    /// Adds a rectangle whose x-range starts at the sweep position.
    fn activate(&mut self, clipped: &ClippedRect);

    /// Removes a rectangle whose x-range ends at the sweep position.
    fn deactivate(&mut self, clipped: &ClippedRect);

    fn len(&self) -> usize;

    /// Returns the lowest part of `span` not covered by any active y-range,
    /// or `None` if the active rectangles cover all of it.
    fn first_gap(&self, span: Interval) -> Option<Interval>;
}

/// Scans y-ranges sorted by start and reports the first hole in `span`.
///
/// `covered_up_to` starts at the bottom of the span and advances over every
/// range that begins at or below it. A range starting above it leaves a gap.
/// Reaching the top of the span ends the scan early.
pub fn scan_gaps<I>(span: Interval, ranges: I) -> Option<Interval>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut covered_up_to = span.start();
    for (start, end) in ranges {
        if covered_up_to < start {
            return Some(Interval::between(covered_up_to, start));
        }
        covered_up_to = covered_up_to.max(end);
        if covered_up_to == span.end() {
            return None;
        }
    }
    Some(Interval::between(covered_up_to, span.end()))
}

/// Active rectangles keyed by id, sorted by `y1` on every query.
#[derive(Debug, Clone, Default)]
pub struct ResortActiveSet {
    by_id: BTreeMap<RectId, Rect>,
}

impl ResortActiveSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActiveSet for ResortActiveSet {
    fn activate(&mut self, clipped: &ClippedRect) {
        self.by_id.insert(clipped.id, clipped.rect);
    }

    fn deactivate(&mut self, clipped: &ClippedRect) {
        self.by_id.remove(&clipped.id);
    }

    fn len(&self) -> usize {
        self.by_id.len()
    }

    fn first_gap(&self, span: Interval) -> Option<Interval> {
        let mut sorted: Vec<&Rect> = self.by_id.values().collect();
        sorted.sort_by(|a, b| a.y1.total_cmp(&b.y1));
        scan_gaps(span, sorted.into_iter().map(|r| (r.y1, r.y2)))
    }
}

/// Total-order key for `f64` so y-coordinates can key a `BTreeMap`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct YKey(f64);

impl Eq for YKey {}

impl Ord for YKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for YKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Active rectangles kept ordered by `(y1, id)` as they enter and leave.
///
/// Insert and remove are O(log k); a coverage query is a single in-order
/// walk with no sorting.
#[derive(Debug, Clone, Default)]
pub struct OrderedActiveSet {
    by_start: BTreeMap<(YKey, RectId), f64>,
}

impl OrderedActiveSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActiveSet for OrderedActiveSet {
    fn activate(&mut self, clipped: &ClippedRect) {
        self.by_start
            .insert((YKey(clipped.rect.y1), clipped.id), clipped.rect.y2);
    }

    fn deactivate(&mut self, clipped: &ClippedRect) {
        self.by_start.remove(&(YKey(clipped.rect.y1), clipped.id));
    }

    fn len(&self) -> usize {
        self.by_start.len()
    }

    fn first_gap(&self, span: Interval) -> Option<Interval> {
        scan_gaps(
            span,
            self.by_start.iter().map(|((start, _), end)| (start.0, *end)),
        )
    }
}
